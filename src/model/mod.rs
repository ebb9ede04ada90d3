//! Wire types for the upstream launches API.
//!
//! Both records are externally defined by the upstream API; this module only
//! normalizes them. The nullable `rocket` reference is coerced into a
//! canonical placeholder record at the serde boundary so rendering code never
//! branches on presence.

use serde::{Deserialize, Deserializer, Serialize};

/// Display fallback for rocket fields when the upstream omits the rocket.
pub const PLACEHOLDER: &str = "N/A";

/// Rocket sub-record attached to a launch. Purely descriptive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub rocket_id: String,
    pub rocket_name: String,
    pub rocket_type: String,
}

impl Rocket {
    /// The canonical placeholder substituted for a missing or null rocket.
    pub fn placeholder() -> Self {
        Self {
            rocket_id: PLACEHOLDER.to_string(),
            rocket_name: PLACEHOLDER.to_string(),
            rocket_type: PLACEHOLDER.to_string(),
        }
    }
}

/// One launch record as returned by the upstream API.
///
/// `flight_number` is the routing key for the detail page. `rocket` is
/// normalized during deserialization: both an absent key and an explicit
/// `null` yield [`Rocket::placeholder`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub flight_number: u32,
    pub mission_name: String,
    pub launch_year: String,
    /// ISO-like date string; parsed only for display formatting, never
    /// validated.
    pub launch_date_local: String,
    /// Upstream sends `null` for launches that have not flown yet.
    #[serde(default, deserialize_with = "null_as_false")]
    pub launch_success: bool,
    #[serde(default = "Rocket::placeholder", deserialize_with = "rocket_or_placeholder")]
    pub rocket: Rocket,
}

fn rocket_or_placeholder<'de, D>(deserializer: D) -> Result<Rocket, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Rocket>::deserialize(deserializer)?.unwrap_or_else(Rocket::placeholder))
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Format `launch_date_local` as a long-form date ("March 24, 2006").
///
/// Unparseable input is displayed as-is; the upstream string is never
/// validated.
pub fn format_long_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let launch: Launch = serde_json::from_str(
            r#"{
                "flight_number": 1,
                "mission_name": "FalconSat",
                "launch_year": "2006",
                "launch_date_local": "2006-03-25T10:30:00+12:00",
                "launch_success": false,
                "rocket": {
                    "rocket_id": "falcon1",
                    "rocket_name": "Falcon 1",
                    "rocket_type": "Merlin A"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(launch.flight_number, 1);
        assert_eq!(launch.mission_name, "FalconSat");
        assert_eq!(launch.rocket.rocket_name, "Falcon 1");
        assert!(!launch.launch_success);
    }

    #[test]
    fn null_rocket_becomes_placeholder() {
        let launch: Launch = serde_json::from_str(
            r#"{
                "flight_number": 2,
                "mission_name": "DemoSat",
                "launch_year": "2007",
                "launch_date_local": "2007-03-21T13:10:00+12:00",
                "launch_success": false,
                "rocket": null
            }"#,
        )
        .unwrap();

        assert_eq!(launch.rocket.rocket_id, PLACEHOLDER);
        assert_eq!(launch.rocket.rocket_name, PLACEHOLDER);
        assert_eq!(launch.rocket.rocket_type, PLACEHOLDER);
    }

    #[test]
    fn absent_rocket_becomes_placeholder() {
        let launch: Launch = serde_json::from_str(
            r#"{
                "flight_number": 3,
                "mission_name": "Trailblazer",
                "launch_year": "2008",
                "launch_date_local": "2008-08-03T15:34:00+12:00",
                "launch_success": false
            }"#,
        )
        .unwrap();

        assert_eq!(launch.rocket, Rocket::placeholder());
    }

    #[test]
    fn null_launch_success_becomes_false() {
        let launch: Launch = serde_json::from_str(
            r#"{
                "flight_number": 110,
                "mission_name": "Future Mission",
                "launch_year": "2021",
                "launch_date_local": "2021-01-01T00:00:00-05:00",
                "launch_success": null,
                "rocket": null
            }"#,
        )
        .unwrap();

        assert!(!launch.launch_success);
    }

    #[test]
    fn formats_long_date() {
        assert_eq!(
            format_long_date("2006-03-25T10:30:00+12:00"),
            "March 25, 2006"
        );
        assert_eq!(
            format_long_date("2020-12-06T11:17:08-05:00"),
            "December 6, 2020"
        );
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_long_date("not-a-date"), "not-a-date");
        assert_eq!(format_long_date(""), "");
    }

    #[test]
    fn record_round_trips_for_server_fn_transport() {
        let launch = Launch {
            flight_number: 108,
            mission_name: "Sentinel-6".to_string(),
            launch_year: "2020".to_string(),
            launch_date_local: "2020-11-21T09:17:00-08:00".to_string(),
            launch_success: true,
            rocket: Rocket::placeholder(),
        };

        let json = serde_json::to_string(&launch).unwrap();
        let back: Launch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, launch);
    }
}
