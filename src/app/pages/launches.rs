//! Launch collection page component.
//!
//! Fetches the full launch list on mount and renders one card per record.
//! A failed fetch is logged and leaves the list empty; the page then shows
//! the empty state rather than an error.

use dioxus::prelude::*;

use crate::app::api::list_launches;
use crate::app::components::Layout;
use crate::app::Route;
use crate::model::{format_long_date, Launch};

/// Render state for one collection-page activation.
#[derive(Clone, Debug, PartialEq)]
enum ListState {
    Loading,
    Empty,
    Populated(Vec<Launch>),
}

impl ListState {
    /// Map the resource value onto the three render branches. A swallowed
    /// fetch failure arrives here as an empty list and lands in `Empty`.
    fn from_fetch(fetch: Option<Vec<Launch>>) -> Self {
        match fetch {
            None => Self::Loading,
            Some(list) if list.is_empty() => Self::Empty,
            Some(list) => Self::Populated(list),
        }
    }
}

/// Render key for one launch card.
fn card_key(launch: &Launch) -> String {
    format!("{}-{}", launch.flight_number, launch.mission_name)
}

/// Launch collection page component.
#[component]
pub fn Launches() -> Element {
    let launches = use_resource(|| async {
        match list_launches().await {
            Ok(list) => list,
            Err(err) => {
                tracing::error!(%err, "error fetching launches");
                Vec::new()
            }
        }
    });

    let state = ListState::from_fetch(launches.read().clone());

    let content = match state {
        ListState::Loading => rsx! {
            div { class: "centered", aria_busy: "true",
                p { "Loading missions..." }
            }
        },
        ListState::Empty => rsx! {
            PageHeading {}
            div { class: "centered",
                p { "No launches available" }
            }
        },
        ListState::Populated(list) => rsx! {
            PageHeading {}
            div { class: "launch-grid",
                for launch in list {
                    LaunchCard { key: "{card_key(&launch)}", launch }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Launches".to_string(),
            nav_active: "launches".to_string(),

            section { id: "launches",
                {content}
            }
        }
    }
}

/// Collection page heading, hidden while the fetch is outstanding.
#[component]
fn PageHeading() -> Element {
    rsx! {
        hgroup { class: "centered",
            h1 { "SpaceX Launches" }
            p { "Exploring the future of space travel" }
        }
    }
}

/// Summary card for one launch, linking to its detail page.
#[component]
fn LaunchCard(launch: Launch) -> Element {
    let date = format_long_date(&launch.launch_date_local);
    let (badge_class, badge_label) = if launch.launch_success {
        ("badge badge-ok", "Successful")
    } else {
        ("badge badge-err", "Failed")
    };

    rsx! {
        article { class: "launch-card",
            Link { to: Route::LaunchDetail { id: launch.flight_number },
                h3 { "{launch.mission_name}" }
                small { "{launch.launch_year}" }
                p { "{date}" }
                div {
                    span { class: badge_class, "{badge_label}" }
                    " "
                    small { "🚀 {launch.rocket.rocket_name}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rocket;
    use std::collections::HashSet;

    fn record(flight_number: u32, mission_name: &str) -> Launch {
        Launch {
            flight_number,
            mission_name: mission_name.to_string(),
            launch_year: "2008".to_string(),
            launch_date_local: "2008-09-28T23:15:00+12:00".to_string(),
            launch_success: true,
            rocket: Rocket::placeholder(),
        }
    }

    #[test]
    fn outstanding_fetch_is_loading() {
        assert_eq!(ListState::from_fetch(None), ListState::Loading);
    }

    #[test]
    fn empty_collection_is_the_empty_state_never_populated() {
        assert_eq!(ListState::from_fetch(Some(Vec::new())), ListState::Empty);
    }

    #[test]
    fn n_records_populate_n_cards_with_unique_keys() {
        let list = vec![
            record(1, "FalconSat"),
            record(2, "DemoSat"),
            record(3, "Trailblazer"),
        ];

        match ListState::from_fetch(Some(list)) {
            ListState::Populated(launches) => {
                assert_eq!(launches.len(), 3);
                let keys: HashSet<String> = launches.iter().map(card_key).collect();
                assert_eq!(keys.len(), 3);
            }
            other => panic!("expected populated, got {other:?}"),
        }
    }

    #[test]
    fn card_key_combines_flight_number_and_mission_name() {
        assert_eq!(card_key(&record(4, "RatSat")), "4-RatSat");
    }
}
