//! Launch detail page component.
//!
//! Fetches one launch by flight number. The fetch is keyed on the route
//! identifier: navigating to another flight restarts the resource and drops
//! the stale in-flight request. Each result additionally carries the
//! identifier it was fetched for, and a result tagged with a previous
//! identifier is discarded instead of applied, so the render always reflects
//! the latest requested identifier.

use dioxus::prelude::*;

use crate::app::api::get_launch;
use crate::app::components::Layout;
use crate::app::Route;
use crate::model::Launch;

/// A fetch outcome tagged with the flight number it was issued for.
type TaggedFetch = (u32, Result<Option<Launch>, ServerFnError>);

/// Render state for one detail-page activation.
#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    Loading,
    Error(String),
    NotFound,
    Populated(Launch),
}

impl DetailState {
    /// Map the resource value onto the four render states. A result tagged
    /// with an identifier other than the active one is stale and keeps the
    /// page in `Loading` until the active fetch lands. A transport failure
    /// gets a fixed message, never the underlying error detail.
    fn from_fetch(active_id: u32, fetch: Option<TaggedFetch>) -> Self {
        match fetch {
            None => Self::Loading,
            Some((fetched_id, _)) if fetched_id != active_id => Self::Loading,
            Some((_, Err(_))) => Self::Error("Error fetching launch details".to_string()),
            Some((_, Ok(None))) => Self::NotFound,
            Some((_, Ok(Some(launch)))) => Self::Populated(launch),
        }
    }
}

/// Launch detail page component.
#[component]
pub fn LaunchDetail(id: u32) -> Element {
    let fetch = use_resource(use_reactive!(|(id,)| async move {
        let result = match get_launch(id).await {
            Ok(launch) => Ok(launch),
            Err(err) => {
                tracing::error!(%err, flight_number = id, "error fetching launch details");
                Err(err)
            }
        };
        (id, result)
    }));

    let state = DetailState::from_fetch(id, fetch.read().clone());

    let content = match state {
        DetailState::Loading => rsx! {
            div { class: "centered", aria_busy: "true",
                p { "Loading missions..." }
            }
        },
        DetailState::Error(message) => rsx! {
            div { class: "centered",
                p { "{message}" }
                BackLink {}
            }
        },
        DetailState::NotFound => rsx! {
            div { class: "centered",
                p { "Launch not found" }
                BackLink {}
            }
        },
        DetailState::Populated(launch) => rsx! {
            BackLink {}
            LaunchDetails { launch }
        },
    };

    rsx! {
        Layout {
            title: format!("Flight #{id}"),
            nav_active: "launches".to_string(),

            {content}
        }
    }
}

/// Navigation back to the collection page, shown in every terminal state.
#[component]
fn BackLink() -> Element {
    rsx! {
        p {
            Link { to: Route::Launches {}, "← Back to launches" }
        }
    }
}

/// Full record rendering for the populated state.
#[component]
fn LaunchDetails(launch: Launch) -> Element {
    let (badge_class, badge_label) = if launch.launch_success {
        ("badge badge-ok", "✓ Successful")
    } else {
        ("badge badge-err", "✗ Failed")
    };

    rsx! {
        article {
            header {
                h1 { "{launch.mission_name}" }
                span { class: badge_class, "{badge_label}" }
            }
            div { class: "detail-meta",
                div {
                    h3 { "Launch Date" }
                    p { "{launch.launch_date_local}" }
                    h3 { "Flight Number" }
                    p { "#{launch.flight_number}" }
                }
                div {
                    h3 { "Rocket Details" }
                    p { small { "Name: " } "{launch.rocket.rocket_name}" }
                    p { small { "Type: " } "{launch.rocket.rocket_type}" }
                    p { small { "ID: " } "{launch.rocket.rocket_id}" }
                }
            }
        }
    }
}
