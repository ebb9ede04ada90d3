//! Navigation bar component.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "launches")
    pub active: String,
}

/// Top navigation bar with brand and page links.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let link_class = |page: &str| {
        if props.active == page {
            "contrast"
        } else {
            "secondary"
        }
    };

    rsx! {
        nav {
            ul {
                li {
                    Link { class: "contrast", to: Route::Launches {},
                        strong { "Launch Deck" }
                    }
                }
            }
            ul {
                li {
                    Link { class: link_class("launches"), to: Route::Launches {}, "Launches" }
                }
                li {
                    a { class: "secondary", href: "/api/launches", "API" }
                }
            }
        }
    }
}
