//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;

use pages::{LaunchDetail, Launches};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Launches {},
    #[route("/launches/:id")]
    LaunchDetail { id: u32 },
}
