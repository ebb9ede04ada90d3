//! Dioxus fullstack page components.
//!
//! These pages use Dioxus resources and server functions for data fetching.

mod launch_detail;
mod launches;

pub use launch_detail::LaunchDetail;
pub use launches::Launches;
