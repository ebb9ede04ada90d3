//! Shared UI components for the Dioxus app.

mod layout;
mod nav;

pub use layout::Layout;
pub use nav::Nav;
