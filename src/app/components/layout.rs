//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.launch-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }
.launch-card { margin: 0; height: 100%; }
.launch-card h3 { margin-bottom: 0.25rem; }
.launch-card a { text-decoration: none; color: inherit; display: block; }
.badge { display: inline-block; padding: 0.15rem 0.75rem; border-radius: 9999px; font-size: 0.85rem; }
.badge-ok { background: var(--pico-ins-color); color: var(--pico-contrast-inverse); }
.badge-err { background: var(--pico-del-color); color: var(--pico-contrast-inverse); }
.detail-meta { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1rem; }
.centered { text-align: center; padding: 4rem 0; }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Launch Deck", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        // Body content
        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        footer {
            class: "container",
            small { "Launch Deck v{version}" }
        }
    }
}
