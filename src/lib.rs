//! Launch Deck
//!
//! A browser-rendered catalogue of SpaceX launch records.
//!
//! This library provides:
//! - A launch listing page and a per-flight detail page (Dioxus fullstack)
//! - A same-origin proxy for the upstream launches API
//! - A typed upstream client with placeholder normalization for optional
//!   rocket data

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Wire types for launch records (shared between server and WASM client)
pub mod model;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod upstream;
