//! Activity Board Dashboard
//!
//! Club activity signup page built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with capacity and participant rosters
//! - Signup form with activity selector
//! - Per-participant removal
//! - Auto-dismissing success/error notices
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Rendering decisions come from the `activity-board` core; this
//! crate owns the signals, the DOM, and the gloo-net transport.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
