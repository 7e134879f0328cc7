//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod actions;
pub mod api;
pub mod browser_effects;
pub mod components;
pub mod nav_state;
pub mod pages;
pub mod progress;
pub mod route_context;
pub mod settings_context;

use components::Layout;
use pages::{BuildImport, Routes};
use progress::use_progress_provider;
use route_context::use_route_provider;
use settings_context::use_settings_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Progress store (localStorage-backed route and gem progress)
    use_progress_provider();

    // Route provider (fetches /api/route once)
    use_route_provider();

    // Navbar settings (act count, feedback link)
    use_settings_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Routes {},
        #[route("/build")]
        BuildImport {},
}
