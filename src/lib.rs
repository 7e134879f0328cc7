//! Exile Leveling - leveling route guide web app
//!
//! This library provides:
//! - The Dioxus web UI with its collapsible navigation bar
//! - Route and progress contexts the navbar acts on
//! - Route data types and the route file loader
//! - HTTP API and configuration for the server build

#[cfg(feature = "server")]
pub mod api;
pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod route;
