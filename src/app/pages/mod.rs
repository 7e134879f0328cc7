//! Routed views the navbar links to.

mod build;
mod routes;

pub use build::{parse_gem_list, BuildImport};
pub use routes::Routes;
