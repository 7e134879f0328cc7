//! Leveling route data shared between the server and the web client.
//!
//! The route itself is computed elsewhere; this module only carries it
//! around. The server loads it from a JSON file and hands it to the UI,
//! and the navbar's "copy route" action serializes it back to JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One step within an act.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteStep {
    /// Stable id used as the progress key
    pub id: String,
    pub text: String,
}

/// A named section of the route, usually one act.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteSection {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

/// The full computed route, in play order.
pub type LevelingRoute = Vec<RouteSection>;

/// Total number of steps across all sections
pub fn step_count(route: &[RouteSection]) -> usize {
    route.iter().map(|s| s.steps.len()).sum()
}

/// Load a route from a JSON file.
///
/// A missing file is not an error: the app still works with an empty route,
/// so this logs a warning and returns an empty route. A file that exists but
/// does not parse is an error.
pub fn load_route_file(path: &Path) -> Result<LevelingRoute> {
    if !path.exists() {
        tracing::warn!(
            "Route file {} not found, serving an empty route",
            path.display()
        );
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route file {}", path.display()))?;
    let route: LevelingRoute = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse route file {}", path.display()))?;

    tracing::info!(
        "Loaded route with {} sections ({} steps) from {}",
        route.len(),
        step_count(&route),
        path.display()
    );
    Ok(route)
}
