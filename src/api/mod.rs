//! HTTP API handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::api::NavSettings;
use crate::route::LevelingRoute;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub route: Arc<LevelingRoute>,
    pub nav: NavSettings,
    pub started: Instant,
}

impl AppState {
    pub fn new(route: LevelingRoute, nav: NavSettings) -> Self {
        Self {
            route: Arc::new(route),
            nav,
            started: Instant::now(),
        }
    }
}

/// General status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub route_sections: usize,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "exile-leveling",
        version: env!("EXILE_VERSION"),
        git_sha: env!("EXILE_GIT_SHA"),
        uptime_secs: state.started.elapsed().as_secs(),
        route_sections: state.route.len(),
    })
}

/// GET /api/route - The computed route
pub async fn route_handler(State(state): State<AppState>) -> Json<LevelingRoute> {
    Json(state.route.as_ref().clone())
}

/// GET /api/nav - Navbar settings
pub async fn nav_settings_handler(State(state): State<AppState>) -> Json<NavSettings> {
    Json(state.nav.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{RouteSection, RouteStep};

    fn state() -> AppState {
        AppState::new(
            vec![RouteSection {
                name: "Act 1".to_string(),
                steps: vec![RouteStep {
                    id: "a1-1".to_string(),
                    text: "Kill Hillock".to_string(),
                }],
            }],
            NavSettings {
                act_count: 3,
                feedback_url: "https://example.com/feedback".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_status_reports_route_sections() {
        let Json(status) = status_handler(State(state())).await;
        assert_eq!(status.service, "exile-leveling");
        assert_eq!(status.route_sections, 1);
    }

    #[tokio::test]
    async fn test_route_handler_serves_route() {
        let state = state();
        let Json(route) = route_handler(State(state.clone())).await;
        assert_eq!(&route, state.route.as_ref());
    }

    #[tokio::test]
    async fn test_nav_settings_handler() {
        let Json(nav) = nav_settings_handler(State(state())).await;
        assert_eq!(nav.act_count, 3);
        assert_eq!(nav.feedback_url, "https://example.com/feedback");
    }
}
