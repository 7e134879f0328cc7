//! Route provider context.
//!
//! The route is computed outside the client and served at `/api/route`.
//! The context fetches it once and hands out the cached copy afterwards.

use dioxus::prelude::*;

use super::actions::NavError;
use super::api;
use crate::route::LevelingRoute;

pub const ROUTE_ENDPOINT: &str = "/api/route";

#[derive(Clone, Copy)]
pub struct RouteContext {
    route: Signal<Option<LevelingRoute>>,
}

impl RouteContext {
    /// Route if already loaded
    pub fn get(&self) -> Option<LevelingRoute> {
        self.route.read().clone()
    }

    /// Current route, fetching it on first use
    pub async fn current(&self) -> Result<LevelingRoute, NavError> {
        if let Some(route) = self.get() {
            return Ok(route);
        }

        let route = api::fetch_json::<LevelingRoute>(ROUTE_ENDPOINT)
            .await
            .map_err(NavError::RouteUnavailable)?;

        let mut cached = self.route;
        cached.set(Some(route.clone()));
        Ok(route)
    }
}

/// Initialize route context provider - call once at app root
pub fn use_route_provider() {
    let route = use_signal(|| None::<LevelingRoute>);
    let ctx = RouteContext { route };
    use_context_provider(|| ctx);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            spawn(async move {
                if let Err(e) = ctx.current().await {
                    tracing::warn!("Failed to load route: {}", e);
                }
            });
        });
    }
}

/// Get route context - use in any component
pub fn use_route() -> RouteContext {
    use_context::<RouteContext>()
}
