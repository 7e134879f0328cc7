//! [`NavEffects`] backed by the Dioxus router, the app contexts and the
//! browser's window APIs.

use async_trait::async_trait;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use super::actions::{NavEffects, NavError, NavTarget};
use super::progress::ProgressContext;
use super::route_context::RouteContext;
use super::Route;
use crate::route::LevelingRoute;

#[derive(Clone)]
pub struct BrowserEffects {
    pub navigator: Navigator,
    pub progress: ProgressContext,
    pub route: RouteContext,
}

/// Collect effects from the current component scope
pub fn use_browser_effects() -> BrowserEffects {
    BrowserEffects {
        navigator: use_navigator(),
        progress: super::progress::use_progress(),
        route: super::route_context::use_route(),
    }
}

fn route_for(target: &NavTarget) -> Route {
    match target {
        NavTarget::Build => Route::BuildImport {},
        NavTarget::Routes | NavTarget::Act(_) => Route::Routes {},
    }
}

#[async_trait(?Send)]
impl NavEffects for BrowserEffects {
    fn navigate(&self, target: &NavTarget) -> Result<(), NavError> {
        if self.navigator.push(route_for(target)).is_some() {
            return Err(NavError::Navigation(target.path()));
        }
        if let Some(anchor) = target.anchor() {
            set_location_hash(&anchor)?;
        }
        Ok(())
    }

    fn clear_route_progress(&self) {
        self.progress.clear_route_progress();
    }

    fn clear_gem_progress(&self) {
        self.progress.clear_gem_progress();
    }

    fn open_external(&self, url: &str) -> Result<(), NavError> {
        open_in_new_context(url)
    }

    async fn current_route(&self) -> Result<LevelingRoute, NavError> {
        self.route.current().await
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), NavError> {
        write_clipboard_text(text).await
    }
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn set_location_hash(anchor: &str) -> Result<(), NavError> {
    let window = web_sys::window().ok_or_else(|| NavError::Navigation("no window".to_string()))?;
    window
        .location()
        .set_hash(anchor)
        .map_err(|e| NavError::Navigation(format!("{:?}", e)))
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_context(url: &str) -> Result<(), NavError> {
    let window = web_sys::window().ok_or_else(|| NavError::Navigation("no window".to_string()))?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(opened)) => {
            let _ = opened.focus();
            Ok(())
        }
        // Blocked by the browser's popup policy
        Ok(None) => Err(NavError::Navigation(format!("window for {} was blocked", url))),
        Err(e) => Err(NavError::Navigation(format!("{:?}", e))),
    }
}

#[cfg(target_arch = "wasm32")]
async fn write_clipboard_text(text: &str) -> Result<(), NavError> {
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| NavError::Clipboard("no window".to_string()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| NavError::Clipboard(format!("{:?}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
fn set_location_hash(_anchor: &str) -> Result<(), NavError> {
    Err(NavError::Unsupported("location hash"))
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_new_context(_url: &str) -> Result<(), NavError> {
    Err(NavError::Unsupported("opening external URLs"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn write_clipboard_text(_text: &str) -> Result<(), NavError> {
    Err(NavError::Unsupported("clipboard"))
}
