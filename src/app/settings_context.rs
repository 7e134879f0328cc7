//! Settings context for the navbar.
//!
//! Defaults apply until `/api/nav` answers, so the navbar renders fully
//! during SSR and before hydration.

use dioxus::prelude::*;

use super::api::NavSettings;

pub const NAV_SETTINGS_ENDPOINT: &str = "/api/nav";

/// Global settings state shared via context
#[derive(Clone, Copy)]
pub struct SettingsContext {
    nav: Signal<NavSettings>,
}

impl SettingsContext {
    pub fn nav(&self) -> NavSettings {
        self.nav.read().clone()
    }

    pub fn update(&self, nav: NavSettings) {
        let mut current = self.nav;
        current.set(nav);
    }
}

/// Initialize settings context provider - call once at app root
pub fn use_settings_provider() {
    let nav = use_signal(NavSettings::default);

    let ctx = SettingsContext { nav };
    use_context_provider(|| ctx);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            spawn(async move {
                match crate::app::api::fetch_json::<NavSettings>(NAV_SETTINGS_ENDPOINT).await {
                    Ok(settings) => ctx.update(settings),
                    Err(e) => tracing::warn!("Using default nav settings: {}", e),
                }
            });
        });
    }
}

/// Get settings context - use in any component
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
}
