//! Progress store with localStorage persistence.
//!
//! Holds two independent sets: completed route steps and acquired gems.
//! Each can be cleared on its own; the navbar's reset item clears both.

use std::collections::BTreeSet;

use dioxus::prelude::*;

pub const ROUTE_PROGRESS_KEY: &str = "route-progress";
pub const GEM_PROGRESS_KEY: &str = "gem-progress";

/// Global progress state shared via context
#[derive(Clone, Copy)]
pub struct ProgressContext {
    route: Signal<BTreeSet<String>>,
    gems: Signal<BTreeSet<String>>,
}

impl ProgressContext {
    pub fn is_step_done(&self, step_id: &str) -> bool {
        self.route.read().contains(step_id)
    }

    pub fn completed_steps(&self) -> usize {
        self.route.read().len()
    }

    /// Flip a route step between done and not done
    pub fn toggle_step(&self, step_id: &str) {
        let mut route = self.route;
        {
            let mut set = route.write();
            if !set.remove(step_id) {
                set.insert(step_id.to_string());
            }
        }
        save(ROUTE_PROGRESS_KEY, &route.read());
    }

    pub fn gems(&self) -> BTreeSet<String> {
        self.gems.read().clone()
    }

    /// Replace the tracked gem list
    pub fn set_gems(&self, gems: BTreeSet<String>) {
        let mut current = self.gems;
        save(GEM_PROGRESS_KEY, &gems);
        current.set(gems);
    }

    pub fn clear_route_progress(&self) {
        let mut route = self.route;
        route.set(BTreeSet::new());
        remove(ROUTE_PROGRESS_KEY);
    }

    pub fn clear_gem_progress(&self) {
        let mut gems = self.gems;
        gems.set(BTreeSet::new());
        remove(GEM_PROGRESS_KEY);
    }
}

/// Initialize progress context provider - call once at app root
pub fn use_progress_provider() {
    let route = use_signal(BTreeSet::new);
    let gems = use_signal(BTreeSet::new);

    use_context_provider(|| ProgressContext { route, gems });

    // Client-side only: load persisted progress after hydration
    #[cfg(target_arch = "wasm32")]
    {
        let mut route = route;
        let mut gems = gems;
        use_effect(move || {
            route.set(load(ROUTE_PROGRESS_KEY));
            gems.set(load(GEM_PROGRESS_KEY));
        });
    }
}

/// Get progress context - use in any component
pub fn use_progress() -> ProgressContext {
    use_context::<ProgressContext>()
}

/// Decode a stored progress set. Corrupt data counts as no progress.
pub fn decode_progress(raw: &str) -> BTreeSet<String> {
    match serde_json::from_str(raw) {
        Ok(set) => set,
        Err(e) => {
            tracing::warn!("Discarding unreadable progress data: {}", e);
            BTreeSet::new()
        }
    }
}

pub fn encode_progress(set: &BTreeSet<String>) -> String {
    serde_json::to_string(set).unwrap_or_else(|_| "[]".to_string())
}

// ============ Storage helpers ============

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn load(key: &str) -> BTreeSet<String> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .map(|raw| decode_progress(&raw))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn save(key: &str, set: &BTreeSet<String>) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, &encode_progress(set)).is_err() {
            tracing::warn!("Failed to persist {}", key);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// Nothing to persist during SSR
#[cfg(not(target_arch = "wasm32"))]
fn save(_key: &str, _set: &BTreeSet<String>) {}

#[cfg(not(target_arch = "wasm32"))]
fn remove(_key: &str) {}
