//! Client-side API types and fetch helpers.
//!
//! The server exposes a handful of read-only JSON endpoints; these are the
//! shapes the web client deserializes them into.

use serde::{Deserialize, Serialize};

/// Community feedback channel opened by the navbar's feedback item
pub const DEFAULT_FEEDBACK_URL: &str = "https://qun.qq.com/qqweb/qunpro/share?_wv=3&_wwv=128&appChannel=share&inviteCode=1W4pmrF&appChannel=share&businessType=9&from=246610&biz=ka";

/// Number of acts in the campaign
pub const DEFAULT_ACT_COUNT: u8 = 10;

// =============================================================================
// Navbar Settings
// =============================================================================

/// Navbar settings served by `/api/nav`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavSettings {
    #[serde(default = "default_act_count")]
    pub act_count: u8,
    #[serde(default = "default_feedback_url")]
    pub feedback_url: String,
}

fn default_act_count() -> u8 {
    DEFAULT_ACT_COUNT
}

fn default_feedback_url() -> String {
    DEFAULT_FEEDBACK_URL.to_string()
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            act_count: default_act_count(),
            feedback_url: default_feedback_url(),
        }
    }
}

// =============================================================================
// Client-side fetch helpers (for use in effects/resources)
// =============================================================================

/// Fetch JSON from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP {} from {}", resp.status(), url));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(_url: &str) -> Result<T, String> {
    Err("fetch_json is only available in browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_settings_defaults_fill_missing_fields() {
        let settings: NavSettings = serde_json::from_str(r#"{"act_count": 4}"#).unwrap();
        assert_eq!(settings.act_count, 4);
        assert_eq!(settings.feedback_url, DEFAULT_FEEDBACK_URL);

        let settings: NavSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, NavSettings::default());
    }
}
