use leptos::window;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the host page assigns its configuration to.
const CONFIG_GLOBAL: &str = "PA_CONFIG";

/// Configuration injected by the host page before the app starts.
///
/// Every field is optional and unknown fields (e.g. a cache buster) are
/// ignored, so old and new host pages can serve the same bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub base_path: String,
    pub default_match_mode: Option<String>,
    pub default_limit: Option<u64>,
}

impl PageConfig {
    /// Reads `window.PA_CONFIG` once at startup.
    ///
    /// A missing or malformed global falls back to the defaults;
    /// configuration is never an error path.
    pub fn load() -> Self {
        let Ok(value) = js_sys::Reflect::get(window().as_ref(), &JsValue::from_str(CONFIG_GLOBAL))
        else {
            return Self::default();
        };
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed {CONFIG_GLOBAL}: {err}");
                Self::default()
            }
        }
    }

    /// Prefix shared by all API endpoint URLs.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_path.trim_end_matches('/'))
    }

    /// Match mode to pre-select, if the page provides a usable one.
    #[must_use]
    pub fn initial_mode(&self) -> Option<&str> {
        self.default_match_mode
            .as_deref()
            .filter(|mode| !mode.is_empty())
    }

    /// Result limit to pre-fill the limit field with.
    ///
    /// Zero counts as not configured.
    #[must_use]
    pub fn initial_limit(&self) -> Option<u64> {
        self.default_limit.filter(|limit| *limit > 0)
    }
}
