// Re-export network modules
pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::{ApiClient, HttpOptionSource};

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialize the API configuration from the build environment.  Safe to
/// call more than once; a runtime override from JS wins if it came first.
pub fn init_api_config() {
    if let Ok(mut guard) = API_CONFIG.write() {
        if guard.is_none() {
            *guard = Some(ApiConfig::new());
        }
    }
}

/// Initialize the API configuration from a JS-provided URL.
/// This allows pages served behind a proxy prefix to point the widgets at the
/// right backend.
#[wasm_bindgen(js_name = initApiConfig)]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    let mut guard = API_CONFIG
        .write()
        .map_err(|_| JsValue::from_str("API config lock poisoned"))?;
    *guard = Some(ApiConfig::from_url(api_base_url));
    Ok(())
}

/// Snapshot of the active configuration.  Missing config means same-origin.
pub fn api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}
