use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

pub mod macros;
pub mod components;
pub mod constants; // Page contract: element ids, endpoint, timings
pub mod dom_utils;
pub mod error;
pub mod flash;
pub mod models;
pub mod network;

use components::dependent_select::{self, SelectConfig};

// Main entry point for the WASM bundle loaded by the admin pages
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    network::init_api_config();

    let document = dom_utils::document().ok_or_else(|| JsValue::from_str("no global document"))?;

    // The bundle may be loaded from <head>; wait for the form controls.
    if is_loading(&document) {
        let doc = document.clone();
        dom_utils::listen(&document, "DOMContentLoaded", move |_: Event| boot(&doc))?;
    } else {
        boot(&document);
    }

    Ok(())
}

// `document.readyState` is a plain string in web-sys.
fn is_loading(document: &Document) -> bool {
    ready_state_is_loading(&document.ready_state())
}

fn ready_state_is_loading(state: &str) -> bool {
    state == "loading"
}

// Mount every page feature whose hosts are present.  Failures are logged
// and never stop the other features.
fn boot(document: &Document) {
    match flash::promote_server_flashes(document) {
        Ok(0) => {}
        Ok(n) => debug_log!("promoted {} flash message(s)", n),
        Err(e) => web_sys::console::error_1(&format!("Failed to show flash messages: {:?}", e).into()),
    }

    match dependent_select::mount_section_select(document, &SelectConfig::default()) {
        Ok(Some(_)) => debug_log!("section select mounted"),
        Ok(None) => {}
        Err(e) => web_sys::console::error_1(&format!("Failed to mount section select: {:?}", e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_state_defers_boot() {
        assert!(ready_state_is_loading("loading"));
        assert!(!ready_state_is_loading("interactive"));
        assert!(!ready_state_is_loading("complete"));
    }
}
