//! Flash-message toasts.
//!
//! The server renders queued flash messages as `<div data-flash="category">`
//! elements.  On page load they are moved into a fixed `#toast-root`
//! container and fade out after a few seconds.  Scripts can raise the same
//! toasts through the exported `flash()` function.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::constants::{FLASH_DISMISS_MS, FLASH_SELECTOR};
use crate::dom_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
    Warning,
    Info,
}

impl FlashKind {
    /// Map a server flash category; unknown categories are informational.
    pub fn from_category(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "success" => FlashKind::Success,
            "error" | "danger" => FlashKind::Error,
            "warning" | "warn" => FlashKind::Warning,
            _ => FlashKind::Info,
        }
    }

    fn class(self) -> &'static str {
        match self {
            FlashKind::Success => "toast-success",
            FlashKind::Error => "toast-error",
            FlashKind::Warning => "toast-warning",
            FlashKind::Info => "toast-info",
        }
    }
}

/// Raise a toast from JS: `flash("Saved", "success")`.
#[wasm_bindgen(js_name = flash)]
pub fn flash_js(message: &str, category: &str) -> Result<(), JsValue> {
    let document = dom_utils::document().ok_or_else(|| JsValue::from_str("no document"))?;
    show(&document, message, FlashKind::from_category(category))
}

pub fn show(document: &Document, message: &str, kind: FlashKind) -> Result<(), JsValue> {
    ensure_styles(document)?;
    let root = ensure_root(document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name("toast");
    toast.class_list().add_1(kind.class())?;
    toast.set_attribute("role", if kind == FlashKind::Error { "alert" } else { "status" })?;
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    Timeout::new(FLASH_DISMISS_MS, move || dom_utils::detach(&toast)).forget();
    Ok(())
}

/// Turn every server-rendered flash element into a toast.  Returns how many
/// were promoted.
pub fn promote_server_flashes(document: &Document) -> Result<usize, JsValue> {
    let nodes = document.query_selector_all(FLASH_SELECTOR)?;
    let mut promoted = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let kind = FlashKind::from_category(&el.get_attribute("data-flash").unwrap_or_default());
        let message = el.text_content().unwrap_or_default();
        dom_utils::hide(&el);
        dom_utils::detach(&el);

        let message = message.trim();
        if message.is_empty() {
            continue;
        }
        show(document, message, kind)?;
        promoted += 1;
    }
    Ok(promoted)
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("toast-styles").is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999}
.toast{padding:10px 16px;border-radius:8px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
.toast-warning{background:#d97706}
.toast-info{background:#2563eb}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style")?;
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        // fallback – append to body
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&style)?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_categories_map_to_kinds() {
        assert_eq!(FlashKind::from_category("success"), FlashKind::Success);
        assert_eq!(FlashKind::from_category("danger"), FlashKind::Error);
        assert_eq!(FlashKind::from_category(" Error "), FlashKind::Error);
        assert_eq!(FlashKind::from_category("warning"), FlashKind::Warning);
        assert_eq!(FlashKind::from_category("message"), FlashKind::Info);
        assert_eq!(FlashKind::from_category(""), FlashKind::Info);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn server_flashes_become_toasts() {
        let document = dom_utils::document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(
            r#"<div data-flash="success">Section saved</div><div data-flash="danger">  </div>"#,
        );
        document.body().unwrap().append_child(&host).unwrap();

        assert_eq!(promote_server_flashes(&document).unwrap(), 1);
        assert!(document.query_selector(FLASH_SELECTOR).unwrap().is_none());

        let root = document.get_element_by_id("toast-root").unwrap();
        let toast = root.first_element_child().unwrap();
        assert!(toast.class_list().contains("toast-success"));
        assert_eq!(toast.text_content().as_deref(), Some("Section saved"));
        host.remove();
    }
}
