//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Keeps the `Closure::wrap` / `forget()` dance and the `dyn_into` casts in
//! one place so feature modules read as plain event wiring.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlSelectElement};

/// The page document, if running inside a window.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up a `<select>` by id.  `None` when missing or of a different type.
pub fn select_by_id(document: &Document, id: &str) -> Option<HtmlSelectElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
}

/// Attach a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener: the closure must outlive this call.
    closure.forget();
    Ok(())
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Remove an element from its parent, ignoring detached nodes.
pub fn detach(el: &Element) {
    if let Some(parent) = el.parent_node() {
        let _ = parent.remove_child(el);
    }
}
