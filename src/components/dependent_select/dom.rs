//! Browser bindings for the dependent select.
//!
//! The dependent `<select>` stays in the form as the value carrier; a search
//! `<input>` is inserted in front of it and drives the remote search.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Document, Event, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use super::{DependentSearchSelect, ParentControl, SearchableSelect};
use crate::constants::{
    DEPENDENT_SELECT_ID, PARENT_SELECT_ID, PRESELECTED_DATA_KEY, SEARCH_INPUT_CLASS,
    SEARCH_PLACEHOLDER, WRAPPER_CLASS,
};
use crate::debug_log;
use crate::dom_utils;
use crate::macros::console_warn;
use crate::models::{parent_scope, SelectOption};
use crate::network::{self, HttpOptionSource};

/// Element ids and presentation for one parent/dependent pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectConfig {
    pub parent_id: String,
    pub dependent_id: String,
    pub preselected_data_key: String,
    pub placeholder: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            parent_id: PARENT_SELECT_ID.to_string(),
            dependent_id: DEPENDENT_SELECT_ID.to_string(),
            preselected_data_key: PRESELECTED_DATA_KEY.to_string(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl ParentControl for HtmlSelectElement {
    fn current_value(&self) -> Option<String> {
        parent_scope(&self.value())
    }
}

/// A native `<select>` plus the search box that feeds it.
pub struct DomSearchSelect {
    select: HtmlSelectElement,
    search_input: HtmlInputElement,
    preselected_data_key: String,
}

impl DomSearchSelect {
    /// Decorate `select` with a search input.  Re-attaching to an already
    /// decorated select reuses the existing input.
    pub fn attach(
        document: &Document,
        select: HtmlSelectElement,
        config: &SelectConfig,
    ) -> Result<Self, JsValue> {
        let existing = select
            .previous_element_sibling()
            .filter(|el| el.class_list().contains(SEARCH_INPUT_CLASS))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        let search_input = match existing {
            Some(input) => input,
            None => {
                let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
                input.set_type("search");
                input.set_class_name(SEARCH_INPUT_CLASS);
                input.set_placeholder(&config.placeholder);
                input.set_autocomplete("off");
                if let Some(parent) = select.parent_node() {
                    parent.insert_before(&input, Some(&select))?;
                }
                input
            }
        };
        select.class_list().add_1(WRAPPER_CLASS)?;

        Ok(Self {
            select,
            search_input,
            preselected_data_key: config.preselected_data_key.clone(),
        })
    }

    pub fn select_element(&self) -> &HtmlSelectElement {
        &self.select
    }

    pub fn search_input(&self) -> &HtmlInputElement {
        &self.search_input
    }

    fn append_option(&self, text: &str, value: &str) -> Result<(), JsValue> {
        let option = HtmlOptionElement::new_with_text_and_value(text, value)?;
        self.select.append_child(&option)?;
        Ok(())
    }
}

impl SearchableSelect for DomSearchSelect {
    fn clear_options(&self) {
        self.select.set_inner_html("");
        // Leading blank entry keeps "nothing selected" representable.
        if let Err(e) = self.append_option("", "") {
            console_warn(&format!("could not add placeholder option: {:?}", e));
        }
    }

    fn clear_selection(&self) {
        self.select.set_value("");
    }

    fn add_option(&self, option: &SelectOption) {
        if let Err(e) = self.append_option(&option.text, &option.id) {
            console_warn(&format!("could not add option {}: {:?}", option.id, e));
        }
    }

    fn set_selected(&self, id: &str) {
        self.select.set_value(id);
    }

    fn clear_query(&self) {
        self.search_input.set_value("");
    }

    fn preselected_id(&self) -> Option<String> {
        self.select.dataset().get(&self.preselected_data_key)
    }
}

pub type SectionSelect = DependentSearchSelect<HtmlSelectElement, DomSearchSelect, HttpOptionSource>;

/// Find the configured controls, wire their events and start hydration.
///
/// Returns `Ok(None)` when the page does not carry both controls; the page
/// is left untouched in that case.
pub fn mount_section_select(
    document: &Document,
    config: &SelectConfig,
) -> Result<Option<Rc<SectionSelect>>, JsValue> {
    let parent = dom_utils::select_by_id(document, &config.parent_id);
    let dependent = dom_utils::select_by_id(document, &config.dependent_id);
    let (Some(parent), Some(dependent)) = (parent, dependent) else {
        debug_log!("dependent select: controls not on page, skipping");
        return Ok(None);
    };
    let dependent = DomSearchSelect::attach(document, dependent, config)?;

    let source = HttpOptionSource::new(network::api_config());
    let Some(component) = DependentSearchSelect::initialize(Some(parent), Some(dependent), source) else {
        return Ok(None);
    };

    bind_events(&component)?;

    let hydrating = component.clone();
    spawn_local(async move {
        hydrating.hydrate_from_page().await;
    });

    Ok(Some(component))
}

fn bind_events(component: &Rc<SectionSelect>) -> Result<(), JsValue> {
    // Parent change → void dependent scope
    {
        let c = component.clone();
        dom_utils::listen(component.parent(), "change", move |_: Event| {
            c.on_parent_change();
        })?;
    }

    // Typing → incremental search
    {
        let c = component.clone();
        let input = component.dependent().search_input().clone();
        dom_utils::listen(component.dependent().search_input(), "input", move |_: Event| {
            let query = input.value();
            let c = c.clone();
            spawn_local(async move {
                c.search(&query).await;
            });
        })?;
    }

    // Opening the dropdown loads the unfiltered list
    {
        let c = component.clone();
        let input = component.dependent().search_input().clone();
        dom_utils::listen(component.dependent().search_input(), "focus", move |_: Event| {
            if !input.value().is_empty() {
                return;
            }
            let c = c.clone();
            spawn_local(async move {
                c.search("").await;
            });
        })?;
    }

    // Direct pick in the native select
    {
        let c = component.clone();
        let select = component.dependent().select_element().clone();
        dom_utils::listen(component.dependent().select_element(), "change", move |_: Event| {
            c.on_user_select(&select.value());
        })?;
    }

    Ok(())
}

/// JS-facing handle so other scripts can drive a mounted select, e.g. a
/// third-party dropdown using `search()` as its async data source.
#[wasm_bindgen]
pub struct DependentSelectHandle {
    inner: Rc<SectionSelect>,
}

#[wasm_bindgen]
impl DependentSelectHandle {
    /// Resolves to an array of `{ id, text }`; never rejects.
    pub fn search(&self, query: String) -> js_sys::Promise {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let options = inner.search(&query).await;
            Ok(serde_wasm_bindgen::to_value(&options).unwrap_or_else(|_| js_sys::Array::new().into()))
        })
    }

    #[wasm_bindgen(js_name = parentChanged)]
    pub fn parent_changed(&self) {
        self.inner.on_parent_change();
    }

    #[wasm_bindgen(js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.inner.selected_id()
    }
}

/// Mount a parent/dependent pair by element id from JS.
#[wasm_bindgen(js_name = mountDependentSelect)]
pub fn mount_dependent_select(
    parent_id: &str,
    dependent_id: &str,
) -> Result<Option<DependentSelectHandle>, JsValue> {
    let document = dom_utils::document().ok_or_else(|| JsValue::from_str("no document"))?;
    let config = SelectConfig {
        parent_id: parent_id.to_string(),
        dependent_id: dependent_id.to_string(),
        ..SelectConfig::default()
    };
    Ok(mount_section_select(&document, &config)?.map(|inner| DependentSelectHandle { inner }))
}
