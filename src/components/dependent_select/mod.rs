//! Dependent remote-search select.
//!
//! A *parent* control (education level) scopes a *dependent* searchable
//! select (section) whose options come from the search endpoint.  Changing
//! the parent voids the dependent's options and selection; on an edit page
//! the previously saved id is restored once the parent's options are loaded.
//!
//! The component is generic over its three collaborators so the ordering and
//! failure rules are testable without a browser: see [`dom`] for the real
//! `<select>` bindings and [`HttpOptionSource`](crate::network::HttpOptionSource)
//! for the real endpoint.

pub mod dom;
pub mod state;


use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SearchError;
use crate::macros::console_warn;
use crate::models::SelectOption;
use crate::{debug_log, mut_borrow};

pub use dom::{mount_section_select, DomSearchSelect, SelectConfig};
pub use state::DependentSelectionState;

/// Anything with a current scalar value: the scoping control.
pub trait ParentControl {
    /// Current value, `None` when nothing is selected.
    fn current_value(&self) -> Option<String>;
}

/// The searchable select being populated.
pub trait SearchableSelect {
    fn clear_options(&self);
    fn clear_selection(&self);
    fn add_option(&self, option: &SelectOption);
    fn set_selected(&self, id: &str);
    /// Reset the typed search text.
    fn clear_query(&self);
    /// Id saved by the page template for edit forms, if any.
    fn preselected_id(&self) -> Option<String>;
}

/// Remote data source for options, scoped by parent value.
#[allow(async_fn_in_trait)] // single-threaded wasm, futures are never sent
pub trait OptionSource {
    async fn fetch(&self, parent: &str, query: &str) -> Result<Vec<SelectOption>, SearchError>;
}

pub struct DependentSearchSelect<P, D, S> {
    parent: P,
    dependent: D,
    source: S,
    state: RefCell<DependentSelectionState>,
}

impl<P, D, S> DependentSearchSelect<P, D, S>
where
    P: ParentControl,
    D: SearchableSelect,
    S: OptionSource,
{
    /// Bind the two controls.  Missing controls mean the page does not use
    /// this widget, so nothing is activated.
    pub fn initialize(parent: Option<P>, dependent: Option<D>, source: S) -> Option<Rc<Self>> {
        let (Some(parent), Some(dependent)) = (parent, dependent) else {
            debug_log!("dependent select: controls not on page, skipping");
            return None;
        };
        Some(Rc::new(Self {
            parent,
            dependent,
            source,
            state: RefCell::new(DependentSelectionState::new()),
        }))
    }

    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub fn dependent(&self) -> &D {
        &self.dependent
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.state.borrow().options().to_vec()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.state.borrow().selected_id().map(str::to_string)
    }

    /// Parent value changed: the dependent's options are no longer in scope.
    /// Does not fetch; the next search interaction does.
    pub fn on_parent_change(&self) {
        mut_borrow!(self.state).invalidate();
        self.dependent.clear_options();
        self.dependent.clear_selection();
        self.dependent.clear_query();
    }

    /// The user picked an entry in the dependent control directly.
    pub fn on_user_select(&self, id: &str) {
        let mut state = mut_borrow!(self.state);
        if id.is_empty() || !state.select(id) {
            state.clear_selection();
        }
    }

    /// Incremental search hook.
    ///
    /// Resolves to the options that were applied; an empty list when there
    /// is no parent, when the fetch failed, or when a newer search or parent
    /// change superseded this one before it resolved.
    pub async fn search(&self, query: &str) -> Vec<SelectOption> {
        let Some(parent) = self.parent.current_value() else {
            return Vec::new();
        };

        let token = mut_borrow!(self.state).begin_search(query);
        let results = match self.source.fetch(&parent, query).await {
            Ok(options) => state::dedupe_by_id(options),
            Err(e) => {
                console_warn(&format!("section search for {:?} failed: {}", query, e));
                Vec::new()
            }
        };

        if !mut_borrow!(self.state).apply_results(token, results.clone()) {
            debug_log!("dropping stale search result for {:?}", query);
            return Vec::new();
        }
        self.render();
        results
    }

    /// Restore the saved selection of an edit form.
    ///
    /// Fetches the unfiltered list for the current parent, merges it into the
    /// known options and selects `preset_id`.  Returns whether the preset is
    /// now selected; without a parent nothing is fetched.
    pub async fn hydrate_preselection(&self, preset_id: &str) -> bool {
        let Some(parent) = self.parent.current_value() else {
            debug_log!("no parent value, skipping preselection of {}", preset_id);
            return false;
        };

        let token = self.state.borrow().begin_hydration();
        let options = match self.source.fetch(&parent, "").await {
            Ok(options) => options,
            Err(e) => {
                console_warn(&format!("could not restore section {}: {}", preset_id, e));
                return false;
            }
        };

        let selected = mut_borrow!(self.state).apply_hydration(token, options, preset_id);
        self.render();
        if !selected {
            debug_log!("preset section {} not restored", preset_id);
        }
        selected
    }

    /// Run hydration if the page template declared a saved id.
    pub async fn hydrate_from_page(&self) -> bool {
        match self.dependent.preselected_id().filter(|id| !id.trim().is_empty()) {
            Some(preset) => self.hydrate_preselection(preset.trim()).await,
            None => false,
        }
    }

    /// Push the current state into the dependent control.  The applied
    /// result is rendered as-is; the server already did the matching.
    fn render(&self) {
        let state = self.state.borrow();
        self.dependent.clear_options();
        for option in state.options() {
            self.dependent.add_option(option);
        }
        match state.selected_id() {
            Some(id) => self.dependent.set_selected(id),
            None => self.dependent.clear_selection(),
        }
    }
}
