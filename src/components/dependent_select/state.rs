//! In-memory model behind the dependent select.
//!
//! Pure data – no DOM, no futures – so every ordering rule can be unit tested
//! natively.  Two counters guard asynchronous results:
//!
//! * `generation` is bumped by every issued search *and* every parent change.
//!   A search result is applied only if its token still carries the current
//!   generation, which gives issuance-order application regardless of which
//!   response lands first.
//! * `scope` is bumped by parent changes only.  Hydration checks it, so a
//!   keystroke does not cancel restoring the saved selection but a new parent
//!   does.

use std::collections::HashSet;

use crate::models::SelectOption;

/// Ticket handed out when a search is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryToken {
    generation: u64,
}

/// Ticket handed out when hydration starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeToken {
    scope: u64,
}

#[derive(Debug, Default)]
pub struct DependentSelectionState {
    options: Vec<SelectOption>,
    selected_id: Option<String>,
    query: String,
    generation: u64,
    scope: u64,
}

impl DependentSelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }

    /// Parent changed: drop everything and void outstanding work.
    pub fn invalidate(&mut self) {
        self.options.clear();
        self.selected_id = None;
        self.query.clear();
        self.generation += 1;
        self.scope += 1;
    }

    pub fn begin_search(&mut self, query: &str) -> QueryToken {
        self.generation += 1;
        self.query = query.to_string();
        QueryToken { generation: self.generation }
    }

    pub fn is_current(&self, token: QueryToken) -> bool {
        token.generation == self.generation
    }

    /// Replace the option list with a search result.
    ///
    /// Returns `false` (and leaves state untouched) when the token has been
    /// superseded.  The selected option survives even if the new result no
    /// longer contains it.
    pub fn apply_results(&mut self, token: QueryToken, results: Vec<SelectOption>) -> bool {
        if !self.is_current(token) {
            return false;
        }

        let mut next = dedupe_by_id(results);
        if let Some(selected) = self.selected_id.as_deref() {
            if !next.iter().any(|o| o.id == selected) {
                if let Some(kept) = self.options.iter().find(|o| o.id == selected) {
                    next.insert(0, kept.clone());
                }
            }
        }
        self.options = next;
        true
    }

    pub fn begin_hydration(&self) -> ScopeToken {
        ScopeToken { scope: self.scope }
    }

    /// Merge the unfiltered option list and select `preset_id` if it is known.
    ///
    /// A pick the user made while the fetch was in flight wins over the
    /// preset.  Returns whether the preset ended up selected.  A result from a
    /// stale scope is ignored entirely.
    pub fn apply_hydration(
        &mut self,
        token: ScopeToken,
        results: Vec<SelectOption>,
        preset_id: &str,
    ) -> bool {
        if token.scope != self.scope {
            return false;
        }
        self.merge_options(results);
        match self.selected_id.as_deref() {
            Some(current) => current == preset_id,
            None => self.select(preset_id),
        }
    }

    /// Append options whose id is not known yet, preserving order.
    pub fn merge_options(&mut self, incoming: impl IntoIterator<Item = SelectOption>) {
        for option in incoming {
            if !self.contains(&option.id) {
                self.options.push(option);
            }
        }
    }

    /// Select a known option.  Unknown ids are refused so the selection never
    /// points outside `options`.
    pub fn select(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.selected_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }
}

/// Keep the first occurrence of every id.
pub fn dedupe_by_id(options: Vec<SelectOption>) -> Vec<SelectOption> {
    let mut seen = HashSet::new();
    options
        .into_iter()
        .filter(|o| seen.insert(o.id.clone()))
        .collect()
}
