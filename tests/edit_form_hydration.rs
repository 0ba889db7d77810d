//! Edit-form scenario driven through the public API: a saved section is
//! restored once the education level's sections are loaded, and survives
//! until the education level changes.
//!
//! Run with: cargo test --test edit_form_hydration

use std::cell::RefCell;

use admin_ui_frontend::components::dependent_select::{
    DependentSearchSelect, OptionSource, ParentControl, SearchableSelect,
};
use admin_ui_frontend::error::SearchError;
use admin_ui_frontend::models::{parse_options, SelectOption};
use futures::executor::block_on;

struct EducationLevel(RefCell<String>);

impl ParentControl for EducationLevel {
    fn current_value(&self) -> Option<String> {
        admin_ui_frontend::models::parent_scope(&self.0.borrow())
    }
}

#[derive(Default)]
struct SectionPicker {
    options: RefCell<Vec<String>>,
    selected: RefCell<Option<String>>,
}

impl SearchableSelect for SectionPicker {
    fn clear_options(&self) {
        self.options.borrow_mut().clear();
    }
    fn clear_selection(&self) {
        self.selected.replace(None);
    }
    fn add_option(&self, option: &SelectOption) {
        self.options.borrow_mut().push(option.id.clone());
    }
    fn set_selected(&self, id: &str) {
        self.selected.replace(Some(id.to_string()));
    }
    fn clear_query(&self) {}
    fn preselected_id(&self) -> Option<String> {
        Some("sec-42".to_string())
    }
}

/// Answers like the backend does for the "high-school" level.
struct CannedBackend;

impl OptionSource for CannedBackend {
    async fn fetch(&self, parent: &str, query: &str) -> Result<Vec<SelectOption>, SearchError> {
        if parent != "high-school" {
            return Ok(Vec::new());
        }
        let body = r#"[{"id":"sec-42","text":"Grade 10 - A"},{"id":"sec-7","text":"Grade 10 - B"}]"#;
        let all = parse_options(body)?;
        let query = query.to_lowercase();
        Ok(all
            .into_iter()
            .filter(|o| o.text.to_lowercase().contains(&query))
            .collect())
    }
}

#[test]
fn saved_section_is_restored_on_edit() {
    let select = DependentSearchSelect::initialize(
        Some(EducationLevel(RefCell::new("high-school".to_string()))),
        Some(SectionPicker::default()),
        CannedBackend,
    )
    .expect("both controls present");

    assert!(block_on(select.hydrate_from_page()));

    let ids: Vec<String> = select.options().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec!["sec-42", "sec-7"]);
    assert_eq!(select.selected_id().as_deref(), Some("sec-42"));
    assert_eq!(*select.dependent().options.borrow(), vec!["sec-42", "sec-7"]);
    assert_eq!(select.dependent().selected.borrow().as_deref(), Some("sec-42"));

    // Narrowing the search keeps the restored selection visible.
    let hits = block_on(select.search("- B"));
    assert_eq!(hits, vec![SelectOption::new("sec-7", "Grade 10 - B")]);
    assert_eq!(select.selected_id().as_deref(), Some("sec-42"));

    // Switching education level drops it.
    select.parent().0.replace("primary".to_string());
    select.on_parent_change();
    assert!(select.options().is_empty());
    assert_eq!(select.selected_id(), None);
    assert!(block_on(select.search("")).is_empty());
}
