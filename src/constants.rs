// Page contract for the section picker - these are the single source of truth
// for the ids and attributes the server templates render.
pub const PARENT_SELECT_ID: &str = "educationSelect";
pub const DEPENDENT_SELECT_ID: &str = "sectionSelect";
pub const PRESELECTED_DATA_KEY: &str = "selected"; // data-selected="<id>"

// Search endpoint
pub const SECTION_SEARCH_PATH: &str = "/admin/api/sections/search";
pub const PARENT_QUERY_PARAM: &str = "education_level_id";
pub const TEXT_QUERY_PARAM: &str = "q";

// Widget presentation
pub const SEARCH_PLACEHOLDER: &str = "Search and select a section...";
pub const SEARCH_INPUT_CLASS: &str = "dependent-select-search";
pub const WRAPPER_CLASS: &str = "dependent-select";

// Flash messages
pub const FLASH_SELECTOR: &str = "[data-flash]";
pub const FLASH_DISMISS_MS: u32 = 4000;
