use crate::constants::{PARENT_QUERY_PARAM, SECTION_SEARCH_PATH, TEXT_QUERY_PARAM};

/// API route configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    // When empty the admin pages are same-origin and URLs stay relative
    // ("/admin/api/...").
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin configuration.  The admin pages are served by the same
    /// backend that answers the search endpoint, so this is also what
    /// production uses unless `API_BASE_URL` was set at build time or
    /// `initApiConfig()` was called from the page.
    fn default() -> Self {
        Self { base_url: String::new() }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    pub fn new() -> Self {
        // Env var is optional – fall back to same-origin when missing.
        let base = option_env!("API_BASE_URL").unwrap_or("");
        Self::from_url(base)
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for the section search endpoint.
    ///
    /// Returns `None` for a blank parent: the endpoint must never see an empty
    /// `education_level_id`.
    pub fn section_search_url(&self, parent: &str, query: &str) -> Option<String> {
        let parent = parent.trim();
        if parent.is_empty() {
            return None;
        }
        Some(format!(
            "{}{}?{}={}&{}={}",
            self.base_url,
            SECTION_SEARCH_PATH,
            PARENT_QUERY_PARAM,
            urlencoding::encode(parent),
            TEXT_QUERY_PARAM,
            urlencoding::encode(query),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_origin_url_is_relative() {
        let cfg = ApiConfig::default();
        assert_eq!(
            cfg.section_search_url("3", "").as_deref(),
            Some("/admin/api/sections/search?education_level_id=3&q=")
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let cfg = ApiConfig::from_url("https://school.example.org/ ");
        assert_eq!(cfg.base_url(), "https://school.example.org");
        assert_eq!(
            cfg.section_search_url("high-school", "grade 10").as_deref(),
            Some("https://school.example.org/admin/api/sections/search?education_level_id=high-school&q=grade%2010")
        );
    }

    #[test]
    fn query_is_percent_encoded() {
        let cfg = ApiConfig::default();
        let url = cfg.section_search_url("1", "a&b=c").unwrap();
        assert!(url.ends_with("&q=a%26b%3Dc"));
    }

    #[test]
    fn blank_parent_yields_no_url() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.section_search_url("", "x"), None);
        assert_eq!(cfg.section_search_url("  ", ""), None);
    }

    proptest! {
        #[test]
        fn url_never_leaks_raw_query(parent in "[a-z0-9-]{1,12}", query in ".{0,24}") {
            let url = ApiConfig::default().section_search_url(&parent, &query).unwrap();
            let tail = url.split("&q=").nth(1).unwrap();
            prop_assert!(!tail.contains('&'));
            prop_assert!(!tail.contains(' '));
            let param = format!("education_level_id={}&", parent);
            prop_assert!(url.contains(&param));
        }
    }
}
