use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::config::ApiConfig;
use crate::components::dependent_select::OptionSource;
use crate::error::SearchError;
use crate::models::{parse_options, SelectOption};

// REST client for the admin JSON endpoints
pub struct ApiClient;

impl ApiClient {
    /// Search sections of an education level.  A blank `education_level_id`
    /// never reaches the network.
    pub async fn search_sections(
        config: &ApiConfig,
        education_level_id: &str,
        query: &str,
    ) -> Result<Vec<SelectOption>, SearchError> {
        let Some(url) = config.section_search_url(education_level_id, query) else {
            return Ok(Vec::new());
        };
        let body = Self::fetch_json(&url).await?;
        Ok(parse_options(&body)?)
    }

    // Helper function to make GET requests against same-origin JSON endpoints
    pub async fn fetch_json(url: &str) -> Result<String, SearchError> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let headers = Headers::new().map_err(SearchError::transport)?;
        headers
            .append("Accept", "application/json")
            .map_err(SearchError::transport)?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(SearchError::transport)?;

        let window = web_sys::window().ok_or(SearchError::NoWindow)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(SearchError::transport)?;
        let resp: Response = resp_value.dyn_into().map_err(SearchError::transport)?;

        if !resp.ok() {
            return Err(SearchError::Status {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        // Parse body as text – caller decodes JSON so serde reports the error.
        let text = JsFuture::from(resp.text().map_err(SearchError::transport)?)
            .await
            .map_err(SearchError::transport)?;
        text.as_string()
            .ok_or_else(|| SearchError::Parse("response body is not text".to_string()))
    }
}

/// `OptionSource` backed by the real search endpoint.
#[derive(Debug, Clone, Default)]
pub struct HttpOptionSource {
    config: ApiConfig,
}

impl HttpOptionSource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl OptionSource for HttpOptionSource {
    async fn fetch(&self, parent: &str, query: &str) -> Result<Vec<SelectOption>, SearchError> {
        ApiClient::search_sections(&self.config, parent, query).await
    }
}
