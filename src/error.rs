//! Error type for the remote option search.
//!
//! None of these ever reach the user: the select component absorbs them and
//! degrades to an empty result.  They exist so the fetch path can use `?` and
//! so the console warning says what actually went wrong.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SearchError {
    /// `window` is unavailable (worker context or early teardown).
    #[error("no global window available")]
    NoWindow,

    /// The request could not be built or `fetch` rejected.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("search endpoint returned {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Body was not the expected JSON array of options.
    #[error("malformed option payload: {0}")]
    Parse(String),
}

impl SearchError {
    /// Wrap a rejected JS value, keeping its debug rendering for the log.
    pub fn transport(err: JsValue) -> Self {
        SearchError::Transport(format!("{:?}", err))
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Parse(err.to_string())
    }
}

impl From<SearchError> for JsValue {
    fn from(err: SearchError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_renders_code_and_text() {
        let err = SearchError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "search endpoint returned 503 Service Unavailable");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: SearchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, SearchError::Parse(_)));
    }
}
