use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Message shown to the user for every kind of load failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load recommendations. Please try again.";

/// The one way loading recommendations can fail.
///
/// The variants only feed the console log; the page shows
/// [`FETCH_FAILED_MESSAGE`] regardless of which one occurred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("recommendations endpoint returned HTTP {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed recommendations payload: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| "Unknown error".to_string()),
        };
        FetchError::Network(message)
    }
}

impl From<FetchError> for String {
    fn from(err: FetchError) -> Self {
        err.to_string()
    }
}
