//! Error type for page initialization and browser glue.
//!
//! ERROR HANDLING
//! ==============
//! Missing or mistyped DOM hooks are reported once, at mount time, instead of
//! surfacing later inside an event handler. Handlers themselves log and
//! swallow recoverable failures.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Everything that can stop a page script from mounting.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("localStorage is not available")]
    NoStorage,
    #[error("required element #{id} is missing from the page")]
    MissingElement { id: String },
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("invalid page configuration: {0}")]
    Config(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl ClientError {
    pub fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ClientError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<ClientError> for wasm_bindgen::JsValue {
    fn from(err: ClientError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
