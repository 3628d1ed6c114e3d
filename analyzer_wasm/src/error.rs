use js_sys::Error as JsError;
use wasm_bindgen::prelude::JsValue;

/// Deterministic errors for malformed host payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingError {
    InvalidSymbols,
    InvalidConfig,
}

impl BindingError {
    pub fn message(self) -> &'static str {
        match self {
            BindingError::InvalidSymbols => "Invalid symbols payload",
            BindingError::InvalidConfig => "Invalid completion config",
        }
    }
}

impl From<BindingError> for JsValue {
    fn from(err: BindingError) -> Self {
        JsError::new(err.message()).into()
    }
}
