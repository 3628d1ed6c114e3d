//! WASM bindings for the Pig Latin completion engine.
//!
//! Positions crossing the boundary are UTF-16 code units (CodeMirror); the engine works
//! in UTF-8 bytes, and `converter` bridges the two.

mod converter;
pub mod dto;
mod error;
pub mod offsets;

use pig_ide::{CompletionConfig, CompletionSession, SymbolStore};
use wasm_bindgen::prelude::*;

use crate::converter::Converter;
pub use crate::error::BindingError;

/// One editor's completion state: its session, the host symbols and the config.
#[wasm_bindgen]
pub struct PigCompleter {
    session: CompletionSession,
    symbols: SymbolStore,
    config: CompletionConfig,
}

impl Default for PigCompleter {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PigCompleter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: CompletionSession::new(),
            symbols: SymbolStore::default(),
            config: CompletionConfig::default(),
        }
    }

    /// Replaces the whole symbol snapshot (`{ paths, variables, scope }`).
    #[wasm_bindgen(js_name = setSymbols)]
    pub fn set_symbols(&mut self, symbols: JsValue) -> Result<(), JsValue> {
        let dto: dto::v1::Symbols = serde_wasm_bindgen::from_value(symbols).map_err(|err| {
            tracing::debug!(%err, "rejected symbols payload");
            BindingError::InvalidSymbols
        })?;
        self.symbols.replace(Converter::symbols_from_dto(dto));
        Ok(())
    }

    #[wasm_bindgen(js_name = setPaths)]
    pub fn set_paths(&mut self, paths: Vec<String>) {
        self.symbols.replace_paths(paths);
    }

    #[wasm_bindgen(js_name = setVariables)]
    pub fn set_variables(&mut self, variables: Vec<String>) {
        self.symbols.replace_variables(variables);
    }

    /// Overrides config fields present in `config`; absent fields keep their value.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let dto: dto::v1::CompletionConfig =
            serde_wasm_bindgen::from_value(config).map_err(|err| {
                tracing::debug!(%err, "rejected completion config");
                BindingError::InvalidConfig
            })?;
        self.config = Converter::config_from_dto(self.config, dto);
        Ok(())
    }

    /// Starts a new session; call at statement boundaries.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Computes completions at a UTF-16 cursor offset into `source`.
    pub fn complete(&mut self, source: &str, cursor_utf16: usize) -> JsValue {
        let cursor = Converter::cursor_utf16_to_byte(source, cursor_utf16);
        let snapshot = self.symbols.snapshot();
        let output =
            pig_ide::complete_text(&mut self.session, source, cursor, &snapshot, self.config);
        let view = Converter::completion_view(source, output);
        serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
    }

    /// Current session state as a `SessionView` object.
    pub fn state(&self) -> JsValue {
        let view = Converter::session_view(&self.session);
        serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
    }
}
