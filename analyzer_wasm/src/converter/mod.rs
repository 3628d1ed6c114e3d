//! Conversion utilities for the WASM/JS boundary.
//!
//! Stateless; centralizes:
//! - Input conversion (symbol and config payloads).
//! - UTF-16 ↔ byte offset bridging for editor-facing positions.
//! - DTO conversion (`pig_ide` types → `dto::v1::*` views).

mod completion;
mod symbols;

use crate::offsets::utf16_offset_to_byte;

pub struct Converter;

impl Converter {
    /// Convert a UTF-16 cursor offset (CodeMirror) to a byte offset (Rust strings).
    pub fn cursor_utf16_to_byte(source: &str, cursor_utf16: usize) -> usize {
        utf16_offset_to_byte(source, cursor_utf16)
    }
}
