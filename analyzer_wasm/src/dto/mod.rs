//! JS-facing DTO types for `pig_analyzer_wasm`.
//!
//! Offsets use UTF-16 code units and ranges are half-open `[start, end)`.
pub mod v1;
