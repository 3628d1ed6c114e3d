use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

/// Replacement range on one row; `start`/`end` are UTF-16 columns within the row.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub row: u32,
    pub start: u32,
    pub end: u32,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionMode {
    Path,
    TypeAnnotation,
    Member,
    General,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    TopLevel,
    InPath,
    InPropertyChain,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub state: SessionState,
    /// Member chain depth; 0 outside `InPropertyChain`.
    pub chain_depth: u32,
}

#[derive(Serialize, TS, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub candidates: Vec<String>,
    /// Replacement range relative to the cursor row.
    pub replace: RowRange,
    /// Same range as absolute document offsets.
    pub replace_absolute: Span,
    pub mode: CompletionMode,
}

/// Host symbol payload. Mirrors `pig_ide::SymbolSnapshot`.
#[derive(Deserialize, TS, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Symbols {
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    #[ts(type = "Record<string, SymbolKind>")]
    pub scope: BTreeMap<String, SymbolKind>,
}

#[derive(Deserialize, TS, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SymbolKind {
    Scalar,
    Struct {
        #[serde(default)]
        #[ts(type = "Record<string, SymbolKind>")]
        children: BTreeMap<String, SymbolKind>,
    },
    Function,
}

#[derive(Deserialize, TS, Debug, Default, Clone, Copy)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompletionConfig {
    #[serde(default)]
    pub pad_single_candidate: Option<bool>,
    #[serde(default)]
    pub path_separator: Option<char>,
}
