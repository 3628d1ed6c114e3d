//! Completion candidates for Pig Latin editors.
//! Columns are UTF-8 byte offsets within the cursor row.
//! Spans are half-open ranges `[start, end)`.

use pig_analyzer::Vocabulary;

use crate::context::CompletionContext;
use crate::session::CompletionSession;
use crate::symbols::SymbolSnapshot;
use crate::token::{LineTokens, Position, TokenSource};

mod items;
mod matchers;
mod pipeline;
mod ranking;

pub use items::CALL_MARKER;

/// Configuration knobs for [`complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Append a blank entry when exactly one candidate is found, so the editor shows a
    /// selection list instead of inserting the match directly.
    pub pad_single_candidate: bool,
    /// Separator between path segments in path literals.
    pub path_separator: char,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            pad_single_candidate: true,
            path_separator: '/',
        }
    }
}

/// Row-relative range the chosen candidate replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceRange {
    pub row: u32,
    pub start: u32,
    pub end: u32,
}

/// Which candidate source produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionMode {
    Path,
    TypeAnnotation,
    Member,
    General,
}

impl From<&CompletionContext> for CompletionMode {
    fn from(value: &CompletionContext) -> Self {
        match value {
            CompletionContext::Path => Self::Path,
            CompletionContext::TypeAnnotation => Self::TypeAnnotation,
            CompletionContext::Member { .. } => Self::Member,
            CompletionContext::General => Self::General,
        }
    }
}

/// Result of a completion query.
///
/// `candidates` holds host-scope symbols (sorted) followed by vocabulary or path
/// matches (sorted), without duplicates, plus an optional blank padding entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub candidates: Vec<String>,
    pub replace: ReplaceRange,
    pub mode: CompletionMode,
}

/// Computes completion candidates at `cursor`.
///
/// Never fails: tokens that are not identifier-like complete from an empty prefix.
/// Updates `session` (path mode, context stack).
pub fn complete<S: TokenSource + ?Sized>(
    session: &mut CompletionSession,
    source: &S,
    cursor: Position,
    symbols: &SymbolSnapshot,
    config: CompletionConfig,
) -> CompletionResult {
    pipeline::complete(
        session,
        source,
        cursor,
        Vocabulary::pig(),
        symbols,
        config,
    )
}

/// Computes completion candidates for a byte cursor in a text buffer.
///
/// `cursor` is clamped to the buffer and to a char boundary.
pub fn complete_text(
    session: &mut CompletionSession,
    text: &str,
    cursor: usize,
    symbols: &SymbolSnapshot,
    config: CompletionConfig,
) -> CompletionResult {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }

    let tokens = LineTokens::new(text);
    let (row, col) = tokens
        .source_map()
        .line_col(u32::try_from(cursor).unwrap_or(u32::MAX));
    let position = Position::new(
        u32::try_from(row).unwrap_or(u32::MAX),
        u32::try_from(col).unwrap_or(u32::MAX),
    );

    complete(session, &tokens, position, symbols, config)
}
