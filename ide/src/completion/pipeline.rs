//! Completion pipeline entry point.
//! Works in row-relative UTF-8 byte columns.

use pig_analyzer::Vocabulary;

use super::matchers::{is_path_segment, is_word_like};
use super::{CompletionConfig, CompletionMode, CompletionResult, ReplaceRange};
use crate::context::{CompletionContext, detect_context};
use crate::session::CompletionSession;
use crate::symbols::SymbolSnapshot;
use crate::token::{CursorToken, CursorTokenKind, Position, TokenSource};

/// Computes the candidate list for a single cursor position.
pub(super) fn complete<S: TokenSource + ?Sized>(
    session: &mut CompletionSession,
    source: &S,
    cursor: Position,
    vocab: &Vocabulary,
    symbols: &SymbolSnapshot,
    config: CompletionConfig,
) -> CompletionResult {
    let cursor = clamp_to_line(source, cursor);

    // 1) Strip path literal syntax from the token under the cursor.
    let raw = source.token_at(cursor);
    let token = normalize_token(session, raw, cursor.col, config.path_separator);

    // 2) Record the token in the session context.
    session.push_context(token.clone());

    // 3) Pick the candidate source.
    let context = detect_context(source, cursor.row, &token, session.path_mode());
    if let CompletionContext::Member { chain } = &context {
        session.observe_chain(chain.len());
    }

    // 4) Gather and filter by prefix.
    let gathered = super::items::gather(&context, &token.text, vocab, symbols);
    let total = gathered.total();
    let mode = CompletionMode::from(&context);

    // 5) Order groups, then pad a lone candidate.
    let mut candidates = super::ranking::assemble(gathered);
    if config.pad_single_candidate {
        super::ranking::pad_single_candidate(&mut candidates);
    }

    tracing::debug!(
        row = cursor.row,
        col = cursor.col,
        prefix = %token.text,
        ?mode,
        total,
        "computed completions"
    );

    CompletionResult {
        candidates,
        replace: ReplaceRange {
            row: cursor.row,
            start: token.start,
            end: token.end,
        },
        mode,
    }
}

/// Turns the raw token at the cursor into the completion prefix token.
///
/// - A leading `'` marks a path literal; only the text after the last separator is kept
///   and the span shrinks to cover just that text. Path literals end at the cursor.
/// - Text that is not word-like becomes an empty token at the cursor. A lone `:` becomes
///   an empty [`CursorTokenKind::TypeMarker`] token.
fn normalize_token(
    session: &mut CompletionSession,
    raw: CursorToken,
    cursor_col: u32,
    separator: char,
) -> CursorToken {
    let mut token = raw;
    let mut is_path = false;

    if let Some(rest) = token.text.strip_prefix('\'') {
        is_path = true;
        // Only the text before the cursor is being completed.
        let keep = (cursor_col.saturating_sub(token.start) as usize)
            .saturating_sub(1)
            .min(rest.len());
        let keep = floor_char_boundary(rest, keep);
        token.text = rest[..keep].to_string();
        token.start = token.start.saturating_add(1);
        token.end = token.start.saturating_add(keep as u32);
    }

    // A bare separator is an operator, not a path.
    if (is_path || token.kind != CursorTokenKind::Other)
        && let Some(idx) = token.text.rfind(separator)
    {
        is_path = true;
        let cut = idx + separator.len_utf8();
        token.text = token.text[cut..].to_string();
        token.start = token.start.saturating_add(cut as u32).min(token.end);
    }

    if is_path {
        token.kind = CursorTokenKind::PathLiteral;
        session.enter_path_mode();
    }

    let valid = if session.path_mode() {
        is_path_segment(&token.text)
    } else {
        is_word_like(&token.text)
    };
    if valid {
        return token;
    }

    tracing::trace!(text = %token.text, "discarding non-word token");
    let kind = if token.text == ":" {
        CursorTokenKind::TypeMarker
    } else {
        CursorTokenKind::Other
    };
    CursorToken::empty_at(cursor_col, kind)
}

/// Keeps the column inside its row and on a char boundary.
fn clamp_to_line<S: TokenSource + ?Sized>(source: &S, cursor: Position) -> Position {
    let Some(line) = source.line(cursor.row) else {
        return cursor;
    };
    let col = floor_char_boundary(line, (cursor.col as usize).min(line.len()));
    Position::new(cursor.row, col as u32)
}

fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
