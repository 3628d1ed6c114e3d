//! Cursor-context detection: which candidate source a normalized token completes from.
//! Columns are UTF-8 byte offsets within the cursor row.

use crate::token::{CursorToken, CursorTokenKind, TokenSource};

/// Where candidates come from for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CompletionContext {
    /// Entries of the host's path listing.
    Path,
    /// Lower-case type names after a `:`.
    TypeAnnotation,
    /// Members of the symbol named by `chain` (`a.b.|` has chain `["a", "b"]`).
    Member { chain: Vec<String> },
    /// Vocabulary plus top-level variables.
    General,
}

/// Classifies the request. `token` is the normalized token at the cursor.
pub(crate) fn detect_context<S: TokenSource + ?Sized>(
    source: &S,
    row: u32,
    token: &CursorToken,
    path_mode: bool,
) -> CompletionContext {
    if path_mode {
        return CompletionContext::Path;
    }

    if token.kind == CursorTokenKind::TypeMarker {
        return CompletionContext::TypeAnnotation;
    }

    let prev = source.preceding_token(row, token.start);
    match prev {
        // `name:ch|` keeps completing types while the type name is typed.
        Some(prev) if prev.kind == CursorTokenKind::TypeMarker && !token.is_empty() => {
            CompletionContext::TypeAnnotation
        }
        Some(prev) if prev.text == "." => CompletionContext::Member {
            chain: member_chain(source, row, &prev),
        },
        _ => CompletionContext::General,
    }
}

/// Walks `a.b.` backwards from the dot before the cursor and returns the receiver chain.
///
/// An empty chain means the receiver is not a plain name (e.g. `f(x).`).
fn member_chain<S: TokenSource + ?Sized>(source: &S, row: u32, dot: &CursorToken) -> Vec<String> {
    let mut chain = Vec::new();
    let mut dot_start = dot.start;

    loop {
        let Some(receiver) = source.preceding_token(row, dot_start) else {
            break;
        };
        // Trivia between the receiver and the dot breaks the chain.
        if receiver.kind != CursorTokenKind::Word || receiver.end != dot_start {
            break;
        }
        chain.push(receiver.text);

        match source.preceding_token(row, receiver.start) {
            Some(prev) if prev.text == "." && prev.end == receiver.start => {
                dot_start = prev.start;
            }
            _ => break,
        }
    }

    chain.reverse();
    chain
}
