//! Completion engine for Pig Latin script editors.
//!
//! Columns are UTF-8 byte offsets within a row (`[start, end)`), matching `pig_analyzer`.
//! The host owns a [`CompletionSession`] per editor and a [`SymbolStore`] with the
//! current paths and variables, and calls [`complete`] on each completion request.

mod completion;
mod context;
mod session;
mod symbols;
mod token;

pub use completion::{
    CALL_MARKER, CompletionConfig, CompletionMode, CompletionResult, ReplaceRange, complete,
    complete_text,
};
pub use session::{CompletionSession, SessionState};
pub use symbols::{SymbolKind, SymbolSnapshot, SymbolStore};
pub use token::{CursorToken, CursorTokenKind, LineTokens, Position, TokenSource};
