//! Lexical layer for Pig Latin editor tooling.
//!
//! Pipeline: lex → (ide) completion.
//! All spans are UTF-8 byte offsets into the lexed text, using `[start, end)`.
//! UTF-16 conversion for editors happens in `pig_analyzer_wasm`.

mod lexer;
mod source_map;
mod span;
pub mod vocab;

pub use lexer::{Token, TokenKind, is_word_char, lex, prev_non_trivia, token_at};
pub use source_map::SourceMap;
pub use span::Span;
pub use vocab::{CaseForm, Partition, Vocabulary};
