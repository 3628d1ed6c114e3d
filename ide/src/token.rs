//! Tokens as the completion engine sees them, and the host seam that supplies them.
//!
//! Columns are UTF-8 byte offsets within a row; spans are half-open `[start, end)`.

use pig_analyzer::{SourceMap, Token, TokenKind};

/// Cursor position in a buffer: 0-based row, byte column within the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorTokenKind {
    /// Identifier-like text.
    Word,
    /// Single-quoted literal (file paths are written this way).
    PathLiteral,
    /// A lone `:`, which introduces a type annotation.
    TypeMarker,
    /// Punctuation, operators, trivia.
    Other,
}

/// The lexical unit at or before the cursor, in row-relative columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CursorToken {
    pub text: String,
    pub start: u32,
    pub end: u32,
    pub kind: CursorTokenKind,
}

impl CursorToken {
    pub fn new(text: impl Into<String>, start: u32, end: u32, kind: CursorTokenKind) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            kind,
        }
    }

    /// Zero-width token at `col`.
    pub fn empty_at(col: u32, kind: CursorTokenKind) -> Self {
        Self::new(String::new(), col, col, kind)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Token access provided by the editor host.
pub trait TokenSource {
    /// Token under the cursor (`start < col <= end`). Returns an empty token at `col` when
    /// there is none, e.g. at the start of a line.
    fn token_at(&self, pos: Position) -> CursorToken;

    /// Last non-trivia token on `row` that ends at or before `col`.
    fn preceding_token(&self, row: u32, col: u32) -> Option<CursorToken>;

    /// Text of `row` without its line break.
    fn line(&self, row: u32) -> Option<&str>;
}

/// [`TokenSource`] over a text buffer, lexing one row at a time.
pub struct LineTokens<'a> {
    map: SourceMap<'a>,
}

impl<'a> LineTokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            map: SourceMap::new(source),
        }
    }

    pub fn source_map(&self) -> &SourceMap<'a> {
        &self.map
    }

    fn row_tokens(&self, row: u32) -> Option<(&'a str, Vec<Token>)> {
        let line = self.map.line(row as usize)?;
        Some((line, pig_analyzer::lex(line)))
    }
}

impl TokenSource for LineTokens<'_> {
    fn token_at(&self, pos: Position) -> CursorToken {
        let Some((line, tokens)) = self.row_tokens(pos.row) else {
            return CursorToken::empty_at(pos.col, CursorTokenKind::Other);
        };
        match pig_analyzer::token_at(&tokens, pos.col) {
            Some(token) => to_cursor_token(line, token),
            None => CursorToken::empty_at(pos.col, CursorTokenKind::Other),
        }
    }

    fn preceding_token(&self, row: u32, col: u32) -> Option<CursorToken> {
        let (line, tokens) = self.row_tokens(row)?;
        let idx = pig_analyzer::prev_non_trivia(&tokens, col)?;
        Some(to_cursor_token(line, &tokens[idx]))
    }

    fn line(&self, row: u32) -> Option<&str> {
        self.map.line(row as usize)
    }
}

fn to_cursor_token(line: &str, token: &Token) -> CursorToken {
    let kind = match token.kind {
        TokenKind::Ident | TokenKind::Number => CursorTokenKind::Word,
        TokenKind::Str { .. } => CursorTokenKind::PathLiteral,
        TokenKind::Colon => CursorTokenKind::TypeMarker,
        _ => CursorTokenKind::Other,
    };
    CursorToken::new(token.text(line), token.span.start, token.span.end, kind)
}
