//! Lexer tokens.
//!
//! [`Span`] uses UTF-8 byte offsets into the lexed line and is half-open `[start, end)`.
//! Tokens are contiguous: every byte of the input belongs to exactly one token.

pub use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[A-Za-z_$][A-Za-z0-9_$]*`
    Ident,
    /// ASCII digits with an optional fraction (`12`, `3.5`).
    Number,
    /// Single-quoted literal. Unterminated literals run to the end of the line.
    Str { terminated: bool },
    Colon,
    /// `::`, used for field disambiguation (`A::name`).
    DoubleColon,
    Dot,
    Slash,
    /// `-- ...` up to the end of the line.
    LineComment,
    /// `/* ... */`; may be unterminated at end of line.
    BlockComment { terminated: bool },
    Whitespace,
    Punct(char),
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

/// Returns the token the cursor is "in": the one satisfying `start < cursor <= end`.
///
/// A cursor at column 0 has no token.
pub fn token_at(tokens: &[Token], cursor: u32) -> Option<&Token> {
    tokens.iter().find(|t| t.span.contains_cursor(cursor))
}

/// Index of the last non-trivia token that ends at or before `offset`.
pub fn prev_non_trivia(tokens: &[Token], offset: u32) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .rev()
        .find(|(_, t)| t.span.end <= offset && !t.is_trivia())
        .map(|(idx, _)| idx)
}
