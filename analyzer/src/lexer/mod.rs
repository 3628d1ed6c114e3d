mod token;

pub use token::{Span, Token, TokenKind, prev_non_trivia, token_at};

/// Lex one or more lines of Pig Latin into tokens.
///
/// The lexer is total: it never fails and never drops input. Text that does not form a
/// known token becomes `Punct`. Newlines are `Whitespace`; string and comment tokens
/// never cross a line break, since an unterminated literal is the normal state while
/// the user is still typing it.
pub fn lex(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut iter = input.char_indices().peekable();

    while let Some((start, ch)) = iter.next() {
        let kind = match ch {
            c if c.is_whitespace() => {
                while let Some(&(_, c2)) = iter.peek() {
                    if !c2.is_whitespace() {
                        break;
                    }
                    iter.next();
                }
                TokenKind::Whitespace
            }

            '-' if matches!(iter.peek(), Some((_, '-'))) => {
                while let Some(&(_, c2)) = iter.peek() {
                    if c2 == '\n' {
                        break;
                    }
                    iter.next();
                }
                TokenKind::LineComment
            }

            '/' if matches!(iter.peek(), Some((_, '*'))) => {
                iter.next();
                let mut terminated = false;
                while let Some((_, c2)) = iter.next() {
                    if c2 == '*' && matches!(iter.peek(), Some((_, '/'))) {
                        iter.next();
                        terminated = true;
                        break;
                    }
                    if matches!(iter.peek(), Some((_, '\n'))) {
                        break;
                    }
                }
                TokenKind::BlockComment { terminated }
            }

            '\'' => {
                let mut terminated = false;
                while let Some(&(_, c2)) = iter.peek() {
                    if c2 == '\n' {
                        break;
                    }
                    iter.next();
                    if c2 == '\\' {
                        // Skip the escaped char, unless it is the line break.
                        if let Some(&(_, esc)) = iter.peek()
                            && esc != '\n'
                        {
                            iter.next();
                        }
                        continue;
                    }
                    if c2 == '\'' {
                        terminated = true;
                        break;
                    }
                }
                TokenKind::Str { terminated }
            }

            ':' => {
                if matches!(iter.peek(), Some((_, ':'))) {
                    iter.next();
                    TokenKind::DoubleColon
                } else {
                    TokenKind::Colon
                }
            }
            '.' => TokenKind::Dot,
            '/' => TokenKind::Slash,

            c if c.is_ascii_digit() => {
                let mut seen_dot = false;
                while let Some(&(i, c2)) = iter.peek() {
                    if c2.is_ascii_digit() {
                        iter.next();
                    } else if c2 == '.'
                        && !seen_dot
                        && input[i + 1..].starts_with(|c: char| c.is_ascii_digit())
                    {
                        seen_dot = true;
                        iter.next();
                    } else {
                        break;
                    }
                }
                TokenKind::Number
            }

            c if is_ident_start(c) => {
                while let Some(&(_, c2)) = iter.peek() {
                    if !is_ident_continue(c2) {
                        break;
                    }
                    iter.next();
                }
                TokenKind::Ident
            }

            c => TokenKind::Punct(c),
        };

        let end = iter.peek().map(|&(i, _)| i).unwrap_or(input.len());
        tokens.push(Token {
            kind,
            span: Span::new(start as u32, end as u32),
        });
    }

    tokens
}

/// Word characters as the completion filter sees them: `[A-Za-z0-9_$]`.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphanumeric()
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    is_word_char(c)
}
