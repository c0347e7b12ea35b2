//! Lexer for the formula syntax.
//!
//! Operators: `~` (not), `&` (and), `|` (or), `->` (implies), `<->` (iff);
//! variables match `[A-Za-z][A-Za-z0-9_]*`; whitespace is discarded.

use crate::error::LexError;

/// Token types for the formula syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Variable,
}

/// A token: its kind plus the matched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Token {
            kind,
            text: text.to_string(),
        }
    }
}

/// Turn formula text into an ordered token sequence.
///
/// Two-character operators are matched before single-character ones, so
/// `<->` and `->` are never split. Fails with a [`LexError`] carrying the
/// offending position and the surrounding text.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        // Two-character operators first
        if rest.starts_with("<->") {
            tokens.push(Token::new(TokenKind::Iff, "<->"));
            pos += 3;
            continue;
        }
        if rest.starts_with("->") {
            tokens.push(Token::new(TokenKind::Implies, "->"));
            pos += 2;
            continue;
        }

        match ch {
            '(' => {
                tokens.push(Token::new(TokenKind::LParen, "("));
                pos += 1;
            }
            ')' => {
                tokens.push(Token::new(TokenKind::RParen, ")"));
                pos += 1;
            }
            '~' => {
                tokens.push(Token::new(TokenKind::Not, "~"));
                pos += 1;
            }
            '&' => {
                tokens.push(Token::new(TokenKind::And, "&"));
                pos += 1;
            }
            '|' => {
                tokens.push(Token::new(TokenKind::Or, "|"));
                pos += 1;
            }
            _ if ch.is_ascii_alphabetic() => {
                let end = rest
                    .char_indices()
                    .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_'))
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                tokens.push(Token::new(TokenKind::Variable, &rest[..end]));
                pos += end;
            }
            _ => {
                return Err(LexError {
                    position: pos,
                    snippet: rest.chars().take(10).collect(),
                });
            }
        }
    }

    Ok(tokens)
}
