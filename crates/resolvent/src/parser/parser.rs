//! Recursive-descent parser for propositional formulas.
//!
//! Grammar, loosest to tightest binding (all binary operators
//! left-associative, negation right-associative):
//!
//! ```text
//! Formula := Iff
//! Iff     := Implies ( "<->" Implies )*
//! Implies := Or ( "->" Or )*
//! Or      := And ( "|" And )*
//! And     := Not ( "&" Not )*
//! Not     := "~" Not | Atom
//! Atom    := VARIABLE | "(" Formula ")"
//! ```

use super::lexer::{tokenize, Token, TokenKind};
use crate::error::ParseError;
use crate::logic::Formula;

/// Parse formula text into exactly one [`Formula`].
///
/// Unmatched parentheses, dangling operators, and trailing tokens after a
/// complete formula are parse errors.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let formula = parser.parse_iff()?;
    if let Some(token) = parser.peek() {
        return Err(ParseError::TrailingInput {
            found: token.text.clone(),
        });
    }
    Ok(formula)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the next token if it has the given kind.
    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.peek().map(|t| t.kind) == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.accept(kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: format!("'{}'", token.text),
            },
            None => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }

    fn parse_iff(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.parse_implies()?;
        while self.accept(TokenKind::Iff) {
            let right = self.parse_implies()?;
            left = Formula::iff(left, right);
        }
        Ok(left)
    }

    fn parse_implies(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.parse_or()?;
        while self.accept(TokenKind::Implies) {
            let right = self.parse_or()?;
            left = Formula::implies(left, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.parse_and()?;
        while self.accept(TokenKind::Or) {
            let right = self.parse_and()?;
            left = Formula::or(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.parse_not()?;
        while self.accept(TokenKind::And) {
            let right = self.parse_not()?;
            left = Formula::and(left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Formula, ParseError> {
        if self.accept(TokenKind::Not) {
            let operand = self.parse_not()?;
            Ok(Formula::not(operand))
        } else {
            self.parse_atom()
        }
    }

    fn parse_atom(&mut self) -> Result<Formula, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Variable => {
                let name = token.text.clone();
                self.pos += 1;
                Ok(Formula::Var(name))
            }
            Some(token) if token.kind == TokenKind::LParen => {
                self.pos += 1;
                let inner = self.parse_iff()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(self.unexpected("a variable or '('")),
        }
    }
}
