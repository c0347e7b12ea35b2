//! Error types for resolvent.
//!
//! Lexing and parsing fail fast at formula-ingestion time and are surfaced
//! to the caller verbatim. `MalformedCnfError` signals a normalizer
//! invariant violation and must never occur on `to_cnf` output. Search
//! bound exhaustion is not an error; it is reported through
//! [`crate::ProofMessage`].

use thiserror::Error;

/// Lexer error: no token pattern matched at `position`.
///
/// `snippet` carries the surrounding text so the caller can see what the
/// lexer was looking at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized input at position {position}: {snippet:?}")]
pub struct LexError {
    pub position: usize,
    pub snippet: String,
}

/// Parser error: unexpected or missing token, or trailing input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },

    #[error("trailing input after complete formula: {found}")]
    TrailingInput { found: String },
}

/// A non-clausal shape was found while extracting clauses from a formula
/// that was supposed to be in CNF. Indicates a normalizer bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("formula is not in clausal form: found {found}")]
pub struct MalformedCnfError {
    pub found: String,
}

/// Umbrella error for the text-level proving surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    MalformedCnf(#[from] MalformedCnfError),
}

impl From<LexError> for ProverError {
    fn from(e: LexError) -> Self {
        ProverError::Parse(ParseError::Lex(e))
    }
}
