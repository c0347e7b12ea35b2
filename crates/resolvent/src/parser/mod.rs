//! Formula parsing: lexer and recursive-descent parser.

pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;

pub use lexer::{tokenize, Token, TokenKind};
pub use parser::parse;
