//! Resolvent: a propositional resolution theorem prover
//!
//! Given a set of axiom formulas and a goal formula, the prover decides
//! entailment by refutation: it negates the goal, converts everything to
//! conjunctive normal form, and searches for the empty clause with a
//! heuristic, bounded resolution loop. When a proof is found, the full
//! derivation can be reconstructed and checked independently.

pub mod cnf;
pub mod config;
pub mod error;
pub mod json;
pub mod logic;
pub mod parser;
pub mod proof;
pub mod search;

// Re-export commonly used types
pub use logic::{Clause, Formula, Literal};

pub use parser::{parse, tokenize, Token, TokenKind};

pub use cnf::{
    clauses, distribute_disjunctions, eliminate_iff, eliminate_implications, formula_to_clauses,
    is_clausal, push_negations, to_cnf,
};

pub use config::ProverConfig;

pub use error::{LexError, MalformedCnfError, ParseError, ProverError};

pub use proof::{ProofMessage, ProofResult, ProofStep};

pub use search::{prove, prove_formulas, resolvents};
