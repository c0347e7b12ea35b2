//! Core data model: formulas, literals, and clauses.

pub mod clause;
pub mod formula;
pub mod literal;

pub use clause::Clause;
pub use formula::Formula;
pub use literal::Literal;
