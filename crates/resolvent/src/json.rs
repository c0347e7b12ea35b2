//! JSON serialization types for proof results.
//!
//! Flat mirror types decoupled from the in-memory representation, so the
//! output format stays stable if the internals change.

use crate::logic::{Clause, Literal};
use crate::proof::{ProofMessage, ProofResult, ProofStep};
use serde::{Deserialize, Serialize};

/// JSON representation of a literal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralJson {
    pub variable: String,
    pub polarity: bool,
}

impl From<&Literal> for LiteralJson {
    fn from(lit: &Literal) -> Self {
        LiteralJson {
            variable: lit.variable.clone(),
            polarity: lit.polarity,
        }
    }
}

/// JSON representation of a clause
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseJson {
    pub literals: Vec<LiteralJson>,
    /// Human-readable rendering, e.g. `"~A ∨ B"`
    pub display: String,
}

impl From<&Clause> for ClauseJson {
    fn from(clause: &Clause) -> Self {
        ClauseJson {
            literals: clause.literals().iter().map(LiteralJson::from).collect(),
            display: clause.to_string(),
        }
    }
}

/// JSON representation of one derivation step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub index: usize,
    pub clause: ClauseJson,
    /// `"input"` for axioms and negated-goal units, `"resolution"` for
    /// derived clauses
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<(usize, usize)>,
}

/// JSON representation of a proof result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofResultJson {
    pub proved: bool,
    pub steps: usize,
    pub message: ProofMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation: Option<Vec<ProofStepJson>>,
}

impl From<&ProofResult> for ProofResultJson {
    fn from(result: &ProofResult) -> Self {
        let derivation = result.derivation().map(|steps| {
            steps
                .iter()
                .map(|step| step_to_json(result, step))
                .collect()
        });
        ProofResultJson {
            proved: result.proved,
            steps: result.steps,
            message: result.message,
            derivation,
        }
    }
}

fn step_to_json(result: &ProofResult, step: &ProofStep) -> ProofStepJson {
    ProofStepJson {
        index: step.index,
        clause: ClauseJson::from(&step.clause),
        rule: if result.is_input(step.index) {
            "input".to_string()
        } else {
            "resolution".to_string()
        },
        parents: step.parents,
    }
}
