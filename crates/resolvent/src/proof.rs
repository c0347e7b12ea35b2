//! Proof results and derivation reconstruction.

use crate::logic::Clause;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofMessage {
    /// The empty clause was derived
    Proved,
    /// The goal clause was empty to begin with
    GoalTrivial,
    /// The wall-clock bound triggered
    Timeout,
    /// The step bound triggered, or the frontier ran dry first
    MaxStepsReached,
}

impl fmt::Display for ProofMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProofMessage::Proved => "proved",
            ProofMessage::GoalTrivial => "goal_trivial",
            ProofMessage::Timeout => "timeout",
            ProofMessage::MaxStepsReached => "max_steps_reached",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one `prove` invocation.
///
/// Carries the full clause database and parent map so the caller can
/// inspect or independently re-check the derivation. `proved: false` is
/// inconclusive, not a disproof: the search is bounded.
#[derive(Debug, Clone)]
pub struct ProofResult {
    pub proved: bool,
    /// Resolution steps taken (selected clause pairs)
    pub steps: usize,
    pub message: ProofMessage,
    /// Every clause seen during the search, in derivation order
    pub clauses: Vec<Clause>,
    /// Indices below this are input clauses (axioms and negated-goal
    /// units); they have no parent map entry
    pub initial_count: usize,
    /// Derived clause index → the pair of clause indices resolved to
    /// produce it
    pub parents: HashMap<usize, (usize, usize)>,
    /// Index of the derived empty clause, when proved by refutation
    pub empty_clause: Option<usize>,
}

/// One entry in a reconstructed derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    /// Index of the clause in [`ProofResult::clauses`]
    pub index: usize,
    pub clause: Clause,
    /// Parent clause indices; `None` for input clauses
    pub parents: Option<(usize, usize)>,
}

impl ProofResult {
    /// Whether a clause index refers to an input clause (axiom or
    /// negated-goal unit) rather than a derived one.
    pub fn is_input(&self, index: usize) -> bool {
        index < self.initial_count
    }

    /// Reconstruct the ordered derivation of the empty clause.
    ///
    /// Post-order depth-first traversal over the parent map: every clause
    /// appears after both of its parents and at most once, even when it
    /// is a parent of several derived clauses (the trace is a DAG, not a
    /// tree). Returns `None` when no empty clause was derived, including
    /// the `GoalTrivial` case.
    pub fn derivation(&self) -> Option<Vec<ProofStep>> {
        let empty = self.empty_clause?;
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit(empty, &mut visited, &mut order);
        Some(
            order
                .into_iter()
                .map(|index| ProofStep {
                    index,
                    clause: self.clauses[index].clone(),
                    parents: self.parents.get(&index).copied(),
                })
                .collect(),
        )
    }

    fn visit(&self, index: usize, visited: &mut HashSet<usize>, order: &mut Vec<usize>) {
        if !visited.insert(index) {
            return;
        }
        if let Some(&(p1, p2)) = self.parents.get(&index) {
            self.visit(p1, visited, order);
            self.visit(p2, visited, order);
        }
        order.push(index);
    }
}
