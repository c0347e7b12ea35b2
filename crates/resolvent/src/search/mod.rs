//! Heuristic, bounded resolution search.
//!
//! The engine proves entailment by refutation: it assumes the negation of
//! the goal and searches for the empty clause. The clause database is an
//! insertion-ordered set, so clause indices are stable and iteration is
//! deterministic for a fixed input; the frontier holds candidate clause
//! pairs, and each iteration samples a bounded window, resolves the
//! lowest-scoring pair, and enqueues every new resolvent against all
//! existing clauses. Resolution is sound, so `proved: true` always means
//! the axioms entail the goal; exhausting the bounds is inconclusive, not
//! a disproof.

pub mod resolution;

pub use resolution::{can_resolve, resolvents};

use crate::cnf::{clauses, formula_to_clauses, to_cnf};
use crate::config::ProverConfig;
use crate::error::ProverError;
use crate::logic::{Clause, Formula};
use crate::parser::parse;
use crate::proof::{ProofMessage, ProofResult};
use indexmap::IndexSet;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Heuristic clause score: shorter clauses are preferable, with a small
/// penalty for clauses mentioning many distinct variables.
fn clause_score(clause: &Clause) -> f64 {
    clause.len() as f64 + 0.1 * clause.distinct_variable_count() as f64
}

/// Prove that the axioms entail the goal clause.
///
/// An empty goal clause is vacuously refuted and returns immediately with
/// [`ProofMessage::GoalTrivial`]. Otherwise each literal of the goal is
/// negated into a unit clause (the refutation assumption) and the search
/// runs until the empty clause is derived, the frontier is exhausted, or a
/// bound triggers.
pub fn prove(axioms: &[Clause], goal: &Clause, config: &ProverConfig) -> ProofResult {
    if goal.is_empty() {
        return ProofResult {
            proved: true,
            steps: 0,
            message: ProofMessage::GoalTrivial,
            clauses: axioms.to_vec(),
            initial_count: axioms.len(),
            parents: HashMap::new(),
            empty_clause: None,
        };
    }

    let mut initial: Vec<Clause> = axioms.to_vec();
    initial.extend(
        goal.literals()
            .iter()
            .map(|lit| Clause::unit(lit.complement())),
    );
    refute(initial, config)
}

/// Prove that the axiom formulas entail the goal formula.
///
/// Every axiom is clausified; the goal is negated as a whole formula and
/// clausified, so goals whose CNF has several clauses are handled soundly
/// in a single refutation. For a single-clause goal this coincides with
/// the literal-wise negation in [`prove`].
pub fn prove_formulas<S: AsRef<str>>(
    axioms: &[S],
    goal: &str,
    config: &ProverConfig,
) -> Result<ProofResult, ProverError> {
    let mut initial = Vec::new();
    for axiom in axioms {
        initial.extend(formula_to_clauses(axiom.as_ref())?);
    }
    let negated_goal = to_cnf(Formula::not(parse(goal)?));
    initial.extend(clauses(&negated_goal)?);
    Ok(refute(initial, config))
}

/// Search for the empty clause among the given clauses.
///
/// The database and frontier are owned by this call frame; nothing is
/// retained across invocations.
fn refute(initial: Vec<Clause>, config: &ProverConfig) -> ProofResult {
    let start = Instant::now();

    // Clause database: arena and dedup in one structure. Indices are
    // assigned in insertion order and never change.
    let mut database: IndexSet<Clause> = IndexSet::new();
    for clause in initial {
        database.insert(clause);
    }
    let initial_count = database.len();

    let mut parents: HashMap<usize, (usize, usize)> = HashMap::new();

    // Input clauses may already contain the contradiction.
    if let Some(idx) = database.iter().position(|c| c.is_empty()) {
        return finish(true, 0, ProofMessage::Proved, database, initial_count, parents, Some(idx));
    }

    // Seed the frontier with every resolvable unordered pair.
    let mut frontier: VecDeque<(usize, usize)> = VecDeque::new();
    for i in 0..initial_count {
        for j in (i + 1)..initial_count {
            if can_resolve(clause_at(&database, i), clause_at(&database, j)) {
                frontier.push_back((i, j));
            }
        }
    }

    let beam = config.beam_width.max(1);
    let mut steps = 0;

    while !frontier.is_empty() && steps < config.max_steps {
        if start.elapsed() >= config.timeout {
            return finish(false, steps, ProofMessage::Timeout, database, initial_count, parents, None);
        }

        // Sample a bounded window and select the lowest-scoring pair;
        // ties break by discovery order, keeping the run deterministic.
        let sample_size = frontier.len().min(beam);
        let mut sample: Vec<(usize, usize)> = frontier.drain(..sample_size).collect();
        let mut best = 0;
        let mut best_score = pair_score(&database, sample[0]);
        for (i, &pair) in sample.iter().enumerate().skip(1) {
            let score = pair_score(&database, pair);
            if score < best_score {
                best = i;
                best_score = score;
            }
        }
        let (i, j) = sample.remove(best);
        frontier.extend(sample);

        steps += 1;

        let c1 = clause_at(&database, i).clone();
        let c2 = clause_at(&database, j).clone();
        for resolvent in resolvents(&c1, &c2) {
            if database.contains(&resolvent) {
                continue;
            }
            let (idx, _) = database.insert_full(resolvent);
            parents.insert(idx, (i, j));

            if clause_at(&database, idx).is_empty() {
                return finish(true, steps, ProofMessage::Proved, database, initial_count, parents, Some(idx));
            }

            for k in 0..idx {
                if can_resolve(clause_at(&database, idx), clause_at(&database, k)) {
                    frontier.push_back((idx, k));
                }
            }
        }

        // Bound memory: trim the frontier back to the best pairs.
        if frontier.len() > beam * 10 {
            let mut pairs: Vec<(usize, usize)> = frontier.drain(..).collect();
            pairs.sort_by(|&a, &b| {
                pair_score(&database, a).total_cmp(&pair_score(&database, b))
            });
            pairs.truncate(beam * 5);
            frontier.extend(pairs);
        }
    }

    let message = if start.elapsed() >= config.timeout && !frontier.is_empty() {
        ProofMessage::Timeout
    } else {
        ProofMessage::MaxStepsReached
    };
    finish(false, steps, message, database, initial_count, parents, None)
}

fn clause_at(database: &IndexSet<Clause>, index: usize) -> &Clause {
    database
        .get_index(index)
        .expect("clause indices are assigned by the database and never removed")
}

fn pair_score(database: &IndexSet<Clause>, (i, j): (usize, usize)) -> f64 {
    clause_score(clause_at(database, i)) + clause_score(clause_at(database, j))
}

#[allow(clippy::too_many_arguments)]
fn finish(
    proved: bool,
    steps: usize,
    message: ProofMessage,
    database: IndexSet<Clause>,
    initial_count: usize,
    parents: HashMap<usize, (usize, usize)>,
    empty_clause: Option<usize>,
) -> ProofResult {
    ProofResult {
        proved,
        steps,
        message,
        clauses: database.into_iter().collect(),
        initial_count,
        parents,
        empty_clause,
    }
}
