//! Clauses: disjunctions of literals, represented as canonical sets.

use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A clause (disjunction of literals).
///
/// Literals are kept sorted and deduplicated, so the derived `Eq` and
/// `Hash` treat a clause as a set of literals. The empty clause denotes a
/// contradiction (⊥).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Create a clause from literals, sorting and removing exact duplicates.
    pub fn new(mut literals: Vec<Literal>) -> Self {
        literals.sort();
        literals.dedup();
        Clause { literals }
    }

    /// The empty clause, ⊥.
    pub fn empty() -> Self {
        Clause { literals: vec![] }
    }

    /// A unit clause containing a single literal.
    pub fn unit(literal: Literal) -> Self {
        Clause {
            literals: vec![literal],
        }
    }

    /// Check if this clause is empty (a contradiction).
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Number of literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// The literals, in canonical order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Check whether the clause contains the given literal.
    pub fn contains(&self, literal: &Literal) -> bool {
        // Literals are sorted, so binary search applies.
        self.literals.binary_search(literal).is_ok()
    }

    /// Check if this clause is a tautology: some variable occurs with both
    /// polarities, making the clause true under every assignment.
    ///
    /// The search does not filter tautologies (they are sound, just
    /// useless premises); this predicate exists for callers and tests.
    pub fn is_tautology(&self) -> bool {
        for i in 0..self.literals.len() {
            for j in (i + 1)..self.literals.len() {
                if self.literals[i].is_complement_of(&self.literals[j]) {
                    return true;
                }
            }
        }
        false
    }

    /// Number of distinct variables, ignoring polarity.
    pub fn distinct_variable_count(&self) -> usize {
        self.literals
            .iter()
            .map(|lit| lit.variable.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_and_dedup() {
        let c1 = Clause::new(vec![
            Literal::positive("B"),
            Literal::negative("A"),
            Literal::positive("B"),
        ]);
        let c2 = Clause::new(vec![Literal::negative("A"), Literal::positive("B")]);
        assert_eq!(c1, c2);
        assert_eq!(c1.len(), 2);
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let c1 = Clause::new(vec![Literal::positive("A"), Literal::positive("B")]);
        let c2 = Clause::new(vec![Literal::positive("B"), Literal::positive("A")]);
        assert_eq!(c1, c2);
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let hash = |c: &Clause| {
            let mut h = DefaultHasher::new();
            c.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&c1), hash(&c2));
    }

    #[test]
    fn test_tautology() {
        let taut = Clause::new(vec![
            Literal::positive("A"),
            Literal::negative("A"),
            Literal::positive("B"),
        ]);
        assert!(taut.is_tautology());

        let plain = Clause::new(vec![Literal::positive("A"), Literal::negative("B")]);
        assert!(!plain.is_tautology());
        assert!(!Clause::empty().is_tautology());
    }

    #[test]
    fn test_distinct_variable_count() {
        let c = Clause::new(vec![
            Literal::positive("A"),
            Literal::negative("A"),
            Literal::positive("B"),
        ]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.distinct_variable_count(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Clause::empty().to_string(), "⊥");
        let c = Clause::new(vec![Literal::positive("B"), Literal::negative("A")]);
        assert_eq!(c.to_string(), "~A ∨ B");
    }
}
