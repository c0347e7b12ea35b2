//! Conversion to conjunctive normal form and clause extraction.
//!
//! The normalizer is four ordered rewrite passes, each a total function on
//! formulas:
//!
//! 1. [`eliminate_iff`] — `A <-> B` becomes `(A -> B) & (B -> A)`
//! 2. [`eliminate_implications`] — `A -> B` becomes `~A | B`
//! 3. [`push_negations`] — De Morgan plus double-negation elimination;
//!    `Not` survives only directly over a variable
//! 4. [`distribute_disjunctions`] — Or-over-And, to a fixpoint
//!
//! The output is a conjunction of disjunctions of literals, which
//! [`clauses`] flattens into a clause list. Distribution fully expands
//! disjunctions over conjunctions, so the clause count is exponential in
//! formula size in the worst case.

use crate::error::{MalformedCnfError, ProverError};
use crate::logic::{Clause, Formula, Literal};

/// Rewrite every biconditional into the conjunction of two implications.
pub fn eliminate_iff(formula: Formula) -> Formula {
    match formula {
        Formula::Iff(a, b) => {
            let a = eliminate_iff(*a);
            let b = eliminate_iff(*b);
            Formula::and(
                Formula::implies(a.clone(), b.clone()),
                Formula::implies(b, a),
            )
        }
        Formula::Not(f) => Formula::not(eliminate_iff(*f)),
        Formula::And(a, b) => Formula::and(eliminate_iff(*a), eliminate_iff(*b)),
        Formula::Or(a, b) => Formula::or(eliminate_iff(*a), eliminate_iff(*b)),
        Formula::Implies(a, b) => Formula::implies(eliminate_iff(*a), eliminate_iff(*b)),
        var @ Formula::Var(_) => var,
    }
}

/// Rewrite every implication `A -> B` into `~A | B`.
pub fn eliminate_implications(formula: Formula) -> Formula {
    match formula {
        Formula::Implies(a, b) => {
            let a = eliminate_implications(*a);
            let b = eliminate_implications(*b);
            Formula::or(Formula::not(a), b)
        }
        Formula::Not(f) => Formula::not(eliminate_implications(*f)),
        Formula::And(a, b) => Formula::and(eliminate_implications(*a), eliminate_implications(*b)),
        Formula::Or(a, b) => Formula::or(eliminate_implications(*a), eliminate_implications(*b)),
        Formula::Iff(a, b) => Formula::iff(eliminate_implications(*a), eliminate_implications(*b)),
        var @ Formula::Var(_) => var,
    }
}

/// Push negations inward with De Morgan's laws, eliminating double
/// negations. On output, `Not` appears only directly over a variable.
///
/// Idempotent on already-reduced formulas.
pub fn push_negations(formula: Formula) -> Formula {
    match formula {
        Formula::Not(inner) => match *inner {
            Formula::Not(x) => push_negations(*x),
            Formula::And(a, b) => Formula::or(
                push_negations(Formula::not(*a)),
                push_negations(Formula::not(*b)),
            ),
            Formula::Or(a, b) => Formula::and(
                push_negations(Formula::not(*a)),
                push_negations(Formula::not(*b)),
            ),
            var @ Formula::Var(_) => Formula::not(var),
            // Implications and biconditionals are gone after the earlier
            // passes; keep the negation in place and reduce the body.
            other => Formula::not(push_negations(other)),
        },
        Formula::And(a, b) => Formula::and(push_negations(*a), push_negations(*b)),
        Formula::Or(a, b) => Formula::or(push_negations(*a), push_negations(*b)),
        Formula::Implies(a, b) => Formula::implies(push_negations(*a), push_negations(*b)),
        Formula::Iff(a, b) => Formula::iff(push_negations(*a), push_negations(*b)),
        var @ Formula::Var(_) => var,
    }
}

/// Distribute disjunction over conjunction until no `And` remains beneath
/// an `Or`:
///
/// ```text
/// (A1 & A2) | B  =>  (A1 | B) & (A2 | B)
/// A | (B1 & B2)  =>  (A | B1) & (A | B2)
/// ```
///
/// Operands are normalized before the rewrite and the rewritten subtrees
/// are re-distributed, so the pass reaches a true fixpoint even when both
/// operands are conjunctions or when distribution exposes new nesting.
pub fn distribute_disjunctions(formula: Formula) -> Formula {
    match formula {
        Formula::Or(a, b) => {
            let a = distribute_disjunctions(*a);
            let b = distribute_disjunctions(*b);
            distribute_or(a, b)
        }
        Formula::And(a, b) => {
            Formula::and(distribute_disjunctions(*a), distribute_disjunctions(*b))
        }
        other => other,
    }
}

/// Form the disjunction of two already-distributed formulas, splitting any
/// conjunction on either side.
fn distribute_or(a: Formula, b: Formula) -> Formula {
    match (a, b) {
        (Formula::And(a1, a2), b) => {
            Formula::and(distribute_or(*a1, b.clone()), distribute_or(*a2, b))
        }
        (a, Formula::And(b1, b2)) => {
            Formula::and(distribute_or(a.clone(), *b1), distribute_or(a, *b2))
        }
        (a, b) => Formula::or(a, b),
    }
}

/// Run the full pipeline: the result is an `And` of `Or`s of literals.
pub fn to_cnf(formula: Formula) -> Formula {
    let formula = eliminate_iff(formula);
    let formula = eliminate_implications(formula);
    let formula = push_negations(formula);
    let formula = distribute_disjunctions(formula);
    debug_assert!(is_clausal(&formula), "normalizer output must be clausal");
    formula
}

/// Structurally check that a formula is in clausal form: a conjunction of
/// disjunctions of literals.
pub fn is_clausal(formula: &Formula) -> bool {
    match formula {
        Formula::And(a, b) => is_clausal(a) && is_clausal(b),
        other => is_disjunct(other),
    }
}

fn is_disjunct(formula: &Formula) -> bool {
    match formula {
        Formula::Or(a, b) => is_disjunct(a) && is_disjunct(b),
        other => is_literal(other),
    }
}

fn is_literal(formula: &Formula) -> bool {
    match formula {
        Formula::Var(_) => true,
        Formula::Not(inner) => matches!(**inner, Formula::Var(_)),
        _ => false,
    }
}

/// Flatten a CNF-form formula into a list of clauses.
///
/// `And` nodes split into independent clauses; `Or` nodes flatten into one
/// set of literals; a bare variable or negated variable is a unit clause.
/// A non-clausal shape is a [`MalformedCnfError`] — it indicates a
/// normalizer bug and never occurs on [`to_cnf`] output.
pub fn clauses(formula: &Formula) -> Result<Vec<Clause>, MalformedCnfError> {
    let mut out = Vec::new();
    collect_clauses(formula, &mut out)?;
    Ok(out)
}

fn collect_clauses(formula: &Formula, out: &mut Vec<Clause>) -> Result<(), MalformedCnfError> {
    match formula {
        Formula::And(a, b) => {
            collect_clauses(a, out)?;
            collect_clauses(b, out)
        }
        other => {
            out.push(extract_clause(other)?);
            Ok(())
        }
    }
}

/// Gather the literals of one clause, flattening nested `Or`s iteratively.
fn extract_clause(formula: &Formula) -> Result<Clause, MalformedCnfError> {
    let mut literals = Vec::new();
    let mut stack = vec![formula];
    while let Some(current) = stack.pop() {
        match current {
            Formula::Or(a, b) => {
                stack.push(b);
                stack.push(a);
            }
            other => literals.push(extract_literal(other)?),
        }
    }
    Ok(Clause::new(literals))
}

fn extract_literal(formula: &Formula) -> Result<Literal, MalformedCnfError> {
    match formula {
        Formula::Var(name) => Ok(Literal::positive(name.clone())),
        Formula::Not(inner) => match &**inner {
            Formula::Var(name) => Ok(Literal::negative(name.clone())),
            other => Err(MalformedCnfError {
                found: format!("~({})", other),
            }),
        },
        other => Err(MalformedCnfError {
            found: other.to_string(),
        }),
    }
}

/// Parse formula text and convert it straight to clauses.
pub fn formula_to_clauses(text: &str) -> Result<Vec<Clause>, ProverError> {
    let formula = crate::parser::parse(text)?;
    let cnf = to_cnf(formula);
    Ok(clauses(&cnf)?)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Formula as F;
    use crate::parser::parse;
    use std::collections::BTreeSet;

    fn clause_set(text: &str) -> BTreeSet<Vec<String>> {
        formula_to_clauses(text)
            .unwrap()
            .into_iter()
            .map(|c| c.literals().iter().map(|l| l.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_eliminate_iff() {
        let f = parse("A <-> B").unwrap();
        let expected = F::and(
            F::implies(F::var("A"), F::var("B")),
            F::implies(F::var("B"), F::var("A")),
        );
        assert_eq!(eliminate_iff(f), expected);
    }

    #[test]
    fn test_eliminate_iff_nested() {
        let f = parse("~(A <-> B)").unwrap();
        let expected = F::not(F::and(
            F::implies(F::var("A"), F::var("B")),
            F::implies(F::var("B"), F::var("A")),
        ));
        assert_eq!(eliminate_iff(f), expected);
    }

    #[test]
    fn test_eliminate_implications() {
        let f = parse("A -> B").unwrap();
        assert_eq!(
            eliminate_implications(f),
            F::or(F::not(F::var("A")), F::var("B"))
        );
    }

    #[test]
    fn test_push_negations_de_morgan() {
        let f = F::not(F::and(F::var("A"), F::var("B")));
        assert_eq!(
            push_negations(f),
            F::or(F::not(F::var("A")), F::not(F::var("B")))
        );

        let g = F::not(F::or(F::var("A"), F::var("B")));
        assert_eq!(
            push_negations(g),
            F::and(F::not(F::var("A")), F::not(F::var("B")))
        );
    }

    #[test]
    fn test_push_negations_double_negation() {
        let f = F::not(F::not(F::var("A")));
        assert_eq!(push_negations(f), F::var("A"));
        let g = F::not(F::not(F::not(F::var("A"))));
        assert_eq!(push_negations(g), F::not(F::var("A")));
    }

    #[test]
    fn test_push_negations_idempotent_on_reduced() {
        let reduced = F::and(
            F::or(F::not(F::var("A")), F::var("B")),
            F::not(F::var("C")),
        );
        assert_eq!(push_negations(reduced.clone()), reduced);
    }

    #[test]
    fn test_distribute_simple() {
        // (A & B) | C => (A | C) & (B | C)
        let f = F::or(F::and(F::var("A"), F::var("B")), F::var("C"));
        let expected = F::and(
            F::or(F::var("A"), F::var("C")),
            F::or(F::var("B"), F::var("C")),
        );
        assert_eq!(distribute_disjunctions(f), expected);
    }

    #[test]
    fn test_distribute_both_sides_conjunctions() {
        // (A & B) | (C & D) needs repeated distribution to reach clausal form
        let f = F::or(
            F::and(F::var("A"), F::var("B")),
            F::and(F::var("C"), F::var("D")),
        );
        let result = distribute_disjunctions(f);
        assert!(is_clausal(&result));
        let cs = clauses(&result).unwrap();
        assert_eq!(cs.len(), 4);
    }

    #[test]
    fn test_distribute_deep_nesting_reaches_fixpoint() {
        // ((A & B) | (C & D)) | (E & F) exposes new And-under-Or while rewriting
        let f = F::or(
            F::or(
                F::and(F::var("A"), F::var("B")),
                F::and(F::var("C"), F::var("D")),
            ),
            F::and(F::var("E"), F::var("F")),
        );
        let result = distribute_disjunctions(f);
        assert!(is_clausal(&result));
        assert_eq!(clauses(&result).unwrap().len(), 8);
    }

    #[test]
    fn test_to_cnf_output_is_clausal() {
        for text in [
            "A",
            "~A",
            "A <-> B",
            "(A <-> B) <-> C",
            "~(A -> (B & ~C)) | (D <-> ~A)",
            "~(~(A | B) & ~(C | D))",
        ] {
            let cnf = to_cnf(parse(text).unwrap());
            assert!(is_clausal(&cnf), "not clausal for {:?}: {}", text, cnf);
        }
    }

    #[test]
    fn test_clause_extraction_implication() {
        let set = clause_set("A -> B");
        assert_eq!(set, BTreeSet::from([vec!["~A".into(), "B".into()]]));
    }

    #[test]
    fn test_clause_extraction_unit() {
        assert_eq!(clause_set("A"), BTreeSet::from([vec!["A".into()]]));
        assert_eq!(clause_set("~A"), BTreeSet::from([vec!["~A".into()]]));
    }

    #[test]
    fn test_clause_extraction_dedup_within_clause() {
        let cs = formula_to_clauses("A | A | B").unwrap();
        assert_eq!(cs.len(), 1);
        assert_eq!(cs[0].len(), 2);
    }

    #[test]
    fn test_malformed_cnf_rejected() {
        let residual = F::implies(F::var("A"), F::var("B"));
        assert!(clauses(&residual).is_err());

        let not_literal = F::not(F::or(F::var("A"), F::var("B")));
        assert!(clauses(&not_literal).is_err());

        let and_under_or = F::or(F::var("A"), F::and(F::var("B"), F::var("C")));
        assert!(clauses(&and_under_or).is_err());
    }

    #[test]
    fn test_normalization_deterministic() {
        let text = "~(A -> (B & ~C)) | (D <-> ~A)";
        assert_eq!(clause_set(text), clause_set(text));
    }
}
