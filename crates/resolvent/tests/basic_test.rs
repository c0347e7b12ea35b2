//! End-to-end tests driving the prover through the string front end.

use resolvent::{
    parse, prove, prove_formulas, Clause, Literal, ParseError, ProofMessage, ProverConfig,
};

fn unit(variable: &str, polarity: bool) -> Clause {
    Clause::unit(Literal {
        variable: variable.to_string(),
        polarity,
    })
}

#[test]
fn test_hypothetical_syllogism() {
    // From A -> B and B -> C, conclude A -> C.
    let result = prove_formulas(&["(A -> B)", "(B -> C)"], "(A -> C)", &ProverConfig::default())
        .unwrap();
    assert!(result.proved);
    assert_eq!(result.message, ProofMessage::Proved);
    assert!(result.steps <= 4, "took {} steps", result.steps);

    // Input clauses: the two axiom clauses plus the negated goal,
    // ~(A -> C) in CNF is A ∧ ~C.
    let inputs: Vec<String> = result.clauses[..result.initial_count]
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(inputs, vec!["~A ∨ B", "~B ∨ C", "A", "~C"]);

    // The derivation ends in the empty clause and orders parents first.
    let steps = result.derivation().expect("proved result has a derivation");
    assert!(steps.last().unwrap().clause.is_empty());
    for step in &steps {
        if let Some((p1, p2)) = step.parents {
            assert!(p1 < step.index && p2 < step.index);
        }
    }
}

#[test]
fn test_unrelated_goal_is_not_proved() {
    let result = prove_formulas(&["(A -> B)"], "(A -> C)", &ProverConfig::default()).unwrap();
    assert!(!result.proved);
    assert_eq!(result.message, ProofMessage::MaxStepsReached);
    assert!(result.derivation().is_none());
}

#[test]
fn test_contradictory_axioms_prove_anything() {
    let result = prove_formulas(&["(A & ~A)"], "B", &ProverConfig::default()).unwrap();
    assert!(result.proved);
    assert_eq!(result.steps, 1);
}

#[test]
fn test_empty_goal_clause_is_trivial() {
    let axioms = vec![unit("A", true)];
    let result = prove(&axioms, &Clause::empty(), &ProverConfig::default());
    assert!(result.proved);
    assert_eq!(result.steps, 0);
    assert_eq!(result.message, ProofMessage::GoalTrivial);
    assert!(result.derivation().is_none());
}

#[test]
fn test_malformed_input_is_an_error_not_a_panic() {
    let err = parse("(A ->").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));

    let err = prove_formulas(&["(A ->"], "B", &ProverConfig::default()).unwrap_err();
    assert!(err.to_string().contains("unexpected end of input"));
}

#[test]
fn test_modus_ponens() {
    let result = prove_formulas(&["A", "(A -> B)"], "B", &ProverConfig::default()).unwrap();
    assert!(result.proved);
}

#[test]
fn test_modus_tollens() {
    let result = prove_formulas(&["~B", "(A -> B)"], "~A", &ProverConfig::default()).unwrap();
    assert!(result.proved);
}

#[test]
fn test_biconditional_chain() {
    let result = prove_formulas(&["(A <-> B)", "(B <-> C)", "A"], "C", &ProverConfig::default())
        .unwrap();
    assert!(result.proved);
}

#[test]
fn test_disjunctive_syllogism() {
    let result = prove_formulas(&["(A | B)", "~A"], "B", &ProverConfig::default()).unwrap();
    assert!(result.proved);
}

#[test]
fn test_goal_with_conjunction() {
    let result =
        prove_formulas(&["A", "(A -> B)"], "(A & B)", &ProverConfig::default()).unwrap();
    assert!(result.proved);

    let result = prove_formulas(&["A"], "(A & B)", &ProverConfig::default()).unwrap();
    assert!(!result.proved);
}

#[test]
fn test_derivation_indices_are_consistent() {
    let result = prove_formulas(
        &["(A -> B)", "(B -> C)", "(C -> D)", "A"],
        "D",
        &ProverConfig::default(),
    )
    .unwrap();
    assert!(result.proved);
    let steps = result.derivation().unwrap();
    for step in &steps {
        assert_eq!(result.clauses[step.index], step.clause);
        match step.parents {
            Some(_) => assert!(!result.is_input(step.index)),
            None => assert!(result.is_input(step.index)),
        }
    }
}
