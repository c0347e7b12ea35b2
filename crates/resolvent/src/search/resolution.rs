//! The binary resolution rule.

use crate::logic::{Clause, Literal};

/// Check whether two clauses share at least one complementary literal
/// pair, i.e. whether resolving them can produce anything.
pub fn can_resolve(c1: &Clause, c2: &Clause) -> bool {
    c1.literals()
        .iter()
        .any(|lit| c2.contains(&lit.complement()))
}

/// Compute every resolvent of a clause pair.
///
/// For each complementary literal pair `(l ∈ c1, ~l ∈ c2)`, the resolvent
/// is the union of both clauses minus the two resolved literals. A pair
/// may be resolvable on more than one variable, in which case all
/// resolvents are produced. The output is deduplicated.
pub fn resolvents(c1: &Clause, c2: &Clause) -> Vec<Clause> {
    let mut out: Vec<Clause> = Vec::new();
    for l1 in c1.literals() {
        let l2 = l1.complement();
        if !c2.contains(&l2) {
            continue;
        }
        let literals: Vec<Literal> = c1
            .literals()
            .iter()
            .filter(|&lit| lit != l1)
            .chain(c2.literals().iter().filter(|&lit| *lit != l2))
            .cloned()
            .collect();
        let resolvent = Clause::new(literals);
        if !out.contains(&resolvent) {
            out.push(resolvent);
        }
    }
    out
}
