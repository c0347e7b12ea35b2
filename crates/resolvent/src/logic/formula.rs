//! The formula AST.

use std::collections::BTreeSet;
use std::fmt;

/// A propositional formula.
///
/// A closed sum type; every node exclusively owns its children, so the
/// tree has no sharing, equality is structural, and there is no cycle
/// risk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A propositional variable
    Var(String),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
    /// Implication (antecedent, consequent)
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Var(name.into())
    }

    pub fn not(f: Formula) -> Self {
        Formula::Not(Box::new(f))
    }

    pub fn and(a: Formula, b: Formula) -> Self {
        Formula::And(Box::new(a), Box::new(b))
    }

    pub fn or(a: Formula, b: Formula) -> Self {
        Formula::Or(Box::new(a), Box::new(b))
    }

    pub fn implies(a: Formula, b: Formula) -> Self {
        Formula::Implies(Box::new(a), Box::new(b))
    }

    pub fn iff(a: Formula, b: Formula) -> Self {
        Formula::Iff(Box::new(a), Box::new(b))
    }

    /// Collect the distinct variable names occurring in the formula.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<String>) {
        match self {
            Formula::Var(name) => {
                vars.insert(name.clone());
            }
            Formula::Not(f) => f.collect_variables(vars),
            Formula::And(a, b)
            | Formula::Or(a, b)
            | Formula::Implies(a, b)
            | Formula::Iff(a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    /// Binding strength, higher binds tighter. Used by `Display` to decide
    /// where parentheses are required.
    fn precedence(&self) -> u8 {
        match self {
            Formula::Var(_) => 6,
            Formula::Not(_) => 5,
            Formula::And(_, _) => 4,
            Formula::Or(_, _) => 3,
            Formula::Implies(_, _) => 2,
            Formula::Iff(_, _) => 1,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, parent: u8, tight: bool) -> fmt::Result {
        // Left operands of a left-associative operator may share the
        // parent's precedence; right operands may not.
        let needs_parens = if tight {
            self.precedence() <= parent
        } else {
            self.precedence() < parent
        };
        if needs_parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.precedence();
        match self {
            Formula::Var(name) => write!(f, "{}", name),
            Formula::Not(inner) => {
                write!(f, "~")?;
                inner.fmt_child(f, prec, false)
            }
            Formula::And(a, b) => {
                a.fmt_child(f, prec, false)?;
                write!(f, " & ")?;
                b.fmt_child(f, prec, true)
            }
            Formula::Or(a, b) => {
                a.fmt_child(f, prec, false)?;
                write!(f, " | ")?;
                b.fmt_child(f, prec, true)
            }
            Formula::Implies(a, b) => {
                a.fmt_child(f, prec, false)?;
                write!(f, " -> ")?;
                b.fmt_child(f, prec, true)
            }
            Formula::Iff(a, b) => {
                a.fmt_child(f, prec, false)?;
                write!(f, " <-> ")?;
                b.fmt_child(f, prec, true)
            }
        }
    }
}
