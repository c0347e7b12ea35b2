//! Propositional literals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal: a propositional variable or its negation.
///
/// `Ord` sorts by variable name first, so clauses get a canonical literal
/// order and structural equality coincides with set equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub variable: String,
    /// true = positive, false = negated
    pub polarity: bool,
}

impl Literal {
    /// Create a positive literal.
    pub fn positive(variable: impl Into<String>) -> Self {
        Literal {
            variable: variable.into(),
            polarity: true,
        }
    }

    /// Create a negated literal.
    pub fn negative(variable: impl Into<String>) -> Self {
        Literal {
            variable: variable.into(),
            polarity: false,
        }
    }

    /// The complement of this literal (same variable, opposite polarity).
    pub fn complement(&self) -> Literal {
        Literal {
            variable: self.variable.clone(),
            polarity: !self.polarity,
        }
    }

    /// Two literals are complementary iff same variable, opposite polarity.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.variable == other.variable && self.polarity != other.polarity
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.variable)
    }
}
