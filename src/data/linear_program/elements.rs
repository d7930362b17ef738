//! # Building blocks to describe linear programs.
use std::fmt::{self, Display};
use std::ops::Not;
use std::str::FromStr;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// The type of the constraint after multiplying both sides by -1.
    #[must_use]
    pub fn negated(self) -> Self {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }

    /// Whether a row of this type needs an artificial variable to get a starting basis.
    pub fn needs_artificial(self) -> bool {
        !matches!(self, ConstraintType::Less)
    }
}

/// The literal could not be read as a constraint type.
#[allow(missing_docs)]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnknownSense(pub String);

impl FromStr for ConstraintType {
    type Err = UnknownSense;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(ConstraintType::Less),
            ">=" | "≥" => Ok(ConstraintType::Greater),
            "=" | "==" => Ok(ConstraintType::Equal),
            other => Err(UnknownSense(other.to_string())),
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

impl Objective {
    /// Sign by which the caller's cost is multiplied to get the maximized cost used internally.
    pub fn sign(self) -> f64 {
        match self {
            Objective::Maximize => 1_f64,
            Objective::Minimize => -1_f64,
        }
    }
}

impl From<bool> for Objective {
    fn from(maximize: bool) -> Self {
        if maximize { Objective::Maximize } else { Objective::Minimize }
    }
}

impl Not for Objective {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintType, Objective, UnknownSense};

    #[test]
    fn parse_literals() {
        assert_eq!("<=".parse(), Ok(ConstraintType::Less));
        assert_eq!(" >= ".parse(), Ok(ConstraintType::Greater));
        assert_eq!("=".parse(), Ok(ConstraintType::Equal));
        assert_eq!("≥".parse(), Ok(ConstraintType::Greater));
        assert_eq!("<".parse::<ConstraintType>(), Err(UnknownSense("<".to_string())));
    }

    #[test]
    fn display_round_trips() {
        for sense in [ConstraintType::Less, ConstraintType::Greater, ConstraintType::Equal] {
            assert_eq!(sense.to_string().parse(), Ok(sense));
        }
    }

    #[test]
    fn negation() {
        assert_eq!(ConstraintType::Less.negated(), ConstraintType::Greater);
        assert_eq!(ConstraintType::Equal.negated(), ConstraintType::Equal);
        assert!(!ConstraintType::Less.needs_artificial());
        assert!(ConstraintType::Equal.needs_artificial());
    }

    #[test]
    fn objective() {
        assert_eq!(Objective::from(true), Objective::Maximize);
        assert_eq!(!Objective::Maximize, Objective::Minimize);
        assert_eq!(Objective::Minimize.sign(), -1_f64);
        assert_eq!(Objective::default(), Objective::Maximize);
    }
}
