//! # Errors surfaced by the solver
//!
//! A problem can be rejected before solving (`ConfigurationError`), or the solve can end in one
//! of the terminal outcomes that are not a finite optimum. None of these are transient: solving
//! the same definition again gives the same error.
use thiserror::Error;

use crate::algorithm::big_m::solution::{IterationSnapshot, SolutionResult};

/// The problem definition is inconsistent and no tableau can be built from it.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A sense literal other than `<=`, `>=` or `=`.
    #[error("unrecognized constraint sense \"{sense}\" in row {row}")]
    UnrecognizedSense { row: usize, sense: String },

    /// A row of the constraint matrix does not have one coefficient per decision variable.
    #[error("row {row} of the constraint matrix has {found} coefficients, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },

    /// `b` does not have one value per constraint.
    #[error("right-hand side has length {found}, expected {expected}")]
    RightHandSideLength { expected: usize, found: usize },

    /// `senses` does not have one value per constraint.
    #[error("senses has length {found}, expected {expected}")]
    SensesLength { expected: usize, found: usize },

    /// The cost vector is empty.
    #[error("problem has no decision variables")]
    NoDecisionVariables,

    /// A NaN or infinite value in `b` or `c`.
    #[error("{what}[{index}] is not a finite number")]
    NonFinite { what: &'static str, index: usize },

    /// A NaN or infinite value in the constraint matrix.
    #[error("constraint coefficient ({row}, {column}) is not a finite number")]
    NonFiniteCoefficient { row: usize, column: usize },

    /// The penalty for artificial variables must be a positive, finite number.
    #[error("Big-M constant must be positive and finite, got {0}")]
    BigM(f64),

    /// At least one iteration is needed to detect optimality.
    #[error("iteration cap must be at least 1")]
    IterationCap,

    /// No unit column was found for a constraint row of the initial tableau.
    #[error("no initial basic variable for constraint row {row}")]
    NoInitialBasis { row: usize },
}

/// No constraint row limits the growth of the entering variable.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("problem is unbounded: no row limits entering variable {entering}")]
pub struct UnboundedProblemError {
    /// Name of the entering variable.
    pub entering: String,
    /// Tableau column of the entering variable.
    pub column: usize,
    /// Snapshots taken up to and including the iteration in which unboundedness was detected.
    pub history: Vec<IterationSnapshot>,
}

/// An artificial variable is still nonzero at the optimum of the penalized problem.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("problem is infeasible: artificial variable {variable} remains at {value}")]
pub struct InfeasibleProblemError {
    /// Name of the artificial variable.
    pub variable: String,
    /// Tableau column of the artificial variable.
    pub column: usize,
    /// Its value in the final basic solution.
    pub value: f64,
}

/// The iteration cap was exhausted before an optimal tableau was reached.
///
/// The values in `partial` are read from the last tableau as is. They have not been checked for
/// feasibility and are in general not optimal.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("iteration limit of {cap} reached before optimality")]
pub struct IterationLimitReached {
    /// The cap that was hit.
    pub cap: usize,
    /// Unvalidated result read from the last state.
    pub partial: Box<SolutionResult>,
}

/// Any way in which a solve can fail to produce an optimal solution.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Unbounded(#[from] UnboundedProblemError),
    #[error(transparent)]
    Infeasible(#[from] InfeasibleProblemError),
    #[error(transparent)]
    IterationLimit(#[from] IterationLimitReached),
}
