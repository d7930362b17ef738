//! # A Big-M Simplex solver
//!
//! Linear programs in mixed-constraint form (`<=`, `>=` and `=` rows over nonnegative variables)
//! are solved with the dense tableau Simplex method, where artificial variables are penalized in
//! the objective by a large constant `M`. Every iteration is recorded, so that the path taken by
//! the algorithm can be reconstructed and presented afterwards.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

pub use crate::algorithm::big_m::{solve, Solver};
pub use crate::algorithm::big_m::solution::{IterationSnapshot, SolutionResult};
pub use crate::algorithm::error::{
    ConfigurationError,
    InfeasibleProblemError,
    IterationLimitReached,
    SolveError,
    UnboundedProblemError,
};
pub use crate::data::linear_program::elements::{ConstraintType, Objective};
pub use crate::data::linear_program::problem::{ProblemDefinition, SolverConfig};
