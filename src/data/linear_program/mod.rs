//! # Linear programs
//!
//! A problem is given by the caller in mixed-constraint form, validated once into a
//! `ProblemDefinition`, and expanded into named tableau columns by the `VariableRegistry`.
pub mod elements;
pub mod problem;
pub mod variable;
