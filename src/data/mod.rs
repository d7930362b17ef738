//! # Data structures
//!
//! Descriptions of linear programs and the variables that appear in their tableaus.
pub mod linear_program;
