//! # Strategies
//!
//! Rules for choosing the pivot element of each iteration.
pub mod pivot_rule;
