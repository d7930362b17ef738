//! # Algorithms
pub mod big_m;
pub mod error;
