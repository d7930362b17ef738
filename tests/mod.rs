//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod scenarios;

use std::path::{Path, PathBuf};

/// Path of a problem file in the `tests/data` directory.
fn get_test_file_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
        .with_extension("json")
}
