//! # Reading and writing of problem definitions
//!
//! This module provides read and write functionality for problem files.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::linear_program::problem::ProblemDefinition;
use crate::io::error::ImportError;

pub mod error;
pub mod json;

/// Import a problem from a file.
///
/// Currently only supports JSON files, with the fields of `RawProblem`.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the contents can't be parsed,
/// or the problem described is inconsistent.
pub fn import(file_path: &Path) -> Result<ProblemDefinition, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json") => json::import(&program),
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use crate::io::error::ImportError;
    use crate::io::import;

    #[test]
    fn from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"A": [[1, 1]], "b": [2], "c": [1, 1], "senses": [">="], "maximize": false}}"#).unwrap();

        let problem = import(file.path()).unwrap();
        assert_eq!(problem.nr_constraints(), 1);
        assert_eq!(problem.nr_variables(), 2);
    }

    #[test]
    fn unknown_extension() {
        let file = tempfile::Builder::new().suffix(".mps").tempfile().unwrap();
        assert!(matches!(import(file.path()), Err(ImportError::FileExtension(_))));
    }

    #[test]
    fn missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.json");
        assert!(matches!(import(&path), Err(ImportError::IO(_))));
    }
}
