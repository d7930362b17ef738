//! # Error reporting for reading of problem files
use std::io;

use thiserror::Error;

use crate::algorithm::error::ConfigurationError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("failed to read problem file: {0}")]
    IO(#[source] io::Error),
    /// Contents of the file could not be parsed.
    ///
    /// # Note
    ///
    /// If the problem is inconsistent, that will not be represented with this error. This variant
    /// should only be created for syntactically incorrect files.
    #[error("failed to parse problem: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file describes a problem that is inconsistent, like a constraint row of the wrong
    /// length.
    #[error("inconsistent problem: {0}")]
    Configuration(#[from] ConfigurationError),
}
