//! # JSON problem files
//!
//! A problem file is a single object:
//!
//! ```json
//! { "A": [[1, 1], [2, 3]], "b": [4, 12], "c": [3, 5], "senses": ["<=", "<="], "maximize": true }
//! ```
//!
//! The fields `maximize`, `M` and `iteration_cap` are optional.
use crate::data::linear_program::problem::{ProblemDefinition, RawProblem};
use crate::io::error::ImportError;

/// Parse and validate a problem.
pub fn import(program: &impl AsRef<str>) -> Result<ProblemDefinition, ImportError> {
    let raw: RawProblem = serde_json::from_str(program.as_ref())?;

    Ok(raw.try_into()?)
}

/// Write a problem in the format read by `import`.
pub fn export(problem: &ProblemDefinition) -> Result<String, ImportError> {
    Ok(serde_json::to_string_pretty(&RawProblem::from(problem))?)
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::ConfigurationError;
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::io::error::ImportError;
    use crate::io::json::{export, import};

    #[test]
    fn import_with_defaults() {
        let problem = import(&r#"{
            "A": [[1, 1], [2, 3]],
            "b": [4, 12],
            "c": [3, 5],
            "senses": ["<=", ">="]
        }"#).unwrap();

        assert_eq!(problem.senses(), &[ConstraintType::Less, ConstraintType::Greater]);
        assert_eq!(problem.objective(), Objective::Maximize);
        assert_eq!(problem.config().big_m, 1e6);
        assert_eq!(problem.config().iteration_cap, 20);
    }

    #[test]
    fn syntax_error() {
        assert!(matches!(import(&"{ \"A\": [[1, 1]"), Err(ImportError::Parse(_))));
    }

    #[test]
    fn inconsistent() {
        let result = import(&r#"{"A": [[1]], "b": [1], "c": [1], "senses": ["<"]}"#);
        assert!(matches!(
            result,
            Err(ImportError::Configuration(ConfigurationError::UnrecognizedSense { row: 0, .. })),
        ));
    }

    #[test]
    fn export_then_import() {
        let problem = import(&r#"{
            "A": [[1, 2]], "b": [3], "c": [1, 1], "senses": ["="], "maximize": false, "M": 1000
        }"#).unwrap();

        assert_eq!(import(&export(&problem).unwrap()).unwrap(), problem);
    }
}
