//! # Problem definitions
//!
//! The caller describes a problem as `max / min c^T x` subject to `A x (<=, >=, =) b`, `x >= 0`.
//! Such a description is validated once, when the `ProblemDefinition` is created. After that, it
//! is never changed.
use serde::{Deserialize, Serialize};

use crate::algorithm::error::ConfigurationError;
use crate::data::linear_program::elements::{ConstraintType, Objective};

/// Default penalty for artificial variables in the objective function.
pub const DEFAULT_BIG_M: f64 = 1e6;
/// Default maximum number of iterations of a single solve.
pub const DEFAULT_ITERATION_CAP: usize = 20;

/// Parameters of the solve that are not part of the linear program itself.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Penalty `M` for artificial variables.
    pub big_m: f64,
    /// Maximum number of iterations, including the one in which optimality is detected.
    pub iteration_cap: usize,
}

impl SolverConfig {
    /// Check that the parameters allow a solve.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.big_m.is_finite() || self.big_m <= 0_f64 {
            return Err(ConfigurationError::BigM(self.big_m));
        }
        if self.iteration_cap == 0 {
            return Err(ConfigurationError::IterationCap);
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            big_m: DEFAULT_BIG_M,
            iteration_cap: DEFAULT_ITERATION_CAP,
        }
    }
}

/// A validated linear program in mixed-constraint form.
///
/// Invariants: `b` and `senses` have one entry per row of `A`, every row of `A` has one entry per
/// element of `c`, all numbers are finite and the `config` is valid.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemDefinition {
    A: Vec<Vec<f64>>,
    b: Vec<f64>,
    c: Vec<f64>,
    senses: Vec<ConstraintType>,
    objective: Objective,
    config: SolverConfig,
}

#[allow(non_snake_case)]
impl ProblemDefinition {
    /// Create a new problem definition.
    ///
    /// # Arguments
    ///
    /// * `A`: Constraint matrix, row major, `m` rows of `n` coefficients.
    /// * `b`: Right-hand side, one value per row.
    /// * `c`: Cost, one value per decision variable.
    /// * `senses`: Type of each constraint row.
    /// * `objective`: Whether `c^T x` should be maximized or minimized.
    /// * `config`: Penalty and iteration cap.
    ///
    /// # Return value
    ///
    /// The definition, or the first inconsistency found.
    pub fn new(
        A: Vec<Vec<f64>>,
        b: Vec<f64>,
        c: Vec<f64>,
        senses: Vec<ConstraintType>,
        objective: Objective,
        config: SolverConfig,
    ) -> Result<Self, ConfigurationError> {
        let m = A.len();
        let n = c.len();

        if n == 0 {
            return Err(ConfigurationError::NoDecisionVariables);
        }
        if b.len() != m {
            return Err(ConfigurationError::RightHandSideLength { expected: m, found: b.len() });
        }
        if senses.len() != m {
            return Err(ConfigurationError::SensesLength { expected: m, found: senses.len() });
        }
        for (row, coefficients) in A.iter().enumerate() {
            if coefficients.len() != n {
                return Err(ConfigurationError::RowLength { row, expected: n, found: coefficients.len() });
            }
            if let Some(column) = coefficients.iter().position(|v| !v.is_finite()) {
                return Err(ConfigurationError::NonFiniteCoefficient { row, column });
            }
        }
        if let Some(index) = b.iter().position(|v| !v.is_finite()) {
            return Err(ConfigurationError::NonFinite { what: "b", index });
        }
        if let Some(index) = c.iter().position(|v| !v.is_finite()) {
            return Err(ConfigurationError::NonFinite { what: "c", index });
        }
        config.validate()?;

        Ok(Self { A, b, c, senses, objective, config })
    }

    /// Parse the sense literals and create the definition.
    ///
    /// Unknown literals are reported with the index of their row.
    pub fn with_senses<S: AsRef<str>>(
        A: Vec<Vec<f64>>,
        b: Vec<f64>,
        c: Vec<f64>,
        senses: &[S],
        objective: Objective,
        config: SolverConfig,
    ) -> Result<Self, ConfigurationError> {
        let senses = parse_senses(senses)?;
        Self::new(A, b, c, senses, objective, config)
    }

    /// Number of constraint rows `m`.
    pub fn nr_constraints(&self) -> usize {
        self.A.len()
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.c.len()
    }

    /// Constraint matrix.
    pub fn A(&self) -> &[Vec<f64>] {
        &self.A
    }

    /// Right-hand side.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Cost vector, as given by the caller.
    pub fn c(&self) -> &[f64] {
        &self.c
    }

    /// Constraint types.
    pub fn senses(&self) -> &[ConstraintType] {
        &self.senses
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Penalty and iteration cap.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Same problem, different solve parameters.
    pub fn with_config(mut self, config: SolverConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Same problem, different direction of optimization.
    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }
}

fn parse_senses<S: AsRef<str>>(senses: &[S]) -> Result<Vec<ConstraintType>, ConfigurationError> {
    senses.iter()
        .enumerate()
        .map(|(row, sense)| sense.as_ref().parse().map_err(|_| {
            ConfigurationError::UnrecognizedSense { row, sense: sense.as_ref().to_string() }
        }))
        .collect()
}

/// Unvalidated problem as it appears in a problem file.
#[allow(non_snake_case)]
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProblem {
    pub A: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub senses: Vec<String>,
    #[serde(default = "default_maximize")]
    pub maximize: bool,
    #[serde(default = "default_big_m")]
    pub M: f64,
    #[serde(default = "default_iteration_cap")]
    pub iteration_cap: usize,
}

fn default_maximize() -> bool {
    true
}

fn default_big_m() -> f64 {
    DEFAULT_BIG_M
}

fn default_iteration_cap() -> usize {
    DEFAULT_ITERATION_CAP
}

impl TryFrom<RawProblem> for ProblemDefinition {
    type Error = ConfigurationError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        ProblemDefinition::with_senses(
            raw.A,
            raw.b,
            raw.c,
            &raw.senses,
            raw.maximize.into(),
            SolverConfig { big_m: raw.M, iteration_cap: raw.iteration_cap },
        )
    }
}

impl From<&ProblemDefinition> for RawProblem {
    fn from(problem: &ProblemDefinition) -> Self {
        Self {
            A: problem.A.clone(),
            b: problem.b.clone(),
            c: problem.c.clone(),
            senses: problem.senses.iter().map(ToString::to_string).collect(),
            maximize: problem.objective == Objective::Maximize,
            M: problem.config.big_m,
            iteration_cap: problem.config.iteration_cap,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::ConfigurationError;
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::data::linear_program::problem::{ProblemDefinition, RawProblem, SolverConfig};

    fn raw() -> RawProblem {
        RawProblem {
            A: vec![vec![1_f64, 1_f64], vec![2_f64, 3_f64]],
            b: vec![4_f64, 12_f64],
            c: vec![3_f64, 5_f64],
            senses: vec!["<=".to_string(), "<=".to_string()],
            maximize: true,
            M: 1e6,
            iteration_cap: 20,
        }
    }

    #[test]
    fn valid() {
        let problem = ProblemDefinition::try_from(raw()).unwrap();
        assert_eq!(problem.nr_constraints(), 2);
        assert_eq!(problem.nr_variables(), 2);
        assert_eq!(problem.senses(), &[ConstraintType::Less, ConstraintType::Less]);
        assert_eq!(problem.objective(), Objective::Maximize);
        assert_eq!(problem.config(), &SolverConfig::default());
    }

    #[test]
    fn unrecognized_sense() {
        let mut raw = raw();
        raw.senses[1] = "=<".to_string();
        assert_eq!(
            ProblemDefinition::try_from(raw),
            Err(ConfigurationError::UnrecognizedSense { row: 1, sense: "=<".to_string() }),
        );
    }

    #[test]
    fn mismatched_lengths() {
        let mut wrong_b = raw();
        wrong_b.b.push(1_f64);
        assert_eq!(
            ProblemDefinition::try_from(wrong_b),
            Err(ConfigurationError::RightHandSideLength { expected: 2, found: 3 }),
        );

        let mut wrong_senses = raw();
        wrong_senses.senses.pop();
        assert_eq!(
            ProblemDefinition::try_from(wrong_senses),
            Err(ConfigurationError::SensesLength { expected: 2, found: 1 }),
        );

        let mut wrong_row = raw();
        wrong_row.A[1].push(0_f64);
        assert_eq!(
            ProblemDefinition::try_from(wrong_row),
            Err(ConfigurationError::RowLength { row: 1, expected: 2, found: 3 }),
        );
    }

    #[test]
    fn invalid_numbers() {
        let mut nan = raw();
        nan.A[0][1] = f64::NAN;
        assert_eq!(
            ProblemDefinition::try_from(nan),
            Err(ConfigurationError::NonFiniteCoefficient { row: 0, column: 1 }),
        );

        let mut infinite = raw();
        infinite.c[0] = f64::INFINITY;
        assert_eq!(
            ProblemDefinition::try_from(infinite),
            Err(ConfigurationError::NonFinite { what: "c", index: 0 }),
        );

        let mut negative_m = raw();
        negative_m.M = -1_f64;
        assert_eq!(ProblemDefinition::try_from(negative_m), Err(ConfigurationError::BigM(-1_f64)));

        let mut no_iterations = raw();
        no_iterations.iteration_cap = 0;
        assert_eq!(ProblemDefinition::try_from(no_iterations), Err(ConfigurationError::IterationCap));
    }

    #[test]
    fn no_variables() {
        let result = ProblemDefinition::new(
            vec![],
            vec![],
            vec![],
            vec![],
            Objective::Maximize,
            SolverConfig::default(),
        );
        assert_eq!(result, Err(ConfigurationError::NoDecisionVariables));
    }

    #[test]
    fn back_to_raw() {
        let problem = ProblemDefinition::try_from(raw()).unwrap();
        assert_eq!(RawProblem::from(&problem), raw());
    }

    #[test]
    fn deserialize_defaults() {
        let raw: RawProblem = serde_json::from_str(r#"{
            "A": [[1, 1]], "b": [2], "c": [1, 1], "senses": [">="]
        }"#).unwrap();
        assert!(raw.maximize);
        assert_eq!(raw.M, 1e6);
        assert_eq!(raw.iteration_cap, 20);

        let unknown = serde_json::from_str::<RawProblem>(r#"{
            "A": [[1]], "b": [2], "c": [1], "senses": ["="], "bounds": []
        }"#);
        assert!(unknown.is_err());
    }
}
