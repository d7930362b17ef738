//! # Reading solutions
//!
//! Once the iterations stop, the values of the basic variables are read from the right-hand side
//! and checked: a solution in which an artificial variable is nonzero is not a solution to the
//! original problem.
use crate::algorithm::big_m::tableau::Tableau;
use crate::algorithm::error::InfeasibleProblemError;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::variable::{VariableKind, VariableRegistry};

/// Artificial variables with an absolute value above this are considered nonzero.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-9;

/// The state at the start of an iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSnapshot {
    /// Iteration number, starting at 1.
    pub iteration: usize,
    /// Independent copy of the tableau.
    pub tableau: Tableau,
    /// Basic column for each constraint row.
    pub basis: Vec<usize>,
    /// Objective value of the basic solution, in the direction of the problem.
    pub objective_value: f64,
}

impl IterationSnapshot {
    /// Values of the first `n` variables in the basic solution of this snapshot.
    pub fn point(&self, n: usize) -> Vec<f64> {
        let mut values = basic_solution(&self.tableau, &self.basis);
        values.truncate(n);
        values
    }
}

/// Outcome of a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionResult {
    /// Values of the decision variables.
    pub x: Vec<f64>,
    /// Objective value, in the direction of the problem.
    pub z: f64,
    /// One snapshot per iteration.
    pub history: Vec<IterationSnapshot>,
    /// The objective value of each snapshot.
    pub z_values: Vec<f64>,
    /// Values of all tableau variables, slack, surplus and artificial included.
    pub values: Vec<f64>,
    /// Final basic column for each constraint row.
    pub basis: Vec<usize>,
}

impl SolutionResult {
    /// Number of iterations, the last one included.
    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    /// The basic solution visited in each iteration, restricted to the decision variables.
    ///
    /// Together with `x`, this is the path taken by the algorithm.
    pub fn basic_points(&self) -> Vec<Vec<f64>> {
        self.history.iter()
            .map(|snapshot| snapshot.point(self.x.len()))
            .collect()
    }

    /// Value of a variable by its name.
    pub fn value_of(&self, variables: &VariableRegistry, name: &str) -> Option<f64> {
        variables.find(name).and_then(|column| self.values.get(column).copied())
    }
}

/// Values of all variables: right-hand side for basic variables, zero otherwise.
pub fn basic_solution(tableau: &Tableau, basis: &[usize]) -> Vec<f64> {
    let mut values = vec![0_f64; tableau.nr_variables()];
    for (i, &column) in basis.iter().enumerate() {
        values[column] = tableau.rhs(i + 1);
    }

    values
}

/// Objective value as seen by the caller, given the value of the maximized objective.
pub fn in_direction(objective: Objective, value: f64) -> f64 {
    // + 0 turns -0 into 0
    objective.sign() * value + 0_f64
}

/// Read the solution from a final tableau without checking it.
pub fn read(
    tableau: &Tableau,
    basis: &[usize],
    nr_decision_variables: usize,
    objective: Objective,
    history: Vec<IterationSnapshot>,
    z_values: Vec<f64>,
) -> SolutionResult {
    let values = basic_solution(tableau, basis);

    SolutionResult {
        x: values[..nr_decision_variables].to_vec(),
        z: in_direction(objective, tableau.objective_value()),
        history,
        z_values,
        values,
        basis: basis.to_vec(),
    }
}

/// Read the solution from an optimal tableau.
///
/// # Return value
///
/// The solution, or an error naming the first artificial variable that is not zero.
pub fn extract(
    tableau: &Tableau,
    basis: &[usize],
    variables: &VariableRegistry,
    artificial_columns: &[usize],
    objective: Objective,
    history: Vec<IterationSnapshot>,
    z_values: Vec<f64>,
) -> Result<SolutionResult, InfeasibleProblemError> {
    let nr_decision_variables = variables.count(VariableKind::Decision);
    let result = read(tableau, basis, nr_decision_variables, objective, history, z_values);

    match artificial_columns.iter().find(|&&column| result.values[column].abs() > FEASIBILITY_TOLERANCE) {
        Some(&column) => Err(InfeasibleProblemError {
            variable: variables.name(column).to_string(),
            column,
            value: result.values[column],
        }),
        None => Ok(result),
    }
}
