//! # The Big-M method
//!
//! Artificial variables are added to `>=` and `=` rows so that a starting basis is available
//! immediately. Their cost `-M` (in the maximized objective) drives them out of the basis if the
//! problem is feasible. A single simplex phase then either finds an optimum, or proves the problem
//! unbounded.
//!
//! If an artificial variable is still nonzero at the optimum, the problem has no feasible point.
use tracing::{debug, info, warn};

use crate::algorithm::big_m::observer::{NoOp, Observer};
use crate::algorithm::big_m::solution::{extract, in_direction, IterationSnapshot, read, SolutionResult};
use crate::algorithm::big_m::strategy::pivot_rule::{MostNegativeCost, OPTIMALITY_TOLERANCE, PivotRule};
use crate::algorithm::big_m::tableau::{build, InitialTableau, is_basis, Tableau};
use crate::algorithm::error::{ConfigurationError, IterationLimitReached, SolveError, UnboundedProblemError};
use crate::data::linear_program::problem::ProblemDefinition;
use crate::data::linear_program::variable::VariableRegistry;

pub mod observer;
pub mod solution;
pub mod strategy;
pub mod tableau;


/// Solve a problem, without observing the iterations.
pub fn solve(problem: &ProblemDefinition) -> Result<SolutionResult, SolveError> {
    Solver::new(problem)?.solve()
}

/// Solve a problem, reporting every iteration to an observer.
pub fn solve_observed<O: Observer>(
    problem: &ProblemDefinition,
    observer: O,
) -> Result<SolutionResult, SolveError> {
    Solver::new(problem)?.solve_observed(observer)
}

/// Owns the state of a single solve.
///
/// The tableau and basis are created from the problem once, and then changed by exactly one pivot
/// per iteration until the solve ends.
#[derive(Debug)]
pub struct Solver<'a, PR = MostNegativeCost> {
    problem: &'a ProblemDefinition,
    tableau: Tableau,
    variables: VariableRegistry,
    basis: Vec<usize>,
    artificial_columns: Vec<usize>,
    rule: PR,
}

impl<'a> Solver<'a> {
    /// Build the initial tableau for a problem.
    pub fn new(problem: &'a ProblemDefinition) -> Result<Self, ConfigurationError> {
        Self::with_rule(problem, MostNegativeCost)
    }
}

impl<'a, PR: PivotRule> Solver<'a, PR> {
    /// Build the initial tableau for a problem, pivoting with a specific rule.
    pub fn with_rule(problem: &'a ProblemDefinition, rule: PR) -> Result<Self, ConfigurationError> {
        let InitialTableau { tableau, variables, basis, artificial_columns } = build(problem)?;

        Ok(Self { problem, tableau, variables, basis, artificial_columns, rule })
    }

    /// The current tableau.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Names of the tableau columns.
    pub fn variables(&self) -> &VariableRegistry {
        &self.variables
    }

    /// Basic column for each constraint row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Columns of the artificial variables.
    pub fn artificial_columns(&self) -> &[usize] {
        &self.artificial_columns
    }

    /// Iterate until optimal, unbounded, or out of iterations.
    pub fn solve(self) -> Result<SolutionResult, SolveError> {
        self.solve_observed(NoOp)
    }

    /// Iterate until optimal, unbounded, or out of iterations, reporting to an observer.
    ///
    /// Every iteration first records a snapshot of the tableau, and then either detects
    /// optimality, detects unboundedness, or pivots.
    ///
    /// # Return value
    ///
    /// The optimal solution, or why there is none. When the iteration cap is reached without
    /// reaching optimality, the last state is returned inside `SolveError::IterationLimit`.
    pub fn solve_observed<O: Observer>(mut self, mut observer: O) -> Result<SolutionResult, SolveError> {
        let objective = self.problem.objective();
        let cap = self.problem.config().iteration_cap;

        observer.on_tableau(&self.tableau, &self.variables, &self.basis);

        let mut history = Vec::new();
        let mut z_values = Vec::new();
        for iteration in 1..=cap {
            debug_assert!(is_basis(&self.tableau, &self.basis));

            let objective_value = in_direction(objective, self.tableau.objective_value());
            history.push(IterationSnapshot {
                iteration,
                tableau: self.tableau.clone(),
                basis: self.basis.clone(),
                objective_value,
            });
            z_values.push(objective_value);

            let Some(column) = self.rule.select_entering(&self.tableau) else {
                debug_assert!(self.tableau.objective_row().iter().all(|&cost| cost >= OPTIMALITY_TOLERANCE));
                observer.on_iteration(iteration, None, None, &self.tableau, &self.variables, &self.basis);

                let result = extract(
                    &self.tableau,
                    &self.basis,
                    &self.variables,
                    &self.artificial_columns,
                    objective,
                    history,
                    z_values,
                );
                return match result {
                    Ok(result) => {
                        info!(iterations = iteration, z = result.z, "optimal");
                        Ok(result)
                    },
                    Err(error) => {
                        info!(iterations = iteration, variable = %error.variable, "infeasible");
                        Err(error.into())
                    },
                };
            };
            let entering = self.variables.name(column);

            let Some(row) = self.rule.select_leaving(&self.tableau, column) else {
                info!(iteration, entering, "unbounded");
                return Err(UnboundedProblemError {
                    entering: entering.to_string(),
                    column,
                    history,
                }.into());
            };
            let leaving = self.variables.name(self.basis[row - 1]);

            debug!(iteration, entering, leaving, z = objective_value, "pivot");
            observer.on_iteration(
                iteration,
                Some(entering),
                Some(leaving),
                &self.tableau,
                &self.variables,
                &self.basis,
            );

            self.tableau.pivot(&mut self.basis, row, column);
        }

        warn!(cap, "iteration limit reached before optimality");
        let partial = read(
            &self.tableau,
            &self.basis,
            self.problem.nr_variables(),
            objective,
            history,
            z_values,
        );
        Err(IterationLimitReached { cap, partial: Box::new(partial) }.into())
    }
}
