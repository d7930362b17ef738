//! # Observing a solve
//!
//! The solver reports its progress to an `Observer`, once after the initial tableau is built and
//! once per iteration. Observers only see the state, they can't change it: a solve gives the same
//! result regardless of the observer used.
use tracing::debug;

use crate::algorithm::big_m::tableau::Tableau;
use crate::data::linear_program::variable::VariableRegistry;

/// Receives the intermediate tableaus of a solve, e.g. to present them to a user.
///
/// All methods default to doing nothing.
pub trait Observer {
    /// Called once, with the initial tableau.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau with the objective row expressed relative to the initial basis.
    /// * `variables`: Names of the tableau columns.
    /// * `basis`: Basic column for each constraint row.
    fn on_tableau(&mut self, tableau: &Tableau, variables: &VariableRegistry, basis: &[usize]) {
        let _ = (tableau, variables, basis);
    }

    /// Called once per iteration, before pivoting.
    ///
    /// # Arguments
    ///
    /// * `iteration`: Iteration number, starting at 1.
    /// * `entering`: Name of the entering variable, `None` if the tableau is optimal.
    /// * `leaving`: Name of the leaving variable, `None` if the tableau is optimal.
    /// * `tableau`: Tableau before the pivot of this iteration.
    /// * `variables`: Names of the tableau columns.
    /// * `basis`: Basic column for each constraint row, before the pivot.
    fn on_iteration(
        &mut self,
        iteration: usize,
        entering: Option<&str>,
        leaving: Option<&str>,
        tableau: &Tableau,
        variables: &VariableRegistry,
        basis: &[usize],
    ) {
        let _ = (iteration, entering, leaving, tableau, variables, basis);
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_tableau(&mut self, tableau: &Tableau, variables: &VariableRegistry, basis: &[usize]) {
        (**self).on_tableau(tableau, variables, basis);
    }

    fn on_iteration(
        &mut self,
        iteration: usize,
        entering: Option<&str>,
        leaving: Option<&str>,
        tableau: &Tableau,
        variables: &VariableRegistry,
        basis: &[usize],
    ) {
        (**self).on_iteration(iteration, entering, leaving, tableau, variables, basis);
    }
}

/// Ignores everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoOp;

impl Observer for NoOp {}

/// Renders every tableau as a `debug` event.
#[derive(Debug, Default, Copy, Clone)]
pub struct Log;

impl Observer for Log {
    fn on_tableau(&mut self, tableau: &Tableau, variables: &VariableRegistry, basis: &[usize]) {
        debug!("initial tableau\n{}", tableau.display(variables, basis));
    }

    fn on_iteration(
        &mut self,
        iteration: usize,
        entering: Option<&str>,
        leaving: Option<&str>,
        tableau: &Tableau,
        variables: &VariableRegistry,
        basis: &[usize],
    ) {
        debug!(
            iteration,
            entering = entering.unwrap_or("-"),
            leaving = leaving.unwrap_or("-"),
            "tableau\n{}",
            tableau.display(variables, basis)
        );
    }
}
