//! # The Big-M tableau
//!
//! A dense `(m + 1) x (n_total + 1)` matrix. Row 0 holds the relative costs, rows `1..=m` the
//! constraints, and the last column the right-hand side.
//!
//! The engine always maximizes: a minimization problem has its cost negated, and artificial
//! variables get cost `-M`. Row 0 stores the negated cost relative to the current basis, so the
//! tableau is optimal once no entry of row 0 is negative.
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

use itertools::izip;
use tracing::trace;

use crate::algorithm::error::ConfigurationError;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::problem::ProblemDefinition;
use crate::data::linear_program::variable::{VariableKind, VariableRegistry};

/// Values closer than this to zero (or one) are treated as exactly zero (or one) when looking for
/// unit columns.
pub const UNIT_TOLERANCE: f64 = 1e-9;

/// Dense, row-major simplex tableau.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    /// `nr_rows * width` values.
    data: Vec<f64>,
    /// Number of rows, including the objective row.
    nr_rows: usize,
    /// Number of columns, including the right-hand side.
    width: usize,
}

impl Tableau {
    /// A tableau of zeros for `m` constraints over `n_total` variables.
    pub fn zeros(nr_constraints: usize, nr_variables: usize) -> Self {
        let nr_rows = nr_constraints + 1;
        let width = nr_variables + 1;

        Self { data: vec![0_f64; nr_rows * width], nr_rows, width }
    }

    /// Create a tableau from its rows.
    ///
    /// # Return value
    ///
    /// `None` if there are no rows, or if the rows are not all of the same length (at least two).
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let width = rows.first()?.len();
        if width < 2 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            data: rows.concat(),
            nr_rows: rows.len(),
            width,
        })
    }

    /// Number of constraint rows `m`.
    pub fn nr_constraints(&self) -> usize {
        self.nr_rows - 1
    }

    /// Number of variable columns `n_total`.
    pub fn nr_variables(&self) -> usize {
        self.width - 1
    }

    /// Index of the right-hand side column.
    pub fn rhs_column(&self) -> usize {
        self.width - 1
    }

    /// A full row, right-hand side included.
    pub fn row(&self, row: usize) -> &[f64] {
        debug_assert!(row < self.nr_rows);

        &self.data[row * self.width..(row + 1) * self.width]
    }

    fn row_mut(&mut self, row: usize) -> &mut [f64] {
        debug_assert!(row < self.nr_rows);

        &mut self.data[row * self.width..(row + 1) * self.width]
    }

    /// All rows, right-hand side included.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width)
    }

    /// Copy into a `Vec` of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Relative costs of all variables, without the right-hand side.
    pub fn objective_row(&self) -> &[f64] {
        &self.data[..self.width - 1]
    }

    /// Right-hand side of row 0: the value of the maximized objective in the current basis.
    pub fn objective_value(&self) -> f64 {
        self.data[self.width - 1]
    }

    /// Right-hand side of a tableau row.
    pub fn rhs(&self, row: usize) -> f64 {
        self[(row, self.rhs_column())]
    }

    /// Values of a column in the constraint rows `1..=m`.
    pub fn constraint_column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(column < self.width);

        (1..self.nr_rows).map(move |row| self[(row, column)])
    }

    /// Make `column` basic in tableau row `row` by Gauss-Jordan elimination.
    ///
    /// The pivot row is divided by the pivot element, and a multiple of it is subtracted from all
    /// other rows (the objective row included) such that the column becomes a unit column.
    ///
    /// # Arguments
    ///
    /// * `basis`: Basic column for each constraint row; entry `row - 1` is replaced by `column`.
    /// * `row`: Tableau row in `1..=m`.
    /// * `column`: Entering column.
    ///
    /// The caller guarantees that the pivot element is not (close to) zero.
    pub fn pivot(&mut self, basis: &mut [usize], row: usize, column: usize) {
        debug_assert!(row > 0 && row < self.nr_rows);
        debug_assert!(column < self.rhs_column());
        debug_assert_eq!(basis.len(), self.nr_constraints());

        let pivot = self[(row, column)];
        for value in self.row_mut(row) {
            *value /= pivot;
        }

        let pivot_row = self.row(row).to_vec();
        for (r, values) in self.data.chunks_exact_mut(self.width).enumerate() {
            if r == row {
                continue;
            }

            let factor = values[column];
            if factor != 0_f64 {
                for (value, pivot_value) in values.iter_mut().zip(&pivot_row) {
                    *value -= factor * pivot_value;
                }
            }
        }

        basis[row - 1] = column;
    }

    /// Subtract from row 0 a multiple of each basic row, such that basic columns have a zero
    /// relative cost.
    fn price_out(&mut self, basis: &[usize]) {
        for (i, &column) in basis.iter().enumerate() {
            let factor = self[(0, column)];
            if factor != 0_f64 {
                let basic_row = self.row(i + 1).to_vec();
                for (value, basic_value) in self.row_mut(0).iter_mut().zip(basic_row) {
                    *value -= factor * basic_value;
                }
            }
        }
    }

    /// Render with variable names and row labels.
    pub fn display<'a>(
        &'a self,
        variables: &'a VariableRegistry,
        basis: &'a [usize],
    ) -> TableauDisplay<'a> {
        TableauDisplay { tableau: self, variables, basis }
    }
}

impl Index<(usize, usize)> for Tableau {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.nr_rows && column < self.width);

        &self.data[row * self.width + column]
    }
}

impl IndexMut<(usize, usize)> for Tableau {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.nr_rows && column < self.width);

        &mut self.data[row * self.width + column]
    }
}

/// The (0-based) constraint row in which a column is a unit column.
///
/// A column is a unit column when, restricted to the constraint rows, it has exactly one value
/// that is not (close to) zero, and that value is (close to) one.
pub fn unit_column_row(tableau: &Tableau, column: usize) -> Option<usize> {
    let mut nonzeros = tableau.constraint_column(column)
        .enumerate()
        .filter(|&(_, value)| value.abs() > UNIT_TOLERANCE);

    match (nonzeros.next(), nonzeros.next()) {
        (Some((row, value)), None) if (value - 1_f64).abs() < UNIT_TOLERANCE => Some(row),
        _ => None,
    }
}

/// Find a basis consisting of unit columns.
///
/// When a constraint row has more than one unit column, the one with the highest index is used:
/// slack and artificial columns come after the decision variables.
///
/// # Return value
///
/// For each constraint row, the basic column.
pub fn find_unit_basis(tableau: &Tableau) -> Result<Vec<usize>, ConfigurationError> {
    let mut basis = vec![None; tableau.nr_constraints()];
    for column in 0..tableau.nr_variables() {
        if let Some(row) = unit_column_row(tableau, column) {
            basis[row] = Some(column);
        }
    }

    basis.into_iter()
        .enumerate()
        .map(|(row, column)| column.ok_or(ConfigurationError::NoInitialBasis { row }))
        .collect()
}

/// Whether each basic column is a unit column in its own row.
///
/// Only the constraint rows are considered.
pub fn is_basis(tableau: &Tableau, basis: &[usize]) -> bool {
    basis.len() == tableau.nr_constraints()
        && basis.iter().enumerate().all(|(row, &column)| {
            column < tableau.nr_variables()
                && tableau.constraint_column(column).enumerate().all(|(i, value)| {
                    let expected = if i == row { 1_f64 } else { 0_f64 };
                    (value - expected).abs() <= UNIT_TOLERANCE
                })
        })
}

/// The result of building a tableau for a problem.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialTableau {
    /// Tableau with the objective row expressed relative to `basis`.
    pub tableau: Tableau,
    /// Names and kinds of all columns.
    pub variables: VariableRegistry,
    /// Basic column for each constraint row.
    pub basis: Vec<usize>,
    /// Columns of all artificial variables, in increasing order.
    pub artificial_columns: Vec<usize>,
}

/// Build the augmented tableau for a problem.
///
/// Rows with a negative right-hand side are negated first (which flips `<=` and `>=`), such that
/// all initial basic values are nonnegative. Then, per row and in row order, a slack (`<=`), a
/// surplus followed by an artificial (`>=`) or an artificial (`=`) column is added.
pub fn build(problem: &ProblemDefinition) -> Result<InitialTableau, ConfigurationError> {
    let m = problem.nr_constraints();
    let n = problem.nr_variables();

    let rows = izip!(problem.A(), problem.b(), problem.senses())
        .map(|(coefficients, &rhs, &sense)| if rhs < 0_f64 {
            (coefficients.iter().map(|v| -v).collect::<Vec<_>>(), -rhs, sense.negated())
        } else {
            (coefficients.clone(), rhs, sense)
        })
        .collect::<Vec<_>>();

    // (row, column, coefficient) of each added column
    let mut variables = VariableRegistry::new(n);
    let mut added = Vec::with_capacity(2 * m);
    for (i, (_, _, sense)) in rows.iter().enumerate() {
        match sense {
            ConstraintType::Less => {
                added.push((i, variables.push(VariableKind::Slack), 1_f64));
            },
            ConstraintType::Greater => {
                added.push((i, variables.push(VariableKind::Surplus), -1_f64));
                added.push((i, variables.push(VariableKind::Artificial), 1_f64));
            },
            ConstraintType::Equal => {
                added.push((i, variables.push(VariableKind::Artificial), 1_f64));
            },
        }
    }
    let artificial_columns = variables.columns_of(VariableKind::Artificial).collect::<Vec<_>>();
    trace!(variables = ?variables.names(), "column layout");

    let mut tableau = Tableau::zeros(m, variables.len());
    let rhs_column = tableau.rhs_column();
    for (i, (coefficients, rhs, _)) in rows.iter().enumerate() {
        let row = tableau.row_mut(i + 1);
        row[..n].copy_from_slice(coefficients);
        row[rhs_column] = *rhs;
    }
    for (i, column, coefficient) in added {
        tableau[(i + 1, column)] = coefficient;
    }

    let sign = problem.objective().sign();
    for (j, &cost) in problem.c().iter().enumerate() {
        tableau[(0, j)] = -sign * cost;
    }
    for &column in &artificial_columns {
        tableau[(0, column)] = problem.config().big_m;
    }

    let basis = find_unit_basis(&tableau)?;
    tableau.price_out(&basis);
    debug_assert!(is_basis(&tableau, &basis));

    Ok(InitialTableau { tableau, variables, basis, artificial_columns })
}

/// A tableau together with the names needed to read it.
pub struct TableauDisplay<'a> {
    tableau: &'a Tableau,
    variables: &'a VariableRegistry,
    basis: &'a [usize],
}

impl Display for TableauDisplay<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let cells = self.tableau.rows()
            .map(|row| row.iter().map(|value| format!("{:.2}", value)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let labels = (0..self.tableau.nr_rows)
            .map(|row| match row {
                0 => "Z",
                _ => self.basis.get(row - 1)
                    .and_then(|&column| self.variables.get(column))
                    .map_or("?", |variable| variable.name.as_str()),
            })
            .collect::<Vec<_>>();
        let headers = self.variables.iter()
            .map(|variable| variable.name.as_str())
            .chain(Some("RHS"))
            .collect::<Vec<_>>();

        let label_width = labels.iter().map(|label| label.len()).max().unwrap_or(0).max("Basic".len());
        let widths = (0..self.tableau.width)
            .map(|j| {
                cells.iter()
                    .map(|row| row[j].len())
                    .chain(headers.get(j).map(|header| header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();

        write!(f, "{:>width$} |", "Basic", width = label_width)?;
        for (header, width) in headers.iter().zip(&widths) {
            write!(f, " {:>width$}", header, width = width)?;
        }
        writeln!(f)?;
        let total = widths.iter().map(|width| width + 1).sum::<usize>();
        writeln!(f, "{}+{}", "-".repeat(label_width + 1), "-".repeat(total))?;
        for (label, row) in labels.iter().zip(&cells) {
            write!(f, "{:>width$} |", label, width = label_width)?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, " {:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
