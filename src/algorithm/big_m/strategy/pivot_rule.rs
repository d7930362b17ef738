//! # Pivot rules
//!
//! Deciding which variable enters and which variable leaves the basis.
use crate::algorithm::big_m::tableau::Tableau;

/// Relative costs at or above this value count as nonnegative.
pub const OPTIMALITY_TOLERANCE: f64 = -1e-10;
/// Entering column coefficients need to exceed this value for their row to be eligible in the
/// ratio test.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule {
    /// Column selection.
    ///
    /// # Return value
    ///
    /// `None` if the tableau is optimal.
    fn select_entering(&self, tableau: &Tableau) -> Option<usize>;

    /// Row selection, for a column that was selected to enter.
    ///
    /// # Return value
    ///
    /// The tableau row (in `1..=m`) of the leaving variable, or `None` if no row limits the
    /// entering variable.
    fn select_leaving(&self, tableau: &Tableau, column: usize) -> Option<usize>;
}

/// Pivot on the column with the most negative relative cost, and the row with the smallest ratio.
///
/// Ties are broken by taking the lowest index, both for the column and for the row.
#[derive(Debug, Default, Copy, Clone)]
pub struct MostNegativeCost;

impl PivotRule for MostNegativeCost {
    fn select_entering(&self, tableau: &Tableau) -> Option<usize> {
        let costs = tableau.objective_row();
        if costs.iter().all(|&cost| cost >= OPTIMALITY_TOLERANCE) {
            return None;
        }

        let mut minimum = 0;
        for (column, &cost) in costs.iter().enumerate().skip(1) {
            if cost < costs[minimum] {
                minimum = column;
            }
        }

        Some(minimum)
    }

    fn select_leaving(&self, tableau: &Tableau, column: usize) -> Option<usize> {
        let rhs_column = tableau.rhs_column();
        let ratios = (1..=tableau.nr_constraints())
            .map(|row| {
                let coefficient = tableau[(row, column)];
                if coefficient > PIVOT_TOLERANCE {
                    tableau[(row, rhs_column)] / coefficient
                } else {
                    f64::INFINITY
                }
            })
            .collect::<Vec<_>>();

        if ratios.iter().all(|ratio| !ratio.is_finite()) {
            return None;
        }

        let mut minimum = 0;
        for (i, &ratio) in ratios.iter().enumerate().skip(1) {
            if ratio < ratios[minimum] {
                minimum = i;
            }
        }

        Some(minimum + 1)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::big_m::strategy::pivot_rule::{MostNegativeCost, PivotRule};
    use crate::algorithm::big_m::tableau::Tableau;

    fn tableau(rows: &[Vec<f64>]) -> Tableau {
        Tableau::from_rows(rows).unwrap()
    }

    #[test]
    fn entering_most_negative() {
        let t = tableau(&[
            vec![-3_f64, -5_f64, 0_f64, 0_f64, 0_f64],
            vec![1_f64, 1_f64, 1_f64, 0_f64, 4_f64],
            vec![2_f64, 3_f64, 0_f64, 1_f64, 12_f64],
        ]);
        assert_eq!(MostNegativeCost.select_entering(&t), Some(1));
    }

    #[test]
    fn entering_tie_takes_first() {
        let t = tableau(&[
            vec![0_f64, -2_f64, 1_f64, -2_f64, -7_f64],
            vec![1_f64, 1_f64, 1_f64, 1_f64, 4_f64],
        ]);
        assert_eq!(MostNegativeCost.select_entering(&t), Some(1));
    }

    #[test]
    fn entering_optimal() {
        let t = tableau(&[
            vec![2_f64, 0_f64, -1e-11, 0_f64, -20_f64],
            vec![1_f64, 1_f64, 1_f64, 0_f64, 4_f64],
        ]);
        // The right-hand side is not a relative cost
        assert_eq!(MostNegativeCost.select_entering(&t), None);
    }

    #[test]
    fn leaving_ratio_test() {
        let t = tableau(&[
            vec![-3_f64, -5_f64, 0_f64, 0_f64, 0_f64],
            vec![1_f64, 0_f64, 1_f64, 0_f64, 4_f64],
            vec![2_f64, 3_f64, 0_f64, 1_f64, 12_f64],
            vec![0_f64, 2_f64, 0_f64, 0_f64, 6_f64],
        ]);
        assert_eq!(MostNegativeCost.select_leaving(&t, 1), Some(3));
        assert_eq!(MostNegativeCost.select_leaving(&t, 0), Some(1));
    }

    #[test]
    fn leaving_tie_takes_first() {
        let t = tableau(&[
            vec![-3_f64, -5_f64, 0_f64, 0_f64, 0_f64],
            vec![1_f64, 1_f64, 1_f64, 0_f64, 4_f64],
            vec![2_f64, 3_f64, 0_f64, 1_f64, 12_f64],
        ]);
        assert_eq!(MostNegativeCost.select_leaving(&t, 1), Some(1));
    }

    #[test]
    fn leaving_ignores_small_and_negative_coefficients() {
        let t = tableau(&[
            vec![0_f64, -1_f64, 0_f64],
            vec![1_f64, -1_f64, 1_f64],
            vec![0_f64, 1e-11, 1_f64],
            vec![0_f64, 0.5_f64, 3_f64],
        ]);
        assert_eq!(MostNegativeCost.select_leaving(&t, 1), Some(3));
    }

    #[test]
    fn leaving_unbounded() {
        let t = tableau(&[
            vec![0_f64, -1_f64, 1_f64, 1_f64],
            vec![1_f64, -1_f64, 1_f64, 1_f64],
        ]);
        assert_eq!(MostNegativeCost.select_leaving(&t, 1), None);
    }
}
