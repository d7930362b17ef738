use approx::assert_abs_diff_eq;

use bigm::{
    ConfigurationError,
    InfeasibleProblemError,
    Objective,
    ProblemDefinition,
    solve,
    SolveError,
    SolverConfig,
};
use bigm::algorithm::big_m::Solver;
use bigm::algorithm::big_m::tableau::is_basis;
use bigm::io::import;

use super::get_test_file_path;

#[test]
fn default_two_variable_problem() {
    let problem = ProblemDefinition::with_senses(
        vec![vec![1_f64, 1_f64], vec![2_f64, 3_f64]],
        vec![4_f64, 12_f64],
        vec![3_f64, 5_f64],
        &["<=", "<="],
        Objective::Maximize,
        SolverConfig::default(),
    ).unwrap();

    let result = solve(&problem).unwrap();
    assert_eq!(result.x, vec![0_f64, 4_f64]);
    assert_eq!(result.z, 20_f64);
    assert_eq!(result.z_values.len(), result.history.len());
}

#[test]
fn from_file() {
    let problem = import(&get_test_file_path("minimize_mixed")).unwrap();
    let result = solve(&problem).unwrap();

    assert_abs_diff_eq!(result.x[0], 1.5_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.x[1], 0.5_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.z, 2_f64, epsilon = 1e-9);
    // The objective decreases towards the minimum
    assert!(result.z_values.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(result.history.iter().all(|snapshot| is_basis(&snapshot.tableau, &snapshot.basis)));
}

#[test]
fn infeasible_from_file() {
    let problem = import(&get_test_file_path("infeasible")).unwrap();
    let result = solve(&problem);

    assert!(matches!(
        result,
        Err(SolveError::Infeasible(InfeasibleProblemError { ref variable, .. })) if variable == "a2"
    ));
}

#[test]
fn minimization_of_negated_cost_is_maximization() {
    let maximize = ProblemDefinition::with_senses(
        vec![vec![1_f64, 1_f64], vec![1_f64, 0_f64]],
        vec![10_f64, 2_f64],
        vec![2_f64, 3_f64],
        &["<=", ">="],
        Objective::Maximize,
        SolverConfig::default(),
    ).unwrap();
    let minimize = ProblemDefinition::with_senses(
        vec![vec![1_f64, 1_f64], vec![1_f64, 0_f64]],
        vec![10_f64, 2_f64],
        vec![-2_f64, -3_f64],
        &["<=", ">="],
        Objective::Minimize,
        SolverConfig::default(),
    ).unwrap();

    let maximized = solve(&maximize).unwrap();
    let minimized = solve(&minimize).unwrap();
    assert_eq!(maximized.x, minimized.x);
    assert!(maximized.history.iter().zip(&minimized.history).all(|(a, b)| a.tableau == b.tableau));
    assert_abs_diff_eq!(maximized.z, -minimized.z, epsilon = 1e-9);
}

#[test]
fn configuration_errors_surface_before_solving() {
    let result = ProblemDefinition::with_senses(
        vec![vec![1_f64, 1_f64]],
        vec![1_f64],
        vec![1_f64, 1_f64],
        &["!="],
        Objective::Maximize,
        SolverConfig::default(),
    );
    assert_eq!(result, Err(ConfigurationError::UnrecognizedSense { row: 0, sense: "!=".to_string() }));
}

#[test]
fn solver_state_is_inspectable() {
    let problem = import(&get_test_file_path("minimize_mixed")).unwrap();
    let solver = Solver::new(&problem).unwrap();

    assert_eq!(solver.variables().names(), vec!["x1", "x2", "s1", "e1", "a1", "a2"]);
    assert_eq!(solver.basis(), &[2, 4, 5]);
    assert_eq!(solver.tableau().nr_constraints(), 3);
    assert_eq!(solver.tableau().nr_variables(), 6);
}
