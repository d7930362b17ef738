use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use bigm::{ConfigurationError, ProblemDefinition, SolveError, SolverConfig};
use bigm::algorithm::big_m::observer::{Log, Observer};
use bigm::algorithm::big_m::solve_observed;
use bigm::algorithm::big_m::tableau::Tableau;
use bigm::data::linear_program::elements::{ConstraintType, Objective};
use bigm::data::linear_program::variable::VariableRegistry;
use bigm::io::import;

/// Big-M Simplex solver, showing every tableau.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// JSON file containing the problem description; a built-in example is solved if absent
    problem_file: Option<PathBuf>,
    /// Built-in example to solve without a problem file
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=3))]
    example: u8,
    /// Minimize instead of maximize
    #[arg(long)]
    minimize: bool,
    /// Penalty for artificial variables
    #[arg(long)]
    big_m: Option<f64>,
    /// Maximum number of iterations
    #[arg(long)]
    iteration_cap: Option<usize>,
    /// Print the tableau of every iteration
    #[arg(short, long)]
    verbose: bool,
    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Copy, Clone, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

/// Writes every tableau to standard output.
struct Print;

impl Observer for Print {
    fn on_tableau(&mut self, tableau: &Tableau, variables: &VariableRegistry, basis: &[usize]) {
        println!("Initial tableau\n{}", tableau.display(variables, basis));
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
        match (entering, leaving) {
            (Some(entering), Some(leaving)) => {
                println!("Iteration {}: {} enters, {} leaves", iteration, entering, leaving);
            },
            _ => println!("Iteration {}: optimal", iteration),
        }
        println!("{}", tableau.display(variables, basis));
    }
}

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    match format {
        LogFormat::Json => fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).init(),
    }
}

fn example(size: u8) -> Result<ProblemDefinition, ConfigurationError> {
    let (a, b, c, senses) = if size == 3 {
        (
            vec![vec![1_f64, 2_f64, 1_f64], vec![3_f64, 1_f64, 2_f64], vec![2_f64, 3_f64, 1_f64]],
            vec![10_f64, 15_f64, 12_f64],
            vec![4_f64, 3_f64, 2_f64],
            vec![ConstraintType::Less; 3],
        )
    } else {
        (
            vec![vec![1_f64, 1_f64], vec![2_f64, 3_f64]],
            vec![4_f64, 12_f64],
            vec![3_f64, 5_f64],
            vec![ConstraintType::Less; 2],
        )
    };

    ProblemDefinition::new(a, b, c, senses, Objective::Maximize, SolverConfig::default())
}

fn main() {
    let opts: Opts = Opts::parse();
    init_logging(&opts.log_level, opts.log_format);

    let problem = match &opts.problem_file {
        Some(path) => {
            println!("Reading problem file: \"{}\"...", path.to_string_lossy());
            import(path).unwrap_or_else(|error| {
                error!(%error, "could not import problem");
                eprintln!("{}", error);
                exit(2);
            })
        },
        None => example(opts.example).unwrap_or_else(|error| {
            eprintln!("{}", error);
            exit(2);
        }),
    };

    let problem = if opts.minimize { problem.with_objective(Objective::Minimize) } else { problem };
    let config = SolverConfig {
        big_m: opts.big_m.unwrap_or(problem.config().big_m),
        iteration_cap: opts.iteration_cap.unwrap_or(problem.config().iteration_cap),
    };
    let problem = problem.with_config(config).unwrap_or_else(|error| {
        eprintln!("{}", error);
        exit(2);
    });

    let result = if opts.verbose {
        solve_observed(&problem, Print)
    } else {
        solve_observed(&problem, Log)
    };

    match result {
        Ok(solution) => {
            let x = solution.x.iter().map(|v| format!("{:.4}", v)).collect::<Vec<_>>();
            println!("Solution computed in {} iterations.", solution.iterations());
            println!("x = [ {} ]", x.join(", "));
            println!("Z = {:.4}", solution.z);
        },
        Err(error @ (SolveError::Infeasible(_) | SolveError::Unbounded(_))) => {
            println!("{}.", error);
            exit(1);
        },
        Err(SolveError::IterationLimit(error)) => {
            println!("{}; last Z = {:.4}", error, error.partial.z);
            exit(1);
        },
        Err(SolveError::Configuration(error)) => {
            eprintln!("{}", error);
            exit(2);
        },
    }
}
