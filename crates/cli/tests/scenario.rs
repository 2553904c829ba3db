use approx::assert_relative_eq;

use relax_cli::{ProblemConfig, run};
use relax_core::inf_norm;
use relax_solvers::linear::Status;

fn run_to_string(problem: &ProblemConfig) -> (relax_cli::Outcome, String) {
    let mut out = Vec::new();
    let outcome = run(problem, &mut out).expect("should run");
    (outcome, String::from_utf8(out).expect("utf-8"))
}

#[test]
fn built_in_scenario_converges() {
    let (outcome, _) = run_to_string(&ProblemConfig::default());

    assert_eq!(outcome.solution.status, Status::Converged);
    assert!(outcome.solution.iters < 1000);
    assert!(outcome.residual.iter().all(|r| r.abs() < 1e-2));
    assert_relative_eq!(outcome.solution.x[1], 1.058_221, epsilon = 1e-3);
}

#[test]
fn report_sections_appear_in_order() {
    let (outcome, text) = run_to_string(&ProblemConfig::default());
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "initial: 1 1 0 1 0");
    assert!(lines[1].starts_with("iteration 1: "));
    assert!(lines[1].contains(" | error = "));

    let sweeps = lines.iter().filter(|l| l.starts_with("iteration ")).count();
    assert_eq!(sweeps, outcome.solution.iters);

    let position = |needle: &str| {
        text.find(needle)
            .unwrap_or_else(|| panic!("missing `{needle}` in:\n{text}"))
    };
    let converged = position("Converged after 9 iterations.");
    let solution = position("Approximate solution:");
    let residual = position("Residual vector:");
    assert!(position(&format!("iteration {}: ", outcome.solution.iters)) < converged);
    assert!(converged < solution && solution < residual);

    for i in 1..=5 {
        assert!(position(&format!("x{i} = ")) < residual);
        assert!(position(&format!("r{i} = ")) > residual);
    }
}

#[test]
fn iteration_cap_is_reported() {
    let problem = ProblemConfig {
        tolerance: 1e-12,
        max_iterations: 3,
        precision: Some(4),
        ..ProblemConfig::default()
    };

    let (outcome, text) = run_to_string(&problem);

    assert_eq!(outcome.solution.status, Status::MaxIters);
    assert!(text.contains("Stopped without converging after 3 iterations"));
    assert!(text.starts_with("initial: 1.0000 1.0000 0.0000 1.0000 0.0000\n"));
    assert!(inf_norm(&outcome.residual) > 1e-12);
}

#[test]
fn divergence_ceiling_stops_run() {
    let problem = ProblemConfig {
        a: vec![vec![1.0, 3.0], vec![3.0, 1.0]],
        b: vec![1.0, 1.0],
        x0: vec![0.0, 0.0],
        divergence_ceiling: Some(100.0),
        ..ProblemConfig::default()
    };

    let (outcome, _) = run_to_string(&problem);

    assert_eq!(outcome.solution.status, Status::StoppedByObserver);
    assert_eq!(outcome.solution.iters, 3);
}

#[test]
fn zero_diagonal_is_an_error() {
    let problem = ProblemConfig {
        a: vec![vec![0.0, 1.0], vec![1.0, 2.0]],
        b: vec![1.0, 1.0],
        x0: vec![0.0, 0.0],
        ..ProblemConfig::default()
    };

    let err = run(&problem, &mut Vec::<u8>::new()).expect_err("zero pivot");

    assert_eq!(
        format!("{err:#}"),
        "cannot solve problem: zero diagonal entry in row 0"
    );
}

#[test]
fn mismatched_guess_is_an_error() {
    let problem = ProblemConfig {
        x0: vec![0.0; 4],
        ..ProblemConfig::default()
    };

    let err = run(&problem, &mut Vec::<u8>::new()).expect_err("bad x0");

    assert!(format!("{err:#}").contains("vector `x0` has 4 entries, expected 5"));
}

#[test]
fn empty_problem_converges_immediately() {
    let problem = ProblemConfig {
        a: vec![],
        b: vec![],
        x0: vec![],
        ..ProblemConfig::default()
    };

    let (outcome, text) = run_to_string(&problem);

    assert_eq!(outcome.solution.status, Status::Converged);
    assert_eq!(outcome.solution.iters, 0);
    assert!(outcome.residual.is_empty());
    assert!(text.starts_with("initial: \n\nConverged after 0 iterations."));
}
