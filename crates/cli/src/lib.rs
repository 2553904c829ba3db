//! Command-line driver for the Relax solvers.
//!
//! Loads a [`ProblemConfig`], solves it by Gauss-Seidel relaxation, and writes
//! a plain-text report:
//!
//! 1. the initial guess and one line per sweep,
//! 2. a status line,
//! 3. the approximate solution, one labelled component per line,
//! 4. the residual `b - A·x`, one labelled component per line.

pub mod cli;
pub mod config;

mod report;

pub use cli::Cli;
pub use config::ProblemConfig;

use std::{io::Write, process::ExitCode};

use anyhow::Context;
use relax_observers::{DivergenceGuard, LogObserver, TraceWriter};
use relax_solvers::linear::{Action, Event, Solution, Status, gauss_seidel};

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub solution: Solution,
    pub residual: Vec<f64>,
}

impl Outcome {
    /// Maps the solver status to a process exit code.
    ///
    /// Convergence exits with `0`; hitting the iteration limit or being
    /// stopped early exits with `2`.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self.solution.status {
            Status::Converged => ExitCode::SUCCESS,
            Status::MaxIters | Status::StoppedByObserver => ExitCode::from(2),
        }
    }
}

/// Solves `problem` and writes the full report to `out`.
///
/// # Errors
///
/// Returns an error if the problem is malformed (shape mismatch, zero
/// diagonal entry, invalid settings) or writing to `out` fails.
pub fn run<W: Write>(problem: &ProblemConfig, out: &mut W) -> anyhow::Result<Outcome> {
    let system = problem.system().context("invalid problem")?;
    let config = problem.solver_config().context("invalid solver settings")?;

    let mut trace = TraceWriter::new(&mut *out).with_precision(problem.precision);
    let log = LogObserver::new();
    let guard = problem.divergence_ceiling.map(DivergenceGuard::new);

    let solution = gauss_seidel::solve(
        &system,
        problem.x0.clone(),
        &config,
        |event: &Event<'_>| -> Option<Action> {
            trace.record(event);
            log.record(event);
            guard.as_ref().and_then(|guard| guard.check(event))
        },
    )
    .context("cannot solve problem")?;
    trace.finish().context("failed to write trace")?;

    let residual = system
        .residual(&solution.x)
        .context("solution does not match the system")?;
    report::write_report(out, &solution, &residual, problem.precision)
        .context("failed to write report")?;

    Ok(Outcome { solution, residual })
}
