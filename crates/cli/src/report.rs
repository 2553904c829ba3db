use std::io::{self, Write};

use relax_observers::{format_value, format_vector};
use relax_solvers::linear::{Solution, Status};

/// Writes the status line, the solution, and the residual.
///
/// Components are labelled from 1, as `x1 = …` and `r1 = …`.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    solution: &Solution,
    residual: &[f64],
    precision: Option<usize>,
) -> io::Result<()> {
    writeln!(out)?;
    match solution.status {
        Status::Converged => {
            writeln!(out, "Converged after {} iterations.", solution.iters)?;
        }
        Status::MaxIters | Status::StoppedByObserver => writeln!(
            out,
            "Stopped without converging after {} iterations (error = {}).",
            solution.iters,
            format_value(solution.error, precision),
        )?,
    }

    writeln!(out, "\nApproximate solution:")?;
    write_components(out, "x", &solution.x, precision)?;

    writeln!(out, "\nResidual vector:")?;
    write_components(out, "r", residual, precision)?;

    log::debug!("residual: {}", format_vector(residual, None));
    Ok(())
}

fn write_components<W: Write>(
    out: &mut W,
    label: &str,
    values: &[f64],
    precision: Option<usize>,
) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        writeln!(out, "{label}{} = {}", i + 1, format_value(*value, precision))?;
    }
    Ok(())
}
