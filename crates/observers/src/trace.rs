use std::io::{self, Write};

use relax_core::Observer;

use crate::{
    format::{format_value, format_vector},
    traits::{HasIterate, HasStepError},
};

/// Renders every iterate as one line of text.
///
/// The initial guess is written as `initial: x0 x1 …` and each sweep as
/// `iteration k: x0 x1 … | error = e`.
///
/// The first I/O error stops further output and is returned by
/// [`TraceWriter::finish`]; it never interrupts the solver.
#[derive(Debug)]
pub struct TraceWriter<W> {
    out: W,
    precision: Option<usize>,
    failure: Option<io::Error>,
}

impl<W: Write> TraceWriter<W> {
    /// Creates a trace writer with shortest round-trip number formatting.
    pub fn new(out: W) -> Self {
        Self {
            out,
            precision: None,
            failure: None,
        }
    }

    /// Uses a fixed number of digits after the decimal point.
    #[must_use]
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Writes the line for one event.
    pub fn record<E: HasIterate + HasStepError>(&mut self, event: &E) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = self.write_event(event) {
            self.failure = Some(err);
        }
    }

    /// Flushes the output and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing, or any error from flushing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event<E: HasIterate + HasStepError>(&mut self, event: &E) -> io::Result<()> {
        let x = format_vector(event.iterate(), self.precision);
        match event.step_error() {
            None => writeln!(self.out, "initial: {x}"),
            Some(error) => writeln!(
                self.out,
                "iteration {}: {x} | error = {}",
                event.iter(),
                format_value(error, self.precision),
            ),
        }
    }
}

impl<E, A, W> Observer<E, A> for TraceWriter<W>
where
    E: HasIterate + HasStepError,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
