use relax_core::Observer;
use relax_solvers::linear::Sweep;

use crate::traits::{HasIterate, HasStepError};

/// Keeps an owned copy of the initial guess and every sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    initial: Option<Vec<f64>>,
    sweeps: Vec<Sweep>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one event.
    pub fn record<E: HasIterate + HasStepError>(&mut self, event: &E) {
        match event.step_error() {
            None => self.initial = Some(event.iterate().to_vec()),
            Some(error) => self.sweeps.push(Sweep {
                iter: event.iter(),
                x: event.iterate().to_vec(),
                error,
            }),
        }
    }

    /// Returns the initial guess, if the start event was seen.
    #[must_use]
    pub fn initial(&self) -> Option<&[f64]> {
        self.initial.as_deref()
    }

    /// Returns the recorded sweeps in order.
    #[must_use]
    pub fn sweeps(&self) -> &[Sweep] {
        &self.sweeps
    }

    /// Returns the step error of each recorded sweep.
    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.sweeps.iter().map(|sweep| sweep.error)
    }

    #[must_use]
    pub fn into_sweeps(self) -> Vec<Sweep> {
        self.sweeps
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasIterate + HasStepError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
