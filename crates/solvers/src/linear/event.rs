use super::Sweep;

/// Event emitted by the relaxation solvers.
///
/// [`Event::Start`] is emitted once with the initial guess. One
/// [`Event::Sweep`] follows for each completed sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// The initial iterate, before any sweep.
    Start {
        /// The initial guess.
        x: &'a [f64],
    },

    /// A completed sweep.
    Sweep {
        /// Sweep counter (1-based).
        iter: usize,

        /// The iterate after this sweep.
        x: &'a [f64],

        /// Largest absolute component change made by this sweep.
        error: f64,
    },
}

impl Event<'_> {
    /// Returns the iterate carried by this event.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        match self {
            Self::Start { x } | Self::Sweep { x, .. } => x,
        }
    }

    /// Returns the sweep counter, `0` for the start event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Start { .. } => 0,
            Self::Sweep { iter, .. } => *iter,
        }
    }

    /// Returns the step error, if a sweep has run.
    #[must_use]
    pub fn error(&self) -> Option<f64> {
        match self {
            Self::Start { .. } => None,
            Self::Sweep { error, .. } => Some(*error),
        }
    }

    /// Copies a sweep event into an owned [`Sweep`] record.
    #[must_use]
    pub fn to_sweep(&self) -> Option<Sweep> {
        match self {
            Self::Start { .. } => None,
            Self::Sweep { iter, x, error } => Some(Sweep {
                iter: *iter,
                x: x.to_vec(),
                error: *error,
            }),
        }
    }
}
