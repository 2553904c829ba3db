/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A sweep changed no component by more than the tolerance.
    Converged,

    /// Reached the sweep limit without converging.
    MaxIters,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a relaxation solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The final iterate.
    pub x: Vec<f64>,

    /// Number of sweeps performed.
    pub iters: usize,

    /// Step error of the last sweep, or `0.0` if no sweep ran.
    pub error: f64,
}

impl Solution {
    /// Returns `true` if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
