use thiserror::Error;

/// Configuration for the relaxation solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a relaxation solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and strictly positive,
    /// or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the step tolerance.
    ///
    /// The solver converges once the largest component change of a sweep is
    /// strictly below this value.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of sweeps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
