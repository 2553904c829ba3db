use log::Level;
use relax_core::Observer;

use crate::{
    format::format_vector,
    traits::{HasIterate, HasStepError},
};

/// Emits every iterate through the [`log`] facade.
///
/// Sweeps are logged at the configured level (default [`Level::Info`]); the
/// initial guess one level lower. Records use the `relax::trace` target unless
/// another is given.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    target: &'static str,
    level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self {
            target: "relax::trace",
            level: Level::Info,
        }
    }
}

impl LogObserver {
    /// Creates a log observer with the default target and level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different log target.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// Logs sweeps at `level`.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs one event.
    pub fn record<E: HasIterate + HasStepError>(&self, event: &E) {
        match event.step_error() {
            None => {
                let level = quieter(self.level);
                if log::log_enabled!(target: self.target, level) {
                    log::log!(
                        target: self.target,
                        level,
                        "initial: {}",
                        format_vector(event.iterate(), None)
                    );
                }
            }
            Some(error) => {
                if log::log_enabled!(target: self.target, self.level) {
                    log::log!(
                        target: self.target,
                        self.level,
                        "iteration {}: {} | error = {error:e}",
                        event.iter(),
                        format_vector(event.iterate(), None)
                    );
                }
            }
        }
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIterate + HasStepError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

fn quieter(level: Level) -> Level {
    match level {
        Level::Error => Level::Warn,
        Level::Warn => Level::Info,
        Level::Info => Level::Debug,
        Level::Debug | Level::Trace => Level::Trace,
    }
}
