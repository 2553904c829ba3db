use std::{fs, path::Path};

use anyhow::Context;
use relax_core::{DimensionError, LinearSystem, Matrix};
use relax_solvers::linear::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// A problem instance: the system, the initial guess, and solver settings.
///
/// Field names follow the file format, so `A` and `maxIterations` are used
/// as written in TOML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProblemConfig {
    /// Coefficient matrix, one inner list per row.
    #[serde(rename = "A")]
    pub a: Vec<Vec<f64>>,

    /// Right-hand side.
    pub b: Vec<f64>,

    /// Initial guess.
    pub x0: Vec<f64>,

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Digits after the decimal point in the report; shortest form if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,

    /// Stop early once a sweep's step error exceeds this value or is not finite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divergence_ceiling: Option<f64>,
}

fn default_tolerance() -> f64 {
    Config::default().tolerance()
}

fn default_max_iterations() -> usize {
    Config::default().max_iters()
}

/// The built-in 5×5 demonstration problem.
impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            a: vec![
                vec![10.0, 4.0, -0.5, 1.0, 0.0],
                vec![0.0, -8.1, -2.0, 1.0, -3.0],
                vec![2.0, 4.0, -7.0, 0.0, 0.0],
                vec![-1.0, 2.0, -3.0, -10.0, 2.0],
                vec![2.0, 1.0, -1.0, 1.0, -7.0],
            ],
            b: vec![5.0, -2.0, 13.0, 4.0, 12.0],
            x0: vec![1.0, 1.0, 0.0, 1.0, 0.0],
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            precision: None,
            divergence_ceiling: None,
        }
    }
}

impl ProblemConfig {
    /// Loads a problem file, parsed as TOML for a `.toml` extension and as
    /// JSON otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml(&text)
        } else {
            Self::from_json(&text)
        }
        .with_context(|| format!("failed to parse {}", path.display()))?;

        log::info!("loaded {}x{} problem from {}", config.b.len(), config.b.len(), path.display());
        Ok(config)
    }

    /// Parses a problem from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid problem.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a problem from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid problem.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Renders the problem as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the linear system `A·x = b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `A` is not square or `b` does not match it.
    pub fn system(&self) -> Result<LinearSystem, DimensionError> {
        let a = Matrix::from_rows(&self.a)?;
        LinearSystem::new(a, self.b.clone())
    }

    /// Builds the solver settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance or iteration limit is invalid.
    pub fn solver_config(&self) -> Result<Config, ConfigError> {
        Config::new(self.tolerance, self.max_iterations)
    }
}
