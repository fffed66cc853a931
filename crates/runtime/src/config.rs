//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use planner_content::ConfigLoader;
use planner_core::PlannerConfig;

use crate::error::{Result, RuntimeError};

/// Configuration required to bootstrap a planner.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    /// RON file providing the base planner configuration.
    pub config_path: Option<PathBuf>,
    /// Directory for log files; logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
    pub overrides: PlannerOverrides,
}

/// Individual parameters that take precedence over the configuration file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlannerOverrides {
    pub discount: Option<f64>,
    pub tolerance: Option<f64>,
    pub hazard_threshold: Option<usize>,
    pub edible_threshold: Option<u32>,
    pub max_iterations: Option<usize>,
}

impl PlannerOverrides {
    pub fn apply(&self, mut config: PlannerConfig) -> PlannerConfig {
        if let Some(discount) = self.discount {
            config.iteration.discount = discount;
        }
        if let Some(tolerance) = self.tolerance {
            config.iteration.tolerance = tolerance;
        }
        if let Some(threshold) = self.hazard_threshold {
            config.hazard_threshold = threshold;
        }
        if let Some(threshold) = self.edible_threshold {
            config.edible_threshold = threshold;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.iteration.max_iterations = max_iterations;
        }
        config
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MDP_CONFIG` - RON planner configuration file (default: built-in defaults)
    /// - `MDP_LOG_DIR` - Directory for log files (default: stderr)
    /// - `MDP_DISCOUNT` - Discount factor γ
    /// - `MDP_TOLERANCE` - Convergence tolerance ε
    /// - `MDP_HAZARD_THRESHOLD` - Hazard proximity in steps
    /// - `MDP_EDIBLE_THRESHOLD` - Timer above which adversaries are edible
    /// - `MDP_MAX_ITERATIONS` - Value iteration safety cap
    pub fn from_env() -> Self {
        Self {
            config_path: env::var("MDP_CONFIG").ok().map(PathBuf::from),
            log_dir: env::var("MDP_LOG_DIR").ok().map(PathBuf::from),
            overrides: PlannerOverrides {
                discount: read_env("MDP_DISCOUNT"),
                tolerance: read_env("MDP_TOLERANCE"),
                hazard_threshold: read_env("MDP_HAZARD_THRESHOLD"),
                edible_threshold: read_env("MDP_EDIBLE_THRESHOLD"),
                max_iterations: read_env("MDP_MAX_ITERATIONS"),
            },
        }
    }

    /// Resolves the planner configuration: file (or defaults), then overrides.
    pub fn planner_config(&self) -> Result<PlannerConfig> {
        let base = match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .map_err(|e| RuntimeError::ConfigLoad(format!("{e:#}")))?,
            None => PlannerConfig::default(),
        };

        let config = self.overrides.apply(base);
        config.validate().map_err(RuntimeError::InvalidConfig)?;
        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
