use std::{env, str::FromStr};

use thiserror::Error;

use crate::constants::{DEFAULT_MAX_STEPS, DEFAULT_RADIUS, MAX_RADIUS};
use crate::maze::Algorithm;

pub const RADIUS_VAR: &str = "MAZE_RADIUS";
pub const ALGORITHM_VAR: &str = "MAZE_ALGORITHM";
pub const SEED_VAR: &str = "MAZE_SEED";
pub const MAX_STEPS_VAR: &str = "MAZE_MAX_STEPS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub radius: usize,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,
    pub max_steps: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            algorithm: Algorithm::Backtrack,
            seed: None,
            max_steps: Some(DEFAULT_MAX_STEPS),
        }
    }
}

impl SolverConfig {
    /// Defaults overridden by a `.env` file, then by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(RADIUS_VAR) {
            config.radius =
                parse_radius(&value).map_err(|reason| invalid(RADIUS_VAR, &value, reason))?;
        }
        if let Some(value) = lookup(ALGORITHM_VAR) {
            config.algorithm = Algorithm::from_str(value.trim())
                .map_err(|e| invalid(ALGORITHM_VAR, &value, e.to_string()))?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            let seed = value
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| invalid(SEED_VAR, &value, e.to_string()))?;
            config.seed = Some(seed);
        }
        if let Some(value) = lookup(MAX_STEPS_VAR) {
            config.max_steps =
                parse_max_steps(&value).map_err(|reason| invalid(MAX_STEPS_VAR, &value, reason))?;
        }

        Ok(config)
    }
}

pub fn parse_radius(value: &str) -> Result<usize, String> {
    let radius: usize = value.trim().parse().map_err(|e| format!("{e}"))?;
    if radius == 0 || radius > MAX_RADIUS {
        return Err(format!("radius must be between 1 and {MAX_RADIUS}"));
    }
    Ok(radius)
}

/// `0` and `none` both mean no ceiling.
pub fn parse_max_steps(value: &str) -> Result<Option<usize>, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(e) => Err(format!("{e}")),
    }
}

fn invalid(var: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason,
    }
}
