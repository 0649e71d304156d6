use std::env;

use anyhow::{Context, Result};

use crate::engine::DEFAULT_THRESHOLD;

/// Environment variable holding the plagiarism threshold (a percentage).
pub const THRESHOLD_VAR: &str = "PLAGCHECK_THRESHOLD";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Similarity percentage at or above which a pair is flagged (default 70.0)
    pub threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_threshold_var(env::var(THRESHOLD_VAR).ok().as_deref())
    }

    /// Build a config from the raw value of `PLAGCHECK_THRESHOLD`, if set.
    ///
    /// Split out from `load` so it can be tested without touching the
    /// process environment.
    pub fn from_threshold_var(raw: Option<&str>) -> Result<Self> {
        let threshold = match raw.map(str::trim) {
            None | Some("") => DEFAULT_THRESHOLD,
            Some(value) => value
                .parse::<f64>()
                .with_context(|| format!("{THRESHOLD_VAR} must be a number, got {value:?}"))?,
        };
        let config = Self { threshold };
        config.validate()?;
        Ok(config)
    }

    /// Replace the threshold with a command-line override, if one was given.
    pub fn with_threshold(mut self, threshold: Option<f64>) -> Result<Self> {
        if let Some(threshold) = threshold {
            self.threshold = threshold;
            self.validate()?;
        }
        Ok(self)
    }

    /// Check that the threshold is a percentage.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            anyhow::bail!(
                "Threshold must be between 0 and 100, got {}.\n\
                 Set {THRESHOLD_VAR} or pass --threshold with a percentage.",
                self.threshold
            );
        }
        Ok(())
    }
}
