//! Summary configuration
//!
//! Controls how `summary()` results are rounded. Individual analyzer
//! operations always return unrounded values.
//!
//! A configuration can be built in code or read from a TOML document:
//!
//! ```toml
//! precision = 3
//! cv_precision = 1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest number of decimal places accepted by the configuration.
pub const MAX_PRECISION: u32 = 15;

/// Rounding settings applied when assembling summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Decimal places for real-valued summary fields
    pub precision: u32,
    /// Decimal places for the coefficient of variation
    pub cv_precision: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            precision: 4,
            cv_precision: 2,
        }
    }
}

impl AnalysisConfig {
    /// Creates a builder starting from the defaults
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Parses a TOML document; missing keys keep their default values
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: AnalysisConfig = toml::from_str(source)?;
        config.validate()?;
        log::debug!("loaded analysis config: {:?}", config);
        Ok(config)
    }

    /// Checks that both precisions are within `MAX_PRECISION`
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(Error::Config(format!(
                "precision {} exceeds the maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        if self.cv_precision > MAX_PRECISION {
            return Err(Error::Config(format!(
                "cv_precision {} exceeds the maximum of {}",
                self.cv_precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

/// Builder for AnalysisConfig
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        AnalysisConfigBuilder {
            config: AnalysisConfig::default(),
        }
    }

    /// Sets the decimal places for real-valued fields
    pub fn precision(mut self, decimals: u32) -> Self {
        self.config.precision = decimals;
        self
    }

    /// Sets the decimal places for the coefficient of variation
    pub fn cv_precision(mut self, decimals: u32) -> Self {
        self.config.cv_precision = decimals;
        self
    }

    /// Builds the config, rejecting out-of-range precisions
    pub fn build(self) -> Result<AnalysisConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
