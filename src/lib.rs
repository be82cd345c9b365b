//! # descstats
//!
//! Descriptive statistics for in-memory samples:
//!
//! - [`stats::QuantitativeAnalyzer`]: location, dispersion, shape and
//!   percentiles of numeric data
//! - [`stats::CategoricalAnalyzer`]: frequency tables, Shannon entropy and
//!   the Gini-Simpson index of discrete labels
//! - [`stats::BivariateAnalyzer`]: covariance, Pearson correlation, R² and
//!   simple linear regression of paired numeric data
//! - [`analyze`]: picks the quantitative or categorical analyzer for data of
//!   unknown type
//!
//! Every analyzer holds an immutable, non-empty sample and implements
//! [`Summarizable`], which assembles all of its metrics into one
//! serializable summary.

pub mod analyze;
pub mod config;
pub mod error;
pub mod sample;
pub mod stats;

// Re-export commonly used types
pub use analyze::{analyze, analyze_with, Analysis, DataKind, Summary};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use error::{Error, Result};
pub use sample::{ModeResult, Observation, Sample, SampleContainer, Summarizable};
pub use stats::{BivariateAnalyzer, CategoricalAnalyzer, QuantitativeAnalyzer};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
