// Correlation and simple linear regression for paired samples

use serde::Serialize;
use std::fmt;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::sample::{round_to, Observation, Sample, SampleContainer, Summarizable};
use crate::stats::descriptive::QuantitativeAnalyzer;

/// Analyzer for the linear relationship between two numeric variables
///
/// `x[i]` is paired with `y[i]`; both sides must have the same length.
#[derive(Debug, Clone)]
pub struct BivariateAnalyzer {
    sample: Sample<(f64, f64)>,
}

/// Least-squares line `Y = intercept + slope * X`, rounded to 4 decimals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearRegression {
    pub intercept: f64,
    pub slope: f64,
    pub equation: String,
}

impl LinearRegression {
    /// Predicted Y for the given X
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Summary produced by `BivariateAnalyzer::summary`
///
/// Degenerate data (a constant variable) yields a single error field
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BivariateSummary {
    Complete {
        n: usize,
        covariance: f64,
        pearson_correlation: f64,
        r_squared: f64,
        linear_regression: LinearRegression,
    },
    Degenerate {
        error: String,
    },
}

impl BivariateSummary {
    /// Whether every metric could be computed
    pub fn is_complete(&self) -> bool {
        matches!(self, BivariateSummary::Complete { .. })
    }
}

impl BivariateAnalyzer {
    /// Pairs `x` with `y`; lengths must match and every value must be finite
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::SizeMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        for (name, values) in [("x", &x), ("y", &y)] {
            if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonNumericData(format!(
                    "{}[{}] is not a finite number: {}",
                    name, pos, values[pos]
                )));
            }
        }

        let sample = Sample::new(x.into_iter().zip(y).collect())?;
        log::debug!("bivariate analyzer created with n={}", sample.len());
        Ok(BivariateAnalyzer { sample })
    }

    /// Pairs two sequences of raw observations, coercing both to numbers
    pub fn from_observations(x: &[Observation], y: &[Observation]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::SizeMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let x = coerce("x", x)?;
        let y = coerce("y", y)?;
        Self::new(x, y)
    }

    fn n(&self) -> f64 {
        self.sample.len() as f64
    }

    /// X values in their original order
    pub fn x(&self) -> Vec<f64> {
        self.sample.values().iter().map(|&(x, _)| x).collect()
    }

    /// Y values in their original order
    pub fn y(&self) -> Vec<f64> {
        self.sample.values().iter().map(|&(_, y)| y).collect()
    }

    fn means(&self) -> (f64, f64) {
        let (sum_x, sum_y) = self
            .sample
            .values()
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        (sum_x / self.n(), sum_y / self.n())
    }

    // Σ(x - x̄)(y - ȳ)
    fn sum_cross_products(&self) -> f64 {
        let (mean_x, mean_y) = self.means();
        self.sample
            .values()
            .iter()
            .map(|&(x, y)| (x - mean_x) * (y - mean_y))
            .sum::<f64>()
    }

    /// Covariance; divides by n - 1 when `sample_mode`, by n otherwise
    ///
    /// A single pair has a sample covariance of 0.
    pub fn covariance(&self, sample_mode: bool) -> f64 {
        let count = self.sample.len();
        let sum = self.sum_cross_products();
        if sample_mode {
            if count > 1 {
                sum / (count - 1) as f64
            } else {
                0.0
            }
        } else {
            sum / count as f64
        }
    }

    /// Pearson correlation coefficient in [-1, 1]
    pub fn pearson_correlation(&self) -> Result<f64> {
        let x = QuantitativeAnalyzer::new(self.x())?;
        let y = QuantitativeAnalyzer::new(self.y())?;

        if x.is_constant() || y.is_constant() {
            return Err(Error::DegenerateInput(
                "correlation is undefined when a variable has zero standard deviation".into(),
            ));
        }

        // rounding can push |r| just past 1 for exactly linear data
        let r = self.covariance(true) / (x.sample_std_dev() * y.sample_std_dev());
        Ok(r.clamp(-1.0, 1.0))
    }

    /// Coefficient of determination, r²
    pub fn coefficient_of_determination(&self) -> Result<f64> {
        Ok(self.pearson_correlation()?.powi(2))
    }

    /// Least-squares fit of Y on X
    pub fn simple_linear_regression(&self) -> Result<LinearRegression> {
        let values = self.sample.values();
        let first_x = values[0].0;
        if values.iter().all(|&(x, _)| x == first_x) {
            return Err(Error::DegenerateInput(
                "regression is undefined when X has zero variance".into(),
            ));
        }

        let (mean_x, mean_y) = self.means();
        let numerator = self.sum_cross_products();
        let denominator = self
            .sample
            .values()
            .iter()
            .map(|&(x, _)| (x - mean_x).powi(2))
            .sum::<f64>();

        let slope = numerator / denominator;
        let intercept = mean_y - slope * mean_x;

        Ok(LinearRegression {
            intercept: round_to(intercept, 4),
            slope: round_to(slope, 4),
            equation: format!("Y = {:.4} + {:.4}*X", intercept, slope),
        })
    }
}

fn coerce(name: &str, observations: &[Observation]) -> Result<Vec<f64>> {
    observations
        .iter()
        .enumerate()
        .map(|(pos, obs)| {
            obs.to_f64().ok_or_else(|| {
                Error::NonNumericData(format!("{}[{}] is not numeric: {:?}", name, pos, obs))
            })
        })
        .collect()
}

impl SampleContainer for BivariateAnalyzer {
    type Item = (f64, f64);

    fn raw_data(&self) -> &[(f64, f64)] {
        self.sample.values()
    }
}

impl Summarizable for BivariateAnalyzer {
    type Summary = BivariateSummary;

    fn summary_with(&self, config: &AnalysisConfig) -> BivariateSummary {
        let digits = config.precision;
        let computed = self.simple_linear_regression().and_then(|regression| {
            let correlation = self.pearson_correlation()?;
            let r_squared = self.coefficient_of_determination()?;
            Ok((regression, correlation, r_squared))
        });

        match computed {
            Ok((linear_regression, correlation, r_squared)) => BivariateSummary::Complete {
                n: self.sample.len(),
                covariance: round_to(self.covariance(true), digits),
                pearson_correlation: round_to(correlation, digits),
                r_squared: round_to(r_squared, digits),
                linear_regression,
            },
            Err(e) => {
                log::warn!("bivariate summary degraded: {}", e);
                BivariateSummary::Degenerate {
                    error: e.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for BivariateAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BivariateAnalyzer(n={})", self.sample.len())
    }
}
