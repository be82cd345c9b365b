// descstats statistics module
//
// Descriptive statistics for quantitative samples, frequency and diversity
// measures for categorical samples, and correlation / simple linear
// regression for paired samples.

pub mod categorical;
pub mod descriptive;
pub mod regression;

pub use categorical::{CategoricalAnalyzer, CategoricalSummary, FrequencyRow};
pub use descriptive::{FiveNumberSummary, QuantitativeAnalyzer, QuantitativeSummary};
pub use regression::{BivariateAnalyzer, BivariateSummary, LinearRegression};

use crate::error::Result;
use crate::sample::Summarizable;

/// Computes the full summary of a numeric sample
///
/// # Example
/// ```rust
/// use descstats::stats;
///
/// let data = vec![22.0, 23.0, 21.0, 25.0, 24.0, 23.0, 22.0, 26.0];
/// let summary = stats::describe(&data).unwrap();
/// println!("mean: {}", summary.mean);
/// println!("sample standard deviation: {}", summary.standard_deviation);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<QuantitativeSummary> {
    Ok(QuantitativeAnalyzer::new(data.as_ref().to_vec())?.summary())
}

/// Sample covariance of two equally long numeric arrays
///
/// # Example
/// ```rust
/// use descstats::stats;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![2.0, 4.0, 5.0, 4.0, 5.0];
/// let cov = stats::covariance(&x, &y).unwrap();
/// assert!((cov - 1.5).abs() < 1e-10);
/// ```
pub fn covariance<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    Ok(paired(x, y)?.covariance(true))
}

/// Pearson correlation coefficient of two equally long numeric arrays
///
/// Fails with `DegenerateInput` when either array is constant.
///
/// # Example
/// ```rust
/// use descstats::stats;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
/// let corr = stats::correlation(&x, &y).unwrap();
/// assert!((corr - 1.0).abs() < 1e-10);
/// ```
pub fn correlation<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    paired(x, y)?.pearson_correlation()
}

/// Least-squares regression of `y` on `x`
///
/// # Example
/// ```rust
/// use descstats::stats;
///
/// let hours = vec![1.0, 2.0, 3.0, 4.0];
/// let scores = vec![52.0, 58.0, 63.0, 70.0];
/// let model = stats::linear_regression(&hours, &scores).unwrap();
/// println!("{}", model.equation);
/// println!("prediction at 6 hours: {}", model.predict(6.0));
/// ```
pub fn linear_regression<T: AsRef<[f64]>, U: AsRef<[f64]>>(
    x: T,
    y: U,
) -> Result<LinearRegression> {
    paired(x, y)?.simple_linear_regression()
}

fn paired<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<BivariateAnalyzer> {
    BivariateAnalyzer::new(x.as_ref().to_vec(), y.as_ref().to_vec())
}
