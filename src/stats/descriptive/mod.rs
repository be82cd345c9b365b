// Descriptive statistics for quantitative samples

use num_traits::ToPrimitive;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::sample::{
    count_in_order, mode_from_counts, round_to, ModeResult, Observation, Sample, SampleContainer,
    Summarizable,
};

/// Analyzer for numeric samples
///
/// Computes central tendency, dispersion, shape and order statistics.
/// The ascending-sorted copy of the sample is derived once, on first use,
/// and shared by every order statistic.
///
/// # Example
/// ```rust
/// use descstats::stats::QuantitativeAnalyzer;
///
/// let ages = QuantitativeAnalyzer::new(vec![22.0, 23.0, 21.0, 25.0, 24.0]).unwrap();
/// assert_eq!(ages.median(), 23.0);
/// assert_eq!(ages.percentile(100.0).unwrap(), 25.0);
/// ```
#[derive(Debug, Clone)]
pub struct QuantitativeAnalyzer {
    sample: Sample<f64>,
    sorted: OnceLock<Vec<f64>>,
}

/// Full summary produced by `QuantitativeAnalyzer::summary`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantitativeSummary {
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: ModeResult<f64>,
    /// Sample standard deviation
    pub standard_deviation: f64,
    /// Sample variance
    pub variance: f64,
    /// `None` when the mean is zero
    pub coefficient_of_variation: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub iqr: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Tukey's five-number summary, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl QuantitativeAnalyzer {
    /// Creates an analyzer; every value must be finite
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonNumericData(format!(
                "value at position {} is not a finite number: {}",
                pos, values[pos]
            )));
        }
        let sample = Sample::new(values)?;
        log::debug!("quantitative analyzer created with n={}", sample.len());

        Ok(QuantitativeAnalyzer {
            sample,
            sorted: OnceLock::new(),
        })
    }

    /// Creates an analyzer from any primitive numeric type
    pub fn from_numbers<T: ToPrimitive>(values: &[T]) -> Result<Self> {
        let mut converted = Vec::with_capacity(values.len());
        for (pos, value) in values.iter().enumerate() {
            match value.to_f64() {
                Some(v) => converted.push(v),
                None => {
                    return Err(Error::NonNumericData(format!(
                        "value at position {} cannot be represented as f64",
                        pos
                    )))
                }
            }
        }
        Self::new(converted)
    }

    /// Creates an analyzer by coercing raw observations to numbers
    pub fn from_observations(observations: &[Observation]) -> Result<Self> {
        let mut converted = Vec::with_capacity(observations.len());
        for (pos, obs) in observations.iter().enumerate() {
            match obs.to_f64() {
                Some(v) => converted.push(v),
                None => {
                    return Err(Error::NonNumericData(format!(
                        "value at position {} is not numeric: {:?}",
                        pos, obs
                    )))
                }
            }
        }
        Self::new(converted)
    }

    /// Sorted copy of the sample, computed on first access
    pub fn sorted_data(&self) -> &[f64] {
        self.sorted.get_or_init(|| {
            let mut sorted = self.sample.values().to_vec();
            sorted.sort_by(f64::total_cmp);
            sorted
        })
    }

    fn n(&self) -> f64 {
        self.sample.len() as f64
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        self.sample.values().iter().sum::<f64>() / self.n()
    }

    /// Median: middle order statistic, or the mean of the two middle ones
    pub fn median(&self) -> f64 {
        let sorted = self.sorted_data();
        let count = sorted.len();
        if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        }
    }

    /// Most frequent value(s); ties are reported in ascending order
    pub fn mode(&self) -> ModeResult<f64> {
        // -0.0 and 0.0 compare equal, so they share one key
        let keys: Vec<u64> = self
            .sample
            .values()
            .iter()
            .map(|&v| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
            .collect();
        let counts: Vec<(f64, usize)> = count_in_order(&keys)
            .into_iter()
            .map(|(bits, count)| (f64::from_bits(bits), count))
            .collect();

        match mode_from_counts(&counts, self.sample.len()) {
            ModeResult::Tied(mut values) => {
                values.sort_by(f64::total_cmp);
                ModeResult::Tied(values)
            }
            other => other,
        }
    }

    /// Variance; divides by n - 1 when `sample_mode`, by n otherwise
    ///
    /// A single observation has a sample variance of 0.
    pub fn variance(&self, sample_mode: bool) -> f64 {
        if self.is_constant() {
            return 0.0;
        }
        let count = self.sample.len();
        let mean = self.mean();
        let sum_squared_diff = self
            .sample
            .values()
            .iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f64>();

        if sample_mode {
            if count > 1 {
                sum_squared_diff / (count - 1) as f64
            } else {
                0.0
            }
        } else {
            sum_squared_diff / count as f64
        }
    }

    /// Unbiased sample variance (n - 1)
    pub fn sample_variance(&self) -> f64 {
        self.variance(true)
    }

    /// Population variance (n)
    pub fn population_variance(&self) -> f64 {
        self.variance(false)
    }

    /// Standard deviation; see `variance` for `sample_mode`
    pub fn standard_deviation(&self, sample_mode: bool) -> f64 {
        self.variance(sample_mode).sqrt()
    }

    /// Sample standard deviation
    pub fn sample_std_dev(&self) -> f64 {
        self.standard_deviation(true)
    }

    /// Population standard deviation
    pub fn population_std_dev(&self) -> f64 {
        self.standard_deviation(false)
    }

    /// Sample standard deviation relative to |mean|, as a percentage
    pub fn coefficient_of_variation(&self) -> Result<f64> {
        let mean = self.mean();
        if mean == 0.0 {
            return Err(Error::DegenerateInput(
                "coefficient of variation is undefined when the mean is 0".into(),
            ));
        }
        Ok(self.sample_std_dev() / mean.abs() * 100.0)
    }

    /// p-th percentile (0 to 100) by linear interpolation between order statistics
    pub fn percentile(&self, p: f64) -> Result<f64> {
        if !(0.0..=100.0).contains(&p) {
            return Err(Error::InvalidParameter(format!(
                "percentile must be between 0 and 100, got {}",
                p
            )));
        }
        Ok(percentile(self.sorted_data(), p))
    }

    /// First, second and third quartiles
    pub fn quartiles(&self) -> (f64, f64, f64) {
        let sorted = self.sorted_data();
        (
            percentile(sorted, 25.0),
            percentile(sorted, 50.0),
            percentile(sorted, 75.0),
        )
    }

    /// Q3 - Q1
    pub fn interquartile_range(&self) -> f64 {
        let (q1, _, q3) = self.quartiles();
        q3 - q1
    }

    /// Population standardized third moment; 0 for a constant sample
    pub fn skewness(&self) -> f64 {
        self.standardized_moment(3).unwrap_or(0.0)
    }

    /// Excess kurtosis (fourth standardized moment - 3); 0 for a constant sample
    pub fn kurtosis(&self) -> f64 {
        self.standardized_moment(4).map_or(0.0, |m| m - 3.0)
    }

    /// Whether every observation has the same value
    ///
    /// Compares the smallest and largest values; the computed variance of a
    /// constant such as 0.1 is not exactly 0.
    pub fn is_constant(&self) -> bool {
        let sorted = self.sorted_data();
        sorted[0] == sorted[sorted.len() - 1]
    }

    // None for a constant sample
    fn standardized_moment(&self, order: i32) -> Option<f64> {
        if self.is_constant() {
            return None;
        }
        let mean = self.mean();
        let std = self.population_std_dev();
        let moment = self
            .sample
            .values()
            .iter()
            .map(|&x| ((x - mean) / std).powi(order))
            .sum::<f64>()
            / self.n();
        Some(moment)
    }

    /// Smallest value
    pub fn min(&self) -> f64 {
        self.sorted_data()[0]
    }

    /// Largest value
    pub fn max(&self) -> f64 {
        let sorted = self.sorted_data();
        sorted[sorted.len() - 1]
    }

    /// max - min
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Minimum, quartiles and maximum, unrounded
    pub fn five_number_summary(&self) -> FiveNumberSummary {
        let (q1, median, q3) = self.quartiles();
        FiveNumberSummary {
            min: self.min(),
            q1,
            median,
            q3,
            max: self.max(),
        }
    }
}

impl SampleContainer for QuantitativeAnalyzer {
    type Item = f64;

    fn raw_data(&self) -> &[f64] {
        self.sample.values()
    }
}

impl Summarizable for QuantitativeAnalyzer {
    type Summary = QuantitativeSummary;

    fn summary_with(&self, config: &AnalysisConfig) -> QuantitativeSummary {
        let digits = config.precision;
        let (q1, q2, q3) = self.quartiles();

        let coefficient_of_variation = match self.coefficient_of_variation() {
            Ok(cv) => Some(round_to(cv, config.cv_precision)),
            Err(e) => {
                log::warn!("summary without coefficient of variation: {}", e);
                None
            }
        };

        QuantitativeSummary {
            n: self.sample.len(),
            mean: round_to(self.mean(), digits),
            median: round_to(self.median(), digits),
            mode: self.mode(),
            standard_deviation: round_to(self.sample_std_dev(), digits),
            variance: round_to(self.sample_variance(), digits),
            coefficient_of_variation,
            min: round_to(self.min(), digits),
            max: round_to(self.max(), digits),
            range: round_to(self.range(), digits),
            q1: round_to(q1, digits),
            q2: round_to(q2, digits),
            q3: round_to(q3, digits),
            iqr: round_to(q3 - q1, digits),
            skewness: round_to(self.skewness(), digits),
            kurtosis: round_to(self.kurtosis(), digits),
        }
    }
}

impl fmt::Display for QuantitativeAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuantitativeAnalyzer(n={})", self.sample.len())
    }
}

/// Percentile of already sorted, non-empty data; `p` must lie in [0, 100]
fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    let n = sorted_data.len();
    if p == 0.0 {
        return sorted_data[0];
    }
    if p == 100.0 {
        return sorted_data[n - 1];
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let frac = rank - lo as f64;

    if frac == 0.0 {
        return sorted_data[lo];
    }

    sorted_data[lo] + frac * (sorted_data[lo + 1] - sorted_data[lo])
}
