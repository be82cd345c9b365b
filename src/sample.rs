//! Sample container and the contracts shared by every analyzer
//!
//! A [`Sample`] is the immutable, non-empty sequence of observations an
//! analyzer works on. [`SampleContainer`] exposes it read-only and
//! [`Summarizable`] is implemented by every analyzer that can assemble a
//! structured summary of named metrics.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};

/// A raw observation whose type is not known up front
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Observation {
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value, coerces to 1.0 / 0.0
    Bool(bool),
    /// Free text, coerces only if it parses as a number
    Text(String),
}

impl Observation {
    /// Attempts to coerce the observation to a finite real number
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Observation::Int(v) => *v as f64,
            Observation::Float(v) => *v,
            Observation::Bool(true) => 1.0,
            Observation::Bool(false) => 0.0,
            Observation::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if value.is_finite() {
            Some(value)
        } else {
            None
        }
    }

    /// Whether the observation coerces to a finite real number
    pub fn is_numeric(&self) -> bool {
        self.to_f64().is_some()
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observation::Int(v) => write!(f, "{}", v),
            Observation::Float(v) => write!(f, "{}", v),
            Observation::Bool(v) => write!(f, "{}", v),
            Observation::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for Observation {
    fn from(v: i32) -> Self {
        Observation::Int(v as i64)
    }
}

impl From<i64> for Observation {
    fn from(v: i64) -> Self {
        Observation::Int(v)
    }
}

impl From<u32> for Observation {
    fn from(v: u32) -> Self {
        Observation::Int(v as i64)
    }
}

impl From<f32> for Observation {
    fn from(v: f32) -> Self {
        Observation::Float(v as f64)
    }
}

impl From<f64> for Observation {
    fn from(v: f64) -> Self {
        Observation::Float(v)
    }
}

impl From<bool> for Observation {
    fn from(v: bool) -> Self {
        Observation::Bool(v)
    }
}

impl From<&str> for Observation {
    fn from(v: &str) -> Self {
        Observation::Text(v.to_string())
    }
}

impl From<String> for Observation {
    fn from(v: String) -> Self {
        Observation::Text(v)
    }
}

/// Immutable, non-empty ordered sequence of observations
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    values: Vec<T>,
}

impl<T> Sample<T> {
    /// Wraps `values`, failing with `EmptyInput` when there are none
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput(
                "a sample needs at least one observation".into(),
            ));
        }
        Ok(Sample { values })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a constructed sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observations in their original order
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// Read-only access to the sample held by an analyzer
pub trait SampleContainer {
    /// Element type of the sample
    type Item;

    /// Observations in their original order
    fn raw_data(&self) -> &[Self::Item];

    /// Number of observations
    fn size(&self) -> usize {
        self.raw_data().len()
    }
}

impl<T> SampleContainer for Sample<T> {
    type Item = T;

    fn raw_data(&self) -> &[T] {
        &self.values
    }
}

/// Analyzers able to assemble a structured summary of named metrics
pub trait Summarizable {
    /// Structured summary type
    type Summary: Serialize;

    /// Builds the summary using the rounding settings of `config`
    fn summary_with(&self, config: &AnalysisConfig) -> Self::Summary;

    /// Builds the summary with the default rounding settings
    fn summary(&self) -> Self::Summary {
        self.summary_with(&AnalysisConfig::default())
    }

    /// Summary as a JSON object keyed by metric name
    fn summary_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.summary())?)
    }
}

/// Most frequent value(s) of a sample
///
/// Serializes tagged: `{"unique": v}`, `{"tied": [..]}` or `"no_mode"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeResult<T> {
    /// Exactly one value has the highest frequency
    Unique(T),
    /// Several values share the highest frequency
    Tied(Vec<T>),
    /// Every value occurs exactly once
    NoMode,
}

impl<T> ModeResult<T> {
    /// Whether a mode exists
    pub fn is_some(&self) -> bool {
        !matches!(self, ModeResult::NoMode)
    }

    /// The single mode, if there is exactly one
    pub fn unique(&self) -> Option<&T> {
        match self {
            ModeResult::Unique(v) => Some(v),
            _ => None,
        }
    }
}

/// Counts occurrences, keeping the order in which values first appear
pub(crate) fn count_in_order<T: Clone + Eq + Hash>(values: &[T]) -> Vec<(T, usize)> {
    let mut positions: HashMap<&T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.clone(), 1));
            }
        }
    }

    counts
}

/// Applies the shared mode policy to first-occurrence ordered counts
pub(crate) fn mode_from_counts<T: Clone>(counts: &[(T, usize)], n: usize) -> ModeResult<T> {
    let max_freq = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let mut modes: Vec<T> = counts
        .iter()
        .filter(|(_, c)| *c == max_freq)
        .map(|(v, _)| v.clone())
        .collect();

    if modes.len() == n {
        ModeResult::NoMode
    } else if modes.len() == 1 {
        ModeResult::Unique(modes.remove(0))
    } else {
        ModeResult::Tied(modes)
    }
}

/// Rounds half away from zero to `decimals` places
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rejects_empty() {
        let result = Sample::<f64>::new(vec![]);
        assert!(matches!(result, Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_sample_container() {
        let sample = Sample::new(vec![3, 1, 2]).unwrap();
        assert_eq!(sample.size(), 3);
        assert_eq!(sample.raw_data(), &[3, 1, 2]);
    }

    #[test]
    fn test_observation_coercion() {
        assert_eq!(Observation::from(3).to_f64(), Some(3.0));
        assert_eq!(Observation::from(2.5).to_f64(), Some(2.5));
        assert_eq!(Observation::from(true).to_f64(), Some(1.0));
        assert_eq!(Observation::from(" 7 ").to_f64(), Some(7.0));
        assert_eq!(Observation::from("1e3").to_f64(), Some(1000.0));
        assert_eq!(Observation::from("tres").to_f64(), None);
        assert_eq!(Observation::from("NaN").to_f64(), None);
        assert_eq!(Observation::from(f64::INFINITY).to_f64(), None);
    }

    #[test]
    fn test_count_in_order() {
        let counts = count_in_order(&["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_mode_policy() {
        assert_eq!(mode_from_counts(&[("a", 1), ("b", 1)], 2), ModeResult::NoMode);
        assert_eq!(
            mode_from_counts(&[("a", 2), ("b", 1)], 3),
            ModeResult::Unique("a")
        );
        assert_eq!(
            mode_from_counts(&[("a", 2), ("b", 2), ("c", 1)], 5),
            ModeResult::Tied(vec!["a", "b"])
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(23.60004, 4), 23.6);
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-1.23456, 3), -1.235);
    }

    #[test]
    fn test_mode_serialization() {
        let unique = serde_json::to_value(ModeResult::Unique(23.0)).unwrap();
        assert_eq!(unique, serde_json::json!({ "unique": 23.0 }));
        let tied = serde_json::to_value(ModeResult::Tied(vec!["a", "b"])).unwrap();
        assert_eq!(tied, serde_json::json!({ "tied": ["a", "b"] }));
        let none = serde_json::to_value(ModeResult::<f64>::NoMode).unwrap();
        assert_eq!(none, serde_json::json!("no_mode"));

        // a label spelled like the tag stays distinguishable
        let label = serde_json::to_value(ModeResult::Unique("no_mode")).unwrap();
        assert_ne!(label, none);
    }
}
