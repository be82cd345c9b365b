//! Analyzer selection for data of unknown type
//!
//! [`analyze`] picks a quantitative or a categorical analyzer. With the
//! `"auto"` hint the choice is made by trying to coerce every observation
//! to a number: if all of them coerce the data is quantitative, otherwise
//! it is categorical.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::sample::{Observation, SampleContainer, Summarizable};
use crate::stats::{
    CategoricalAnalyzer, CategoricalSummary, QuantitativeAnalyzer, QuantitativeSummary,
};

/// Type hint accepted by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataKind {
    /// Detect from the data
    #[default]
    Auto,
    /// Numeric data
    Quantitative,
    /// Discrete labels
    Categorical,
}

impl FromStr for DataKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DataKind::Auto),
            "quantitative" => Ok(DataKind::Quantitative),
            "categorical" => Ok(DataKind::Categorical),
            other => Err(Error::InvalidParameter(format!(
                "data kind must be 'auto', 'quantitative' or 'categorical', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataKind::Auto => "auto",
            DataKind::Quantitative => "quantitative",
            DataKind::Categorical => "categorical",
        };
        write!(f, "{}", name)
    }
}

/// Analyzer chosen by the dispatcher
#[derive(Debug, Clone)]
pub enum Analysis {
    Quantitative(QuantitativeAnalyzer),
    Categorical(CategoricalAnalyzer<String>),
}

/// Summary of whichever analyzer was chosen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    Quantitative(QuantitativeSummary),
    Categorical(CategoricalSummary<String>),
}

impl Analysis {
    /// Kind of analyzer that was selected; never `Auto`
    pub fn kind(&self) -> DataKind {
        match self {
            Analysis::Quantitative(_) => DataKind::Quantitative,
            Analysis::Categorical(_) => DataKind::Categorical,
        }
    }

    /// Number of observations
    pub fn size(&self) -> usize {
        match self {
            Analysis::Quantitative(a) => a.size(),
            Analysis::Categorical(a) => a.size(),
        }
    }

    /// The quantitative analyzer, if one was selected
    pub fn as_quantitative(&self) -> Option<&QuantitativeAnalyzer> {
        match self {
            Analysis::Quantitative(a) => Some(a),
            Analysis::Categorical(_) => None,
        }
    }

    /// The categorical analyzer, if one was selected
    pub fn as_categorical(&self) -> Option<&CategoricalAnalyzer<String>> {
        match self {
            Analysis::Categorical(a) => Some(a),
            Analysis::Quantitative(_) => None,
        }
    }
}

impl Summarizable for Analysis {
    type Summary = Summary;

    fn summary_with(&self, config: &AnalysisConfig) -> Summary {
        match self {
            Analysis::Quantitative(a) => Summary::Quantitative(a.summary_with(config)),
            Analysis::Categorical(a) => Summary::Categorical(a.summary_with(config)),
        }
    }
}

/// Builds the analyzer matching `kind` ("auto", "quantitative" or "categorical")
///
/// # Example
/// ```rust
/// use descstats::{analyze, DataKind, Observation};
///
/// let data: Vec<Observation> = vec!["A".into(), "B".into(), "A".into()];
/// let analysis = analyze(&data, "auto").unwrap();
/// assert_eq!(analysis.kind(), DataKind::Categorical);
/// ```
pub fn analyze(data: &[Observation], kind: &str) -> Result<Analysis> {
    analyze_with(data, kind.parse()?)
}

/// Same as [`analyze`] with an already parsed hint
pub fn analyze_with(data: &[Observation], kind: DataKind) -> Result<Analysis> {
    let resolved = match kind {
        DataKind::Auto => {
            if data.iter().all(Observation::is_numeric) {
                DataKind::Quantitative
            } else {
                DataKind::Categorical
            }
        }
        explicit => explicit,
    };
    log::debug!(
        "dispatching {} observations as {} (hint: {})",
        data.len(),
        resolved,
        kind
    );

    match resolved {
        DataKind::Categorical => {
            let labels = data.iter().map(|obs| obs.to_string()).collect();
            Ok(Analysis::Categorical(CategoricalAnalyzer::new(labels)?))
        }
        _ => Ok(Analysis::Quantitative(QuantitativeAnalyzer::from_observations(data)?)),
    }
}
