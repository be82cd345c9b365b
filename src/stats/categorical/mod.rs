// Frequency and diversity statistics for categorical samples

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::sample::{
    count_in_order, mode_from_counts, round_to, ModeResult, Sample, SampleContainer,
    Summarizable,
};

/// Analyzer for samples of discrete labels
///
/// Labels only need equality and hashing; no ordering is assumed. Whenever
/// a deterministic order is needed (unique categories, tied modes, table
/// ties) the order of first appearance in the sample is used.
///
/// # Example
/// ```rust
/// use descstats::stats::CategoricalAnalyzer;
/// use descstats::ModeResult;
///
/// let colors = CategoricalAnalyzer::new(vec!["red", "blue", "blue"]).unwrap();
/// assert_eq!(colors.mode(), ModeResult::Unique("blue"));
/// ```
#[derive(Debug, Clone)]
pub struct CategoricalAnalyzer<T> {
    sample: Sample<T>,
}

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow<T> {
    pub category: T,
    /// Number of occurrences
    pub absolute: usize,
    /// Share of the sample in [0, 1]
    pub relative: f64,
    /// Share of the sample in [0, 100]
    pub percentage: f64,
    /// Running total of `absolute` in table order
    pub cumulative: usize,
}

/// Full summary produced by `CategoricalAnalyzer::summary`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary<T> {
    pub n: usize,
    pub unique_categories: usize,
    pub mode: ModeResult<T>,
    /// Shannon entropy in bits
    pub entropy: f64,
    /// Gini-Simpson index
    pub simpson_index: f64,
    pub frequency_table: Vec<FrequencyRow<T>>,
}

impl<T> CategoricalAnalyzer<T>
where
    T: Clone + Eq + Hash,
{
    /// Creates an analyzer over any non-empty sequence of labels
    pub fn new(values: Vec<T>) -> Result<Self> {
        let sample = Sample::new(values)?;
        log::debug!("categorical analyzer created with n={}", sample.len());
        Ok(CategoricalAnalyzer { sample })
    }

    fn n(&self) -> f64 {
        self.sample.len() as f64
    }

    /// Distinct labels in order of first appearance
    pub fn unique_categories(&self) -> Vec<T> {
        count_in_order(self.sample.values())
            .into_iter()
            .map(|(category, _)| category)
            .collect()
    }

    /// Most frequent label(s); ties are reported in order of first appearance
    pub fn mode(&self) -> ModeResult<T> {
        mode_from_counts(&count_in_order(self.sample.values()), self.sample.len())
    }

    /// Label -> number of occurrences
    pub fn absolute_frequencies(&self) -> HashMap<T, usize> {
        count_in_order(self.sample.values()).into_iter().collect()
    }

    /// Label -> count / n
    pub fn relative_frequencies(&self) -> HashMap<T, f64> {
        let n = self.n();
        count_in_order(self.sample.values())
            .into_iter()
            .map(|(category, count)| (category, count as f64 / n))
            .collect()
    }

    /// Label -> count / n * 100
    pub fn percentage_frequencies(&self) -> HashMap<T, f64> {
        let n = self.n();
        count_in_order(self.sample.values())
            .into_iter()
            .map(|(category, count)| (category, count as f64 / n * 100.0))
            .collect()
    }

    /// Rows ordered by descending frequency, ties by first appearance
    pub fn frequency_table(&self) -> Vec<FrequencyRow<T>> {
        let n = self.n();
        let mut counts = count_in_order(self.sample.values());
        // stable sort keeps first-appearance order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut cumulative = 0;
        counts
            .into_iter()
            .map(|(category, absolute)| {
                cumulative += absolute;
                FrequencyRow {
                    category,
                    absolute,
                    relative: absolute as f64 / n,
                    percentage: absolute as f64 / n * 100.0,
                    cumulative,
                }
            })
            .collect()
    }

    /// Shannon entropy in bits: -sum(p * log2(p))
    pub fn entropy(&self) -> f64 {
        let n = self.n();
        let entropy = count_in_order(self.sample.values())
            .iter()
            .map(|(_, count)| *count as f64 / n)
            .filter(|&p| p > 0.0)
            .map(|p| -p * p.log2())
            .sum::<f64>();
        // a single category yields -0.0
        entropy.abs()
    }

    /// Gini-Simpson index: 1 - sum(p^2)
    pub fn simpson_diversity_index(&self) -> f64 {
        let n = self.n();
        let concentration = count_in_order(self.sample.values())
            .iter()
            .map(|(_, count)| (*count as f64 / n).powi(2))
            .sum::<f64>();
        1.0 - concentration
    }
}

impl<T> SampleContainer for CategoricalAnalyzer<T> {
    type Item = T;

    fn raw_data(&self) -> &[T] {
        self.sample.values()
    }
}

impl<T> Summarizable for CategoricalAnalyzer<T>
where
    T: Clone + Eq + Hash + Serialize,
{
    type Summary = CategoricalSummary<T>;

    fn summary_with(&self, config: &AnalysisConfig) -> CategoricalSummary<T> {
        let digits = config.precision;
        let frequency_table = self
            .frequency_table()
            .into_iter()
            .map(|row| FrequencyRow {
                relative: round_to(row.relative, digits),
                percentage: round_to(row.percentage, digits),
                ..row
            })
            .collect();

        CategoricalSummary {
            n: self.sample.len(),
            unique_categories: self.unique_categories().len(),
            mode: self.mode(),
            entropy: round_to(self.entropy(), digits),
            simpson_index: round_to(self.simpson_diversity_index(), digits),
            frequency_table,
        }
    }
}

impl<T> fmt::Display for CategoricalAnalyzer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoricalAnalyzer(n={})", self.sample.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn transport() -> CategoricalAnalyzer<&'static str> {
        CategoricalAnalyzer::new(vec![
            "car", "bus", "bike", "bus", "car", "metro", "bus", "bike", "car", "bus", "metro",
            "bus", "car", "bike", "bus", "metro", "bus",
        ])
        .unwrap()
    }

    #[test]
    fn test_unique_and_mode() {
        let t = transport();
        assert_eq!(t.unique_categories(), vec!["car", "bus", "bike", "metro"]);
        assert_eq!(t.mode(), ModeResult::Unique("bus"));
    }

    #[test]
    fn test_frequencies() {
        let t = transport();
        let abs = t.absolute_frequencies();
        assert_eq!(abs["bus"], 7);
        assert_eq!(abs["car"], 4);
        assert_eq!(abs["bike"], 3);
        assert_eq!(abs["metro"], 3);

        let rel = t.relative_frequencies();
        assert!((rel.values().sum::<f64>() - 1.0).abs() < 1e-12);
        let pct = t.percentage_frequencies();
        assert!((pct["bus"] - 700.0 / 17.0).abs() < 1e-10);
    }

    #[test]
    fn test_frequency_table_order() {
        let table = transport().frequency_table();
        let order: Vec<&str> = table.iter().map(|r| r.category).collect();
        // bike and metro tie at 3; bike appears first
        assert_eq!(order, vec!["bus", "car", "bike", "metro"]);
        let cumulative: Vec<usize> = table.iter().map(|r| r.cumulative).collect();
        assert_eq!(cumulative, vec![7, 11, 14, 17]);
    }

    #[test]
    fn test_single_category() {
        let a = CategoricalAnalyzer::new(vec!["A", "A", "A", "A"]).unwrap();
        assert_eq!(a.mode(), ModeResult::Unique("A"));
        assert_eq!(a.entropy(), 0.0);
        assert!(a.entropy().is_sign_positive());
        assert_eq!(a.simpson_diversity_index(), 0.0);
    }

    #[test]
    fn test_diversity_uniform() {
        let a = CategoricalAnalyzer::new(vec!['a', 'b', 'c', 'd']).unwrap();
        assert!((a.entropy() - 2.0).abs() < 1e-12);
        assert!((a.simpson_diversity_index() - 0.75).abs() < 1e-12);
        assert_eq!(a.mode(), ModeResult::NoMode);
    }

    #[test]
    fn test_tied_mode_first_appearance() {
        let a = CategoricalAnalyzer::new(vec!["z", "a", "a", "z", "m"]).unwrap();
        assert_eq!(a.mode(), ModeResult::Tied(vec!["z", "a"]));
    }

    #[test]
    fn test_empty() {
        let result = CategoricalAnalyzer::<String>::new(vec![]);
        assert!(matches!(result, Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_summary() {
        let summary = transport().summary();
        assert_eq!(summary.n, 17);
        assert_eq!(summary.unique_categories, 4);
        assert_eq!(summary.frequency_table[0].relative, 0.4118);
        assert_eq!(summary.frequency_table.last().unwrap().cumulative, 17);
        assert_eq!(transport().to_string(), "CategoricalAnalyzer(n=17)");
    }
}
