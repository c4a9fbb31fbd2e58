// Engine configuration: n-gram length, inclusion threshold, active
// measures and scan options. Fixed at engine construction.

use serde::{Deserialize, Serialize};

use crate::similarity::{MeasureKind, WeightedMeasure};

/// Default n-gram length.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Default inclusion threshold: a measure scoring below this has its
/// opinion discarded for that candidate.
pub const DEFAULT_INCLUSION_THRESHOLD: f64 = 0.7;

/// Error type for invalid engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("n-gram size must be at least 1")]
    ZeroNGramSize,

    #[error("inclusion threshold must be in [0, 1), got {0}")]
    InvalidThreshold(f64),

    #[error("at least one similarity measure must be configured")]
    NoMeasures,

    #[error("weight for {kind} must be finite and positive, got {weight}")]
    InvalidWeight { kind: MeasureKind, weight: f64 },

    #[error("worker thread count must be at least 1")]
    ZeroWorkerThreads,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One active measure and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasureConfig {
    pub kind: MeasureKind,
    /// Falls back to [`MeasureKind::default_weight`] when omitted.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl MeasureConfig {
    pub fn new(kind: MeasureKind, weight: f64) -> Self {
        Self {
            kind,
            weight: Some(weight),
        }
    }

    pub fn with_default_weight(kind: MeasureKind) -> Self {
        Self { kind, weight: None }
    }

    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or_else(|| self.kind.default_weight())
    }

    pub fn build(&self) -> WeightedMeasure {
        WeightedMeasure::new(self.kind.build(), self.effective_weight())
    }
}

/// The default active set: Damerau-Levenshtein, Metaphone, Soundex and
/// Jaro-Winkler, each with its default weight.
pub fn default_measures() -> Vec<MeasureConfig> {
    [
        MeasureKind::DamerauLevenshtein,
        MeasureKind::Metaphone,
        MeasureKind::Soundex,
        MeasureKind::JaroWinkler,
    ]
    .into_iter()
    .map(MeasureConfig::with_default_weight)
    .collect()
}

/// The alternative active set using the plain edit-distance measure in
/// place of Damerau-Levenshtein.
pub fn levenshtein_measures() -> Vec<MeasureConfig> {
    [
        MeasureKind::Levenshtein,
        MeasureKind::Metaphone,
        MeasureKind::Soundex,
        MeasureKind::JaroWinkler,
    ]
    .into_iter()
    .map(MeasureConfig::with_default_weight)
    .collect()
}

/// Suggestion engine configuration.
///
/// Deserializes from partial documents; missing fields take their defaults:
///
/// ```json
/// { "ngram_size": 3, "measures": [{ "kind": "levenshtein", "weight": 0.8 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Length of the character n-grams used for Jaccard scoring.
    pub ngram_size: usize,
    /// Minimum raw score for a measure to take part in a candidate's score.
    pub inclusion_threshold: f64,
    /// Active measures, in evaluation order.
    pub measures: Vec<MeasureConfig>,
    /// Skip candidates whose edit distance from the query exceeds this.
    pub max_edit_distance: Option<usize>,
    /// Run scans on a dedicated pool of this many threads instead of the
    /// global rayon pool.
    pub worker_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            inclusion_threshold: DEFAULT_INCLUSION_THRESHOLD,
            measures: default_measures(),
            max_edit_distance: None,
            worker_threads: None,
        }
    }
}

impl EngineConfig {
    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    pub fn with_inclusion_threshold(mut self, threshold: f64) -> Self {
        self.inclusion_threshold = threshold;
        self
    }

    pub fn with_measures(mut self, measures: Vec<MeasureConfig>) -> Self {
        self.measures = measures;
        self
    }

    pub fn with_max_edit_distance(mut self, max_edit_distance: Option<usize>) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }

    pub fn with_worker_threads(mut self, worker_threads: Option<usize>) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ngram_size == 0 {
            return Err(ConfigError::ZeroNGramSize);
        }
        if !(0.0..1.0).contains(&self.inclusion_threshold) {
            return Err(ConfigError::InvalidThreshold(self.inclusion_threshold));
        }
        if self.measures.is_empty() {
            return Err(ConfigError::NoMeasures);
        }
        for measure in &self.measures {
            let weight = measure.effective_weight();
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    kind: measure.kind,
                    weight,
                });
            }
        }
        if self.worker_threads == Some(0) {
            return Err(ConfigError::ZeroWorkerThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.inclusion_threshold, 0.7);
        assert_eq!(config.measures.len(), 4);
        assert_eq!(config.measures[0].kind, MeasureKind::DamerauLevenshtein);
    }

    #[test]
    fn default_weights() {
        let weights: Vec<f64> = default_measures()
            .iter()
            .map(MeasureConfig::effective_weight)
            .collect();
        assert_eq!(weights, [0.9, 0.5, 0.7, 0.9]);
        assert_eq!(levenshtein_measures()[0].effective_weight(), 0.8);
    }

    #[test]
    fn rejects_zero_ngram_size() {
        let config = EngineConfig::default().with_ngram_size(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroNGramSize)));
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        for threshold in [1.0, 1.5, -0.1, f64::NAN] {
            let config = EngineConfig::default().with_inclusion_threshold(threshold);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidThreshold(_))),
                "{threshold}"
            );
        }
        let config = EngineConfig::default().with_inclusion_threshold(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_measure_set() {
        let config = EngineConfig::default().with_measures(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::NoMeasures)));
    }

    #[test]
    fn rejects_bad_weights() {
        for weight in [0.0, -1.0, f64::INFINITY] {
            let config = EngineConfig::default()
                .with_measures(vec![MeasureConfig::new(MeasureKind::Soundex, weight)]);
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidWeight {
                        kind: MeasureKind::Soundex,
                        ..
                    })
                ),
                "{weight}"
            );
        }
    }

    #[test]
    fn rejects_zero_worker_threads() {
        let config = EngineConfig::default().with_worker_threads(Some(0));
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWorkerThreads)));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "ngram_size": 3, "max_edit_distance": 2 }"#).unwrap();
        assert_eq!(config.ngram_size, 3);
        assert_eq!(config.max_edit_distance, Some(2));
        assert_eq!(config.inclusion_threshold, DEFAULT_INCLUSION_THRESHOLD);
        assert_eq!(config.measures, default_measures());
    }

    #[test]
    fn json_measures_with_and_without_weights() {
        let config: EngineConfig = serde_json::from_str(
            r#"{ "measures": [
                { "kind": "levenshtein" },
                { "kind": "metaphone", "weight": 0.65 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(config.measures[0].effective_weight(), 0.8);
        assert_eq!(config.measures[1].effective_weight(), 0.65);
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let result: Result<EngineConfig, _> = serde_json::from_str(r#"{ "ngram": 3 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ConfigError::InvalidWeight {
            kind: MeasureKind::JaroWinkler,
            weight: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "weight for jaro_winkler must be finite and positive, got -1"
        );
    }
}
