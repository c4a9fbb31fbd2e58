// Similarity measures: score two words in [0, 1], each carrying a weight
// used when the engine combines them.
//
// Architecture:
//   - `edit`: Levenshtein and Damerau-Levenshtein based measures
//   - `alignment`: Jaro-Winkler string alignment
//   - `phonetic`: code-equality measure over a `PhoneticCoder`
//   - `soundex`, `metaphone`: the two phonetic codings

pub mod alignment;
pub mod edit;
pub mod metaphone;
pub mod phonetic;
pub mod soundex;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use alignment::JaroWinkler;
pub use edit::{DamerauLevenshtein, Levenshtein};
pub use metaphone::Metaphone;
pub use phonetic::{PhoneticCoder, PhoneticEquality};
pub use soundex::Soundex;

/// A pure scoring function over two words.
///
/// Implementations must accept empty strings and always return a finite
/// number. Measures are shared across scan workers, hence `Send + Sync`.
pub trait SimilarityMeasure: Send + Sync {
    /// Short stable name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Similarity of `a` and `b`, 1.0 meaning identical under this measure.
    fn score(&self, a: &str, b: &str) -> f64;
}

/// A measure together with its weight in the combined score.
pub struct WeightedMeasure {
    measure: Box<dyn SimilarityMeasure>,
    weight: f64,
}

impl WeightedMeasure {
    pub fn new(measure: Box<dyn SimilarityMeasure>, weight: f64) -> Self {
        Self { measure, weight }
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.measure.name()
    }

    #[inline]
    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.measure.score(a, b)
    }
}

impl fmt::Debug for WeightedMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedMeasure")
            .field("measure", &self.measure.name())
            .field("weight", &self.weight)
            .finish()
    }
}

/// The built-in measure variants, as named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureKind {
    Levenshtein,
    DamerauLevenshtein,
    Soundex,
    Metaphone,
    JaroWinkler,
}

impl MeasureKind {
    /// Instantiate the measure.
    pub fn build(self) -> Box<dyn SimilarityMeasure> {
        match self {
            MeasureKind::Levenshtein => Box::new(Levenshtein),
            MeasureKind::DamerauLevenshtein => Box::new(DamerauLevenshtein),
            MeasureKind::Soundex => Box::new(PhoneticEquality::new(Soundex)),
            MeasureKind::Metaphone => Box::new(PhoneticEquality::new(Metaphone::default())),
            MeasureKind::JaroWinkler => Box::new(JaroWinkler),
        }
    }

    /// Weight used when a configuration names the measure without one.
    pub fn default_weight(self) -> f64 {
        match self {
            MeasureKind::Levenshtein => 0.8,
            MeasureKind::DamerauLevenshtein => 0.9,
            MeasureKind::Soundex => 0.7,
            MeasureKind::Metaphone => 0.5,
            MeasureKind::JaroWinkler => 0.9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MeasureKind::Levenshtein => "levenshtein",
            MeasureKind::DamerauLevenshtein => "damerau_levenshtein",
            MeasureKind::Soundex => "soundex",
            MeasureKind::Metaphone => "metaphone",
            MeasureKind::JaroWinkler => "jaro_winkler",
        }
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
