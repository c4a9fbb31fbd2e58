//! Multi-measure fuzzy suggestion engine.
//!
//! Given a dictionary of words and a query, answers exact membership
//! (with the tree path visited) and produces a ranked list of likely
//! corrections. Each dictionary word is scored by several similarity
//! measures; measures below the inclusion threshold are dropped, the rest
//! are combined as a weighted mean and averaged with n-gram Jaccard
//! similarity.
//!
//! # Architecture
//!
//! - [`similarity`] -- the `SimilarityMeasure` trait, edit-distance,
//!   alignment and phonetic measures
//! - [`ngram`] -- n-gram extraction, Jaccard similarity, the per-word index
//! - [`config`] -- [`EngineConfig`] and its validation
//! - [`suggestion`] -- candidate scoring, the parallel scan over the word
//!   tree, and [`SuggestionEngine`]
//! - [`handle`] -- [`SpellChecker`], the session-level entry point
//!
//! ```
//! use fuzzword_suggest::{EngineConfig, SpellChecker};
//!
//! let mut checker = SpellChecker::new(EngineConfig::default()).unwrap();
//! checker.load(["cat", "cats", "bat", "hat"]);
//! assert!(checker.check_word("Cat"));
//! assert_eq!(checker.suggest("kat", 1)[0].word, "cat");
//! ```

pub mod config;
pub mod handle;
pub mod ngram;
pub mod similarity;
pub mod suggestion;

pub use config::{ConfigError, EngineConfig, MeasureConfig};
pub use fuzzword_core::SuggestionEntry;
pub use handle::{SpellChecker, SpellCheckerError};
pub use ngram::NGramIndex;
pub use similarity::{MeasureKind, SimilarityMeasure, WeightedMeasure};
pub use suggestion::{LoadStats, SuggestionEngine};
