// SuggestionEngine: dictionary state plus the scoring pipeline.
//
// The engine owns the word set, the n-gram index and the built measure
// list. Loading needs `&mut self`; every query takes `&self`, so a loaded
// engine can be shared between threads and a reload can never overlap a
// running scan.

use std::time::Instant;

use fuzzword_core::{SuggestionEntry, normalize};
use fuzzword_tree::{Lookup, OrderedWordSet};
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::collector::ScoreCollector;
use super::scan::scan_parallel;
use super::scorer::CandidateScorer;
use crate::config::{ConfigError, EngineConfig};
use crate::ngram::NGramIndex;
use crate::similarity::WeightedMeasure;

/// Counters reported by a dictionary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Distinct words now in the dictionary.
    pub words: usize,
    /// Non-blank lines that normalized to an already loaded word.
    pub duplicates: usize,
}

/// Fuzzy lookup over an in-memory dictionary.
pub struct SuggestionEngine {
    words: OrderedWordSet,
    index: NGramIndex,
    measures: Vec<WeightedMeasure>,
    config: EngineConfig,
    pool: Option<ThreadPool>,
}

impl SuggestionEngine {
    /// Validate `config` and build an empty engine.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let measures = config.measures.iter().map(|m| m.build()).collect();
        let pool = match config.worker_threads {
            Some(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("fuzzword-scan-{i}"))
                    .build()?,
            ),
            None => None,
        };

        Ok(Self {
            words: OrderedWordSet::new(),
            index: NGramIndex::new(config.ngram_size),
            measures,
            config,
            pool,
        })
    }

    /// Replace the dictionary with the normalized, non-blank `lines`.
    pub fn load<I, S>(&mut self, lines: I) -> LoadStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started = Instant::now();
        self.words.clear();
        self.index.clear();

        let mut stats = LoadStats::default();
        for line in lines {
            stats.lines += 1;
            let word = normalize(line.as_ref());
            if word.is_empty() {
                continue;
            }
            if self.words.insert(word.clone()) {
                self.index.insert(word);
            } else {
                stats.duplicates += 1;
            }
        }
        stats.words = self.words.len();

        tracing::debug!(
            lines = stats.lines,
            words = stats.words,
            duplicates = stats.duplicates,
            height = self.words.height(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "dictionary loaded"
        );
        stats
    }

    /// Exact lookup of the normalized `word`, with the visited path.
    ///
    /// The path borrows from the dictionary; `word` itself only needs to
    /// live for the call.
    pub fn lookup(&self, word: &str) -> Lookup<'_> {
        self.words.lookup(&normalize(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Up to `limit` dictionary words ranked by similarity to `query`.
    ///
    /// An empty dictionary, a zero limit, or a query no measure considers
    /// close to anything all yield an empty list.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<SuggestionEntry> {
        if limit == 0 || self.words.is_empty() {
            return Vec::new();
        }

        let started = Instant::now();
        let query = normalize(query);
        let scorer = CandidateScorer::new(
            &query,
            &self.measures,
            &self.index,
            self.config.inclusion_threshold,
            self.config.max_edit_distance,
        );
        let collector = ScoreCollector::new();
        let scan = || {
            scan_parallel(self.words.root(), &|word| {
                if let Some(score) = scorer.score(word) {
                    collector.record(word, score);
                }
            })
        };
        match &self.pool {
            Some(pool) => pool.install(scan),
            None => scan(),
        }

        let matched = collector.len();
        let ranked = collector.into_ranked(limit);
        tracing::debug!(
            query = scorer.query(),
            candidates = self.words.len(),
            matched,
            returned = ranked.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "suggest"
        );
        ranked
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &OrderedWordSet {
        &self.words
    }

    pub fn ngram_index(&self) -> &NGramIndex {
        &self.index
    }

    pub fn measures(&self) -> &[WeightedMeasure] {
        &self.measures
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionEngine")
            .field("words", &self.words.len())
            .field("measures", &self.measures)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
