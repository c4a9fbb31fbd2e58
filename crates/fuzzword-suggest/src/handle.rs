// SpellChecker: session-level handle over a SuggestionEngine.
//
// Adds the conveniences an interactive front end wants on top of the
// engine: reading a dictionary from any `BufRead`, owned lookup results,
// and the path of the most recent check kept for later display.

use std::cell::RefCell;
use std::io::BufRead;

use fuzzword_core::SuggestionEntry;

use crate::config::{ConfigError, EngineConfig};
use crate::suggestion::{LoadStats, SuggestionEngine};

/// Error type for SpellChecker construction and loading.
#[derive(Debug, thiserror::Error)]
pub enum SpellCheckerError {
    /// The engine configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The dictionary source could not be read.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level handle: load a dictionary, check words, ask for suggestions.
///
/// Not `Sync`: the last search path lives in a `RefCell`. Share the
/// [`SuggestionEngine`] (via [`SpellChecker::engine`]) when several
/// threads need to query the same dictionary.
#[derive(Debug)]
pub struct SpellChecker {
    engine: SuggestionEngine,
    /// Path of the most recent `check_word`/`lookup`.
    /// Wrapped in `RefCell` so `&self` checks can update it.
    last_path: RefCell<Vec<String>>,
}

impl SpellChecker {
    pub fn new(config: EngineConfig) -> Result<Self, SpellCheckerError> {
        Ok(Self {
            engine: SuggestionEngine::new(config)?,
            last_path: RefCell::new(Vec::new()),
        })
    }

    /// Replace the dictionary with `lines`, one word per line.
    pub fn load<I, S>(&mut self, lines: I) -> LoadStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.last_path.borrow_mut().clear();
        self.engine.load(lines)
    }

    /// Read every line of `reader`, then load them.
    ///
    /// All lines are read before the dictionary is touched, so a read
    /// error leaves the previously loaded words in place.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadStats, SpellCheckerError> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        Ok(self.load(lines))
    }

    /// Whether `word` (normalized) is in the dictionary.
    pub fn check_word(&self, word: &str) -> bool {
        self.lookup(word).0
    }

    /// Membership plus the words visited on the way, root first.
    pub fn lookup(&self, word: &str) -> (bool, Vec<String>) {
        let lookup = self.engine.lookup(word);
        let path = lookup.path.to_owned_words();
        *self.last_path.borrow_mut() = path.clone();
        (lookup.found, path)
    }

    /// Path recorded by the most recent check; empty before any check.
    pub fn last_search_path(&self) -> Vec<String> {
        self.last_path.borrow().clone()
    }

    pub fn suggest(&self, word: &str, limit: usize) -> Vec<SuggestionEntry> {
        self.engine.suggest(word, limit)
    }

    pub fn word_count(&self) -> usize {
        self.engine.word_count()
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }
}
