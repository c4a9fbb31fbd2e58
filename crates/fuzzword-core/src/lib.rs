//! Shared leaf types for the fuzzword crates.
//!
//! - [`character`] -- character classes and the word-likeness check
//! - [`word`] -- normalization of raw dictionary lines and queries
//! - [`suggestion`] -- the ranked `(word, score)` pair returned by suggestion

pub mod character;
pub mod suggestion;
pub mod word;

pub use suggestion::SuggestionEntry;
pub use word::normalize;
