// Ranked suggestion entries returned to callers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A candidate correction paired with its combined score.
///
/// Scores are conceptually in `[0, 1]`; higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    /// The dictionary word being suggested.
    pub word: String,
    /// Combined similarity score.
    pub score: f64,
}

impl SuggestionEntry {
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    /// Ranking order: higher score first, ties broken by ascending word.
    ///
    /// Uses `total_cmp` so the order is total even for NaN scores.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Sort entries into ranking order (see [`SuggestionEntry::rank_cmp`]).
pub fn sort_ranked(entries: &mut [SuggestionEntry]) {
    entries.sort_by(SuggestionEntry::rank_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_sorts_by_score_descending() {
        let mut entries = vec![
            SuggestionEntry::new("low", 0.2),
            SuggestionEntry::new("high", 0.9),
            SuggestionEntry::new("mid", 0.5),
        ];
        sort_ranked(&mut entries);
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["high", "mid", "low"]);
    }

    #[test]
    fn ranking_breaks_ties_by_word() {
        let mut entries = vec![
            SuggestionEntry::new("hat", 0.5),
            SuggestionEntry::new("bat", 0.5),
            SuggestionEntry::new("cat", 0.6),
        ];
        sort_ranked(&mut entries);
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["cat", "bat", "hat"]);
    }

    #[test]
    fn entry_serializes_as_object() {
        let entry = SuggestionEntry::new("cat", 0.5);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"word":"cat","score":0.5}"#);
    }
}
