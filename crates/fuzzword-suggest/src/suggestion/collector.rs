// Shared result map for the parallel scan

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use fuzzword_core::SuggestionEntry;
use fuzzword_core::suggestion::sort_ranked;

/// Concurrent word -> score map. Safe to record into from any number of
/// workers; a word recorded twice keeps its higher score.
#[derive(Debug, Default)]
pub struct ScoreCollector<'a> {
    scores: DashMap<&'a str, f64>,
}

impl<'a> ScoreCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, word: &'a str, score: f64) {
        match self.scores.entry(word) {
            Entry::Occupied(mut entry) => {
                if score > *entry.get() {
                    entry.insert(score);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(score);
            }
        }
    }

    /// Number of distinct words recorded so far.
    pub(crate) fn len(&self) -> usize {
        self.scores.len()
    }

    /// Drain into entries sorted by score descending, ties by word, cut to
    /// `limit`.
    pub fn into_ranked(self, limit: usize) -> Vec<SuggestionEntry> {
        let mut entries: Vec<SuggestionEntry> = self
            .scores
            .into_iter()
            .map(|(word, score)| SuggestionEntry::new(word, score))
            .collect();
        sort_ranked(&mut entries);
        entries.truncate(limit);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_maximum_on_conflict() {
        let collector = ScoreCollector::new();
        collector.record("cat", 0.4);
        collector.record("cat", 0.9);
        collector.record("cat", 0.6);
        assert_eq!(collector.len(), 1);
        let ranked = collector.into_ranked(10);
        assert_eq!(ranked, vec![SuggestionEntry::new("cat", 0.9)]);
    }

    #[test]
    fn ranks_by_score_then_word() {
        let collector = ScoreCollector::new();
        collector.record("hat", 0.5);
        collector.record("cat", 0.8);
        collector.record("bat", 0.5);
        let words: Vec<String> = collector
            .into_ranked(10)
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, ["cat", "bat", "hat"]);
    }

    #[test]
    fn truncates_to_limit() {
        let collector = ScoreCollector::new();
        for (i, word) in ["a", "b", "c", "d"].into_iter().enumerate() {
            collector.record(word, i as f64 / 10.0);
        }
        let ranked = collector.into_ranked(2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word, "d");
    }

    #[test]
    fn concurrent_records_keep_maximum() {
        let collector = ScoreCollector::new();
        rayon::scope(|s| {
            for i in 0..8 {
                let collector = &collector;
                s.spawn(move |_| collector.record("cat", i as f64 / 10.0));
            }
        });
        assert_eq!(collector.into_ranked(1)[0].score, 0.7);
    }
}
