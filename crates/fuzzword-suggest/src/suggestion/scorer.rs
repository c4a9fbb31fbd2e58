// Per-candidate scoring: threshold filter, weighted mean, n-gram average

use crate::ngram::{NGramIndex, QueryGrams};
use crate::similarity::WeightedMeasure;

/// Scores dictionary words against one query.
///
/// Built once per `suggest` call and shared by reference across every
/// worker, so it only borrows engine state.
pub struct CandidateScorer<'e> {
    query: &'e str,
    query_grams: QueryGrams,
    measures: &'e [WeightedMeasure],
    index: &'e NGramIndex,
    threshold: f64,
    max_edit_distance: Option<usize>,
}

impl<'e> CandidateScorer<'e> {
    pub fn new(
        query: &'e str,
        measures: &'e [WeightedMeasure],
        index: &'e NGramIndex,
        threshold: f64,
        max_edit_distance: Option<usize>,
    ) -> Self {
        Self {
            query,
            query_grams: QueryGrams::new(query, index.n()),
            measures,
            index,
            threshold,
            max_edit_distance,
        }
    }

    pub fn query(&self) -> &str {
        self.query
    }

    /// Combined score for `candidate`, or `None` when the candidate is
    /// filtered out by the edit-distance cap or no measure reaches the
    /// inclusion threshold.
    pub fn score(&self, candidate: &str) -> Option<f64> {
        if let Some(max) = self.max_edit_distance {
            if strsim::levenshtein(self.query, candidate) > max {
                return None;
            }
        }

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for measure in self.measures {
            let raw = measure.score(self.query, candidate);
            if raw >= self.threshold {
                weighted_sum += raw * measure.weight();
                weight_total += measure.weight();
            }
        }
        if weight_total == 0.0 {
            return None;
        }

        let weighted_mean = (weighted_sum / weight_total).min(1.0);
        let ngram = match self.index.get(candidate) {
            Some(grams) => self.query_grams.jaccard(grams),
            None => 0.0,
        };
        let combined = (weighted_mean + ngram) / 2.0;

        tracing::trace!(candidate, weighted_mean, ngram, combined, "scored");
        Some(combined)
    }
}
