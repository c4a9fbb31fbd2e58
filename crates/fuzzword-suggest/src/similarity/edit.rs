// Edit-distance based measures.
//
// Distances count Unicode scalar values, so a multi-byte character is one
// edit like any other.

use fuzzword_core::word::char_len;

use super::SimilarityMeasure;

/// Plain edit distance (insert, delete, substitute; unit cost) mapped to
/// `1 / (1 + distance)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl SimilarityMeasure for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        1.0 / (1.0 + strsim::levenshtein(a, b) as f64)
    }
}

/// Edit distance with adjacent transposition as an extra unit-cost
/// operation, mapped to `1 - distance / max(len(a), len(b))`.
///
/// This is the restricted form (optimal string alignment): no substring is
/// edited after being transposed, so "ca" -> "abc" costs 3, not 2.
/// Two empty strings are identical and score 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshtein;

impl SimilarityMeasure for DamerauLevenshtein {
    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        let max_len = char_len(a).max(char_len(b));
        if max_len == 0 {
            return 1.0;
        }
        let distance = strsim::osa_distance(a, b);
        (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
    }
}
