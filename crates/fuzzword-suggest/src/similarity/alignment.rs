// Jaro-Winkler alignment similarity.

use super::SimilarityMeasure;

/// Jaro similarity with the Winkler common-prefix boost (prefix up to four
/// characters, scaling factor 0.1, applied above a Jaro score of 0.7).
///
/// The raw similarity is the score. Two empty strings score 1.0; one empty
/// string against a non-empty one scores 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl SimilarityMeasure for JaroWinkler {
    fn name(&self) -> &'static str {
        "jaro_winkler"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_words_score_one() {
        assert_eq!(JaroWinkler.score("martha", "martha"), 1.0);
    }

    #[test]
    fn classic_reference_pairs() {
        // Jaro("martha", "marhta") = 0.9444, boosted by the 3-char prefix.
        assert!(approx(JaroWinkler.score("martha", "marhta"), 0.961_111_111_111_111_1));
        // No shared prefix: pure Jaro.
        assert!(approx(JaroWinkler.score("kat", "cat"), 7.0 / 9.0));
    }

    #[test]
    fn rewards_common_prefix() {
        let with_prefix = JaroWinkler.score("spelling", "spelinng");
        let without_prefix = JaroWinkler.score("spelling", "xpelinng");
        assert!(with_prefix > without_prefix);
    }

    #[test]
    fn unrelated_words_score_zero() {
        assert_eq!(JaroWinkler.score("abc", "xyz"), 0.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(JaroWinkler.score("", ""), 1.0);
        assert_eq!(JaroWinkler.score("", "abc"), 0.0);
    }
}
