// Phonetic code equality: two words match when they share a code.

use super::SimilarityMeasure;

/// Maps a word to a short code such that words that sound alike tend to
/// share a code.
pub trait PhoneticCoder: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encode `word`. Returns an empty string when the word has nothing
    /// encodable (no ASCII letters).
    fn encode(&self, word: &str) -> String;
}

/// Scores 1.0 when both words encode to the same non-empty code, else 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneticEquality<C> {
    coder: C,
}

impl<C: PhoneticCoder> PhoneticEquality<C> {
    pub fn new(coder: C) -> Self {
        Self { coder }
    }
}

impl<C: PhoneticCoder> SimilarityMeasure for PhoneticEquality<C> {
    fn name(&self) -> &'static str {
        self.coder.name()
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        let code_a = self.coder.encode(a);
        if code_a.is_empty() {
            return 0.0;
        }
        if code_a == self.coder.encode(b) { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{Metaphone, Soundex};

    #[test]
    fn soundex_equality() {
        let m = PhoneticEquality::new(Soundex);
        assert_eq!(m.name(), "soundex");
        assert_eq!(m.score("robert", "rupert"), 1.0);
        assert_eq!(m.score("robert", "rubin"), 0.0);
    }

    #[test]
    fn metaphone_equality() {
        let m = PhoneticEquality::new(Metaphone::default());
        assert_eq!(m.name(), "metaphone");
        assert_eq!(m.score("kat", "cat"), 1.0);
        assert_eq!(m.score("phone", "fone"), 1.0);
        assert_eq!(m.score("cat", "hat"), 0.0);
    }

    #[test]
    fn empty_codes_never_match() {
        let m = PhoneticEquality::new(Soundex);
        assert_eq!(m.score("", ""), 0.0);
        assert_eq!(m.score("123", "456"), 0.0);
    }
}
