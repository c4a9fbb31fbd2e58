// Character n-grams and Jaccard overlap scoring.

use hashbrown::{HashMap, HashSet};

/// Contiguous substrings of `n` characters, left to right, repeats kept.
///
/// A word shorter than `n` (or `n == 0`) has no n-grams. Windows are taken
/// over characters, so multi-byte characters are never split.
pub fn ngrams(word: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = word.chars().collect();
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` of two n-gram sequences taken as
/// sets. Two empty sequences share nothing and score 0.0.
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    jaccard_sets(&a, &b)
}

fn jaccard_sets(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// The query side of an n-gram comparison, built once per query and
/// compared against many candidates.
#[derive(Debug, Clone)]
pub struct QueryGrams {
    grams: HashSet<String>,
}

impl QueryGrams {
    pub fn new(query: &str, n: usize) -> Self {
        Self {
            grams: ngrams(query, n).into_iter().collect(),
        }
    }

    /// Jaccard similarity against a candidate's n-gram sequence.
    pub fn jaccard(&self, candidate: &[String]) -> f64 {
        let candidate: HashSet<&str> = candidate.iter().map(String::as_str).collect();
        let intersection = candidate.iter().filter(|g| self.grams.contains(**g)).count();
        let union = self.grams.len() + candidate.len() - intersection;
        if union == 0 {
            0.0
        } else {
            intersection as f64 / union as f64
        }
    }
}

/// Precomputed n-grams for every dictionary word.
#[derive(Debug, Clone)]
pub struct NGramIndex {
    n: usize,
    grams: HashMap<String, Vec<String>>,
}

impl NGramIndex {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            grams: HashMap::new(),
        }
    }

    /// Build an index over `words` with n-gram length `n`.
    pub fn build<I, S>(n: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new(n);
        for word in words {
            index.insert(word.into());
        }
        index
    }

    /// Index `word`, replacing any previous entry for it.
    pub fn insert(&mut self, word: String) {
        let grams = ngrams(&word, self.n);
        self.grams.insert(word, grams);
    }

    /// Precomputed n-grams of an indexed word.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.grams.get(word).map(Vec::as_slice)
    }

    /// N-gram similarity of `query` to an indexed `candidate`.
    ///
    /// A candidate that is not indexed contributes 0.0.
    pub fn similarity(&self, query: &str, candidate: &str) -> f64 {
        match self.get(candidate) {
            Some(grams) => jaccard(&ngrams(query, self.n), grams),
            None => 0.0,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    pub fn clear(&mut self) {
        self.grams.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bigrams_in_order_with_repeats() {
        assert_eq!(ngrams("banana", 2), ["ba", "an", "na", "an", "na"]);
    }

    #[test]
    fn short_words_have_no_ngrams() {
        assert!(ngrams("ab", 3).is_empty());
        assert!(ngrams("", 2).is_empty());
        assert!(ngrams("abc", 0).is_empty());
        assert_eq!(ngrams("abc", 3), ["abc"]);
    }

    #[test]
    fn ngrams_do_not_split_characters() {
        assert_eq!(ngrams("k\u{00E4}si", 2), ["k\u{00E4}", "\u{00E4}s", "si"]);
    }

    #[test]
    fn jaccard_treats_sequences_as_sets() {
        // {ba, an, na} vs {an, na, ab}: 2 shared of 4 distinct.
        let a = ngrams("banana", 2);
        let b = ngrams("anab", 2);
        assert_eq!(jaccard(&a, &b), 0.5);
    }

    #[test]
    fn jaccard_of_empty_sets_is_zero() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(jaccard(&empty, &empty), 0.0);
        assert_eq!(jaccard(&empty, &ngrams("cat", 2)), 0.0);
    }

    #[test]
    fn similarity_is_reflexive() {
        let index = NGramIndex::build(2, ["cat", "banana"]);
        assert_eq!(index.similarity("cat", "cat"), 1.0);
        assert_eq!(index.similarity("banana", "banana"), 1.0);
    }

    #[test]
    fn bigram_similarity_kat_vs_cat() {
        let index = NGramIndex::build(2, ["cat", "cats"]);
        // {ka, at} vs {ca, at}
        assert_eq!(index.similarity("kat", "cat"), 1.0 / 3.0);
        // {ka, at} vs {ca, at, ts}
        assert_eq!(index.similarity("kat", "cats"), 0.25);
    }

    #[test]
    fn missing_candidate_scores_zero() {
        let index = NGramIndex::build(2, ["cat"]);
        assert_eq!(index.similarity("cat", "dog"), 0.0);
    }

    #[test]
    fn query_grams_match_free_function() {
        let index = NGramIndex::build(3, ["spelling", "spilling"]);
        let query = QueryGrams::new("speling", 3);
        for word in ["spelling", "spilling"] {
            let grams = index.get(word).unwrap();
            assert_eq!(query.jaccard(grams), index.similarity("speling", word));
        }
    }

    #[test]
    fn query_grams_are_distinct() {
        // "aaaa" has the single distinct bigram "aa".
        let query = QueryGrams::new("aaaa", 2);
        assert_eq!(query.jaccard(&ngrams("aa", 2)), 1.0);
        assert_eq!(query.jaccard(&ngrams("aab", 2)), 0.5);
        assert_eq!(QueryGrams::new("a", 2).jaccard(&ngrams("aa", 2)), 0.0);
    }

    #[test]
    fn index_tracks_words() {
        let mut index = NGramIndex::new(2);
        assert!(index.is_empty());
        index.insert("cat".to_string());
        index.insert("cat".to_string());
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("cat"), Some(&["ca".to_string(), "at".to_string()][..]));
        assert_eq!(index.n(), 2);
        index.clear();
        assert!(index.is_empty());
    }
}
