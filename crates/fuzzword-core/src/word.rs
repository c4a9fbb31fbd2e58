// Word normalization shared by dictionary loading, lookup and suggestion.

/// Normalize a raw dictionary line or query into a Word.
///
/// Trims surrounding whitespace and lower-cases the rest. The result may be
/// empty; callers that read dictionary files skip empty words.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of characters (Unicode scalar values) in a word.
///
/// All length-based scoring works in characters, never bytes.
#[inline]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
