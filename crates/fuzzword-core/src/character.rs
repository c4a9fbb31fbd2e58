// Character classification and the word-likeness check applied by callers
// before a query reaches the dictionary.

/// Coarse character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Whitespace,
    Punctuation,
    Other,
}

/// Returns the class of a single character.
///
/// Letters are anything Unicode considers alphabetic, so accented and
/// non-Latin words classify the same way as ASCII ones. Digits are any
/// Unicode numeric character, which keeps superscripts and full-width
/// digits out of "word-like" input.
pub fn classify(c: char) -> CharClass {
    if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_punctuation(c) {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00AD}' // SOFT HYPHEN
                | '\u{2010}' // HYPHEN
                | '\u{2011}' // NON-BREAKING HYPHEN
                | '\u{2013}' // EN DASH
                | '\u{2014}' // EM DASH
                | '\u{2018}' // LEFT SINGLE QUOTATION MARK
                | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
                | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
                | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
                | '\u{2026}' // HORIZONTAL ELLIPSIS
        )
}

/// Check whether `word` looks like something worth spell-checking.
///
/// A word-like input is non-empty after trimming and contains no digits.
/// The dictionary and the suggestion engine accept any string; this check
/// exists for front-ends that want to reject input such as `"h3llo"` with a
/// message instead of returning an empty suggestion list.
pub fn is_word_like(word: &str) -> bool {
    let word = word.trim();
    !word.is_empty() && !word.chars().any(|c| classify(c) == CharClass::Digit)
}
