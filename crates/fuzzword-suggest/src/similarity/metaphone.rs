// Metaphone phonetic coding.

use super::PhoneticCoder;

/// Default maximum code length.
const DEFAULT_MAX_LEN: usize = 4;

/// Vowels that start a code when they are the first letter.
const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

/// Vowels that soften a preceding C or G.
const FRONT_VOWELS: &[char] = &['E', 'I', 'Y'];

/// Letters after which H is silent.
const H_SILENCERS: &[char] = &['C', 'S', 'P', 'T', 'G'];

/// Classic Metaphone coding of English pronunciation.
///
/// Codes use the consonant alphabet `0BFHJKLMNPRSTWXY` (`0` is "th") and
/// keep a leading vowel. Only ASCII letters take part in the coding.
#[derive(Debug, Clone, Copy)]
pub struct Metaphone {
    max_len: usize,
}

impl Default for Metaphone {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Metaphone {
    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl PhoneticCoder for Metaphone {
    fn name(&self) -> &'static str {
        "metaphone"
    }

    fn encode(&self, word: &str) -> String {
        let letters: Vec<char> = word
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match letters.len() {
            0 => String::new(),
            1 => letters.iter().take(self.max_len).collect(),
            _ => Letters::new(strip_initial(letters)).encode(self.max_len),
        }
    }
}

/// Rewrite initial letter combinations whose first letter is silent or
/// pronounced differently: KN, GN, PN, AE, WR drop the first letter, WH
/// becomes W, and an initial X sounds like S.
fn strip_initial(mut letters: Vec<char>) -> Vec<char> {
    match (letters[0], letters[1]) {
        ('K' | 'G' | 'P', 'N') | ('A', 'E') | ('W', 'R') => {
            letters.remove(0);
        }
        ('W', 'H') => {
            letters.remove(1);
        }
        ('X', _) => letters[0] = 'S',
        _ => {}
    }
    letters
}

/// Context helpers over the prepared letter buffer.
struct Letters {
    chars: Vec<char>,
}

impl Letters {
    fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    #[inline]
    fn at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    #[inline]
    fn is_last(&self, i: usize) -> bool {
        i + 1 == self.chars.len()
    }

    #[inline]
    fn prev_is(&self, i: usize, c: char) -> bool {
        i > 0 && self.at(i - 1) == Some(c)
    }

    #[inline]
    fn next_is(&self, i: usize, c: char) -> bool {
        self.at(i + 1) == Some(c)
    }

    #[inline]
    fn is_vowel(&self, i: usize) -> bool {
        self.at(i).is_some_and(|c| VOWELS.contains(&c))
    }

    #[inline]
    fn is_front_vowel(&self, i: usize) -> bool {
        self.at(i).is_some_and(|c| FRONT_VOWELS.contains(&c))
    }

    /// True when `pattern` occurs starting at `i`.
    fn region(&self, i: usize, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(k, p)| self.at(i + k) == Some(p))
    }

    fn encode(&self, max_len: usize) -> String {
        let len = self.chars.len();
        let mut code = String::with_capacity(max_len + 1);
        let mut i = 0;

        while code.len() < max_len && i < len {
            let c = self.chars[i];

            // Doubled letters code once, except C ("accent" keeps both).
            if c != 'C' && self.prev_is(i, c) {
                i += 1;
                continue;
            }

            match c {
                'A' | 'E' | 'I' | 'O' | 'U' => {
                    if i == 0 {
                        code.push(c);
                    }
                }
                'B' => {
                    // Silent in a final MB ("thumb").
                    if !(self.prev_is(i, 'M') && self.is_last(i)) {
                        code.push('B');
                    }
                }
                'C' => self.encode_c(i, &mut code),
                'D' => {
                    // DGE, DGI, DGY sound like J.
                    if !self.is_last(i + 1) && self.next_is(i, 'G') && self.is_front_vowel(i + 2) {
                        code.push('J');
                        i += 2;
                    } else {
                        code.push('T');
                    }
                }
                'G' => self.encode_g(i, &mut code),
                'H' => {
                    let after_silencer = i > 0 && H_SILENCERS.contains(&self.chars[i - 1]);
                    if !self.is_last(i) && !after_silencer && self.is_vowel(i + 1) {
                        code.push('H');
                    }
                }
                'F' | 'J' | 'L' | 'M' | 'N' | 'R' => code.push(c),
                'K' => {
                    // CK codes once.
                    if !self.prev_is(i, 'C') {
                        code.push('K');
                    }
                }
                'P' => code.push(if self.next_is(i, 'H') { 'F' } else { 'P' }),
                'Q' => code.push('K'),
                'S' => {
                    if self.region(i, "SH") || self.region(i, "SIO") || self.region(i, "SIA") {
                        code.push('X');
                    } else {
                        code.push('S');
                    }
                }
                'T' => {
                    if self.region(i, "TIA") || self.region(i, "TIO") {
                        code.push('X');
                    } else if self.region(i, "TCH") {
                        // The CH that follows codes the sound.
                    } else if self.region(i, "TH") {
                        code.push('0');
                    } else {
                        code.push('T');
                    }
                }
                'V' => code.push('F'),
                'W' | 'Y' => {
                    if !self.is_last(i) && self.is_vowel(i + 1) {
                        code.push(c);
                    }
                }
                'X' => {
                    code.push('K');
                    code.push('S');
                }
                'Z' => code.push('S'),
                _ => {}
            }
            i += 1;
        }

        code.truncate(max_len);
        code
    }

    fn encode_c(&self, i: usize, code: &mut String) {
        if self.prev_is(i, 'S') && !self.is_last(i) && self.is_front_vowel(i + 1) {
            // SCE, SCI, SCY: silent.
            return;
        }
        if self.region(i, "CIA") {
            code.push('X');
        } else if !self.is_last(i) && self.is_front_vowel(i + 1) {
            code.push('S');
        } else if self.prev_is(i, 'S') && self.next_is(i, 'H') {
            code.push('K');
        } else if self.next_is(i, 'H') {
            // Initial CH before a consonant is hard ("christ").
            if i == 0 && self.chars.len() >= 3 && !self.is_vowel(2) {
                code.push('K');
            } else {
                code.push('X');
            }
        } else {
            code.push('K');
        }
    }

    fn encode_g(&self, i: usize, code: &mut String) {
        if self.is_last(i + 1) && self.next_is(i, 'H') {
            // Final GH is silent.
            return;
        }
        if !self.is_last(i + 1) && self.next_is(i, 'H') && !self.is_vowel(i + 2) {
            // GH before a consonant ("night").
            return;
        }
        if i > 0 && (self.region(i, "GN") || self.region(i, "GNED")) {
            return;
        }
        let hard = self.prev_is(i, 'G');
        if !self.is_last(i) && self.is_front_vowel(i + 1) && !hard {
            code.push('J');
        } else {
            code.push('K');
        }
    }
}
