// American Soundex coding.

use super::PhoneticCoder;

/// Soundex digit for each letter `A..=Z`; '0' marks vowels and the
/// transparent letters that never produce a digit.
const US_ENGLISH_MAPPING: &[u8; 26] = b"01230120022455012623010202";

/// Length of a Soundex code: one letter followed by three digits.
const CODE_LEN: usize = 4;

/// American Soundex: the first letter followed by three digits.
///
/// Only ASCII letters are encoded; anything else is dropped before coding.
/// `H` and `W` are transparent, so consonants with the same digit on either
/// side of them collapse into one. Vowels separate repeated digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Soundex;

impl PhoneticCoder for Soundex {
    fn name(&self) -> &'static str {
        "soundex"
    }

    fn encode(&self, word: &str) -> String {
        let mut letters = word
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase());

        let Some(first) = letters.next() else {
            return String::new();
        };

        let mut code = String::with_capacity(CODE_LEN);
        code.push(first);
        let mut last_digit = digit(first);

        for c in letters {
            if code.len() == CODE_LEN {
                break;
            }
            if c == 'H' || c == 'W' {
                continue;
            }
            let d = digit(c);
            if d != '0' && d != last_digit {
                code.push(d);
            }
            last_digit = d;
        }

        while code.len() < CODE_LEN {
            code.push('0');
        }
        code
    }
}

/// `c` must be an uppercase ASCII letter.
#[inline]
fn digit(c: char) -> char {
    US_ENGLISH_MAPPING[(c as u8 - b'A') as usize] as char
}
