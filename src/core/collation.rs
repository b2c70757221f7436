//! Korean-aware ordering of seat names (가나다 order).
//!
//! Characters are compared by a primary key first:
//!
//! 1. whitespace and punctuation
//! 2. ASCII digits
//! 3. Hangul: a bare consonant (ㄱ, ㄴ, ...) sorts right before the syllables
//!    starting with it; syllables keep Unicode order, which is dictionary order
//! 4. Latin letters, case-insensitive
//! 5. everything else, by code point
//!
//! Equal primary keys fall back to lowercase-before-uppercase, then to plain
//! code point order, so the result is a total order.

use std::cmp::Ordering;

const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
/// Syllables per leading consonant (21 vowels × 28 finals).
const SYLLABLES_PER_INITIAL: u32 = 588;

/// Compatibility jamo for the 19 leading consonants, in choseong order.
const INITIAL_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Symbol,
    Digit,
    Hangul,
    Latin,
    Other,
}

/// Primary collation weight of a single character.
fn primary(c: char) -> (Class, u32) {
    if c.is_ascii_digit() {
        return (Class::Digit, c as u32);
    }
    if c.is_ascii_alphabetic() {
        return (Class::Latin, c.to_ascii_lowercase() as u32);
    }

    let cp = c as u32;
    if (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&cp) {
        let offset = cp - HANGUL_SYLLABLE_FIRST;
        let initial = offset / SYLLABLES_PER_INITIAL;
        // slot 0 of each initial is reserved for the bare consonant
        return (
            Class::Hangul,
            initial * (SYLLABLES_PER_INITIAL + 1) + offset % SYLLABLES_PER_INITIAL + 1,
        );
    }
    if let Some(initial) = INITIAL_JAMO.iter().position(|&j| j == c) {
        return (Class::Hangul, initial as u32 * (SYLLABLES_PER_INITIAL + 1));
    }

    if c.is_whitespace() || c.is_ascii_punctuation() {
        return (Class::Symbol, cp);
    }
    (Class::Other, cp)
}

/// Tertiary weight: lowercase sorts before uppercase.
fn case_weight(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}

/// Compare two names in Korean dictionary order.
pub fn korean_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(case_weight).cmp(b.chars().map(case_weight)))
        .then_with(|| a.cmp(b))
}
