//! Character classes shared by the marker, the syllabifier and the rule tables.

use unicode_normalization::char::is_combining_mark;

use crate::models::STRESS_MARK;

/// Combining tilde used for nasalized vowels
pub const NASAL_TILDE: char = '\u{303}';

/// Vowel letters, orthographic and IPA, including precomposed nasal vowels
pub const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'à', 'â', 'ä', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'ö', 'ù', 'û',
    'ü', 'ɛ', 'ə', 'ɑ', 'ɔ', 'ø', 'œ', 'ã', 'ẽ', 'ĩ', 'õ', 'ũ',
];

/// Vowels that palatalize a preceding `c` or `g`
pub const FRONT_VOWELS: &[char] = &['e', 'i', 'y', 'é', 'è', 'ê', 'ë', 'ï', 'ɛ', 'ə', 'ẽ', 'ĩ'];

/// Vowels that license `qu` → `k` in the marker
pub const PLAIN_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Vowels that license `gu` → `g` in the marker
pub const GU_FRONT_VOWELS: &[char] = &['e', 'i'];

pub const NASAL_CONSONANTS: &[char] = &['n', 'm'];

/// IPA letters that do not count towards a word's length for stress suppression
pub const UNCOUNTED_IPA_LETTERS: &[char] = &['ʃ', 'ð', 'θ', 'ɲ', 'ɛ', 'ə', 'ɑ', 'ĩ', 'ẽ', 'õ'];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_nasal(c: char) -> bool {
    NASAL_CONSONANTS.contains(&c)
}

/// A letter that is not a vowel; combining marks and the stress glyph are neither
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && c != STRESS_MARK && !is_combining_mark(c) && !is_vowel(c)
}

/// Whether `text` starts with a vowel once a leading stress glyph is dropped
pub fn starts_with_vowel(text: &str) -> bool {
    text.trim_start_matches(STRESS_MARK)
        .chars()
        .next()
        .is_some_and(is_vowel)
}

/// Count letters that carry length: no stress glyph, no combining marks,
/// none of [`UNCOUNTED_IPA_LETTERS`]
pub fn base_letter_count(word: &str) -> usize {
    word.chars()
        .filter(|&c| c != STRESS_MARK && !is_combining_mark(c))
        .filter(|c| !UNCOUNTED_IPA_LETTERS.contains(c))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_excludes_marks() {
        assert!(is_consonant('t'));
        assert!(!is_consonant('a'));
        assert!(!is_consonant(STRESS_MARK));
        assert!(!is_consonant(NASAL_TILDE));
        assert!(!is_consonant('~'));
    }

    #[test]
    fn test_starts_with_vowel_skips_stress() {
        assert!(starts_with_vowel("ˈɛst"));
        assert!(!starts_with_vowel("ˈtot"));
        assert!(!starts_with_vowel("~"));
        assert!(!starts_with_vowel(""));
    }

    #[test]
    fn test_base_letter_count() {
        assert_eq!(base_letter_count("ˈtʃaθ"), 2);
        assert_eq!(base_letter_count("ˈdi\u{32f}ẽ"), 2);
        assert_eq!(base_letter_count("ˈpai\u{32f}ẽ"), 3);
        assert_eq!(base_letter_count("ɑ\u{303}"), 0);
    }
}
