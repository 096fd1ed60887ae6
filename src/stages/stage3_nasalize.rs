use serde::Serialize;
use tracing::debug;

use crate::models::{STRESS_MARK, Word};
use crate::models::markers::N_SUFFIX_MARKERS;
use crate::rules::{NASAL_TILDE, is_nasal, starts_with_vowel};

/// Result of Stage 3 nasalization
#[derive(Debug, Clone, Default, Serialize)]
pub struct NasalizationResult {
    /// Number of nuclei rewritten to a nasal form
    pub nuclei_nasalized: usize,
    /// Number of nasal consonants moved from an onset into the preceding coda
    pub nasals_donated: usize,
    /// Number of nasal consonants deleted from codas
    pub nasals_deleted: usize,
}

/// Nasal form of a nucleus
fn nasalized_nucleus(nucleus: &str) -> String {
    match nucleus {
        "a" => "ɑ\u{303}".to_string(),
        "e" => "ẽ".to_string(),
        "i" => "ĩ".to_string(),
        "o" => "õ".to_string(),
        "u" => "ũ".to_string(),
        marker if N_SUFFIX_MARKERS.contains(&marker) => format!("{marker}n"),
        other => format!("{other}{NASAL_TILDE}"),
    }
}

/// Whether a vowel sound follows syllable `index` of word `word_index`
fn vowel_follows(words: &[Word], word_index: usize, index: usize) -> bool {
    let word = &words[word_index];
    let next_onset = match word.syllables.get(index + 1) {
        Some(next) => Some(next.onset.as_str()),
        None => words.get(word_index + 1).and_then(Word::first_onset),
    };

    next_onset
        .map(|onset| onset.trim_start_matches(STRESS_MARK))
        .is_some_and(|onset| onset.is_empty() || starts_with_vowel(onset))
}

/// Perform Stage 3: nasalization across the whole utterance
///
/// For each syllable, in order:
/// 1. A nasal in the next syllable's onset moves into this syllable's coda
/// 2. A nasal coda nasalizes the nucleus
/// 3. A nasal followed by `t` is deleted together with the `t`; otherwise the
///    nasal is deleted unless a vowel follows, looking into the next word when
///    this is the last syllable
pub fn nasalize(words: &mut [Word]) -> NasalizationResult {
    let mut result = NasalizationResult::default();

    for word_index in 0..words.len() {
        for index in 0..words[word_index].syllables.len() {
            let syllables = &mut words[word_index].syllables;

            // Step 1: borrow at most one nasal from the next onset
            let donated = syllables
                .get_mut(index + 1)
                .and_then(|next| next.onset.find(is_nasal).map(|pos| next.onset.remove(pos)));
            if let Some(nasal) = donated {
                syllables[index].coda.push(nasal);
                result.nasals_donated += 1;
            }

            // Step 2: only the first nasal in the coda counts
            let Some(nasal_pos) = syllables[index].coda.find(is_nasal) else {
                continue;
            };

            let syllable = &mut syllables[index];
            syllable.nucleus = nasalized_nucleus(&syllable.nucleus);
            result.nuclei_nasalized += 1;

            // Step 3: `nt` goes as a pair, a lone nasal survives only before a vowel
            let after_nasal = nasal_pos + 1;
            if syllable.coda[after_nasal..].starts_with('t') {
                syllable.coda.replace_range(nasal_pos..after_nasal + 1, "");
                result.nasals_deleted += 1;
            } else if !vowel_follows(words, word_index, index) {
                words[word_index].syllables[index].coda.remove(nasal_pos);
                result.nasals_deleted += 1;
            }
        }
    }

    debug!(
        "Nasalization: {} nuclei nasalized, {} nasals donated, {} deleted",
        result.nuclei_nasalized, result.nasals_donated, result.nasals_deleted
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Syllable;

    fn word(syllables: Vec<Syllable>) -> Word {
        let skeleton: String = syllables.iter().map(Syllable::full).collect();
        Word::new(skeleton.clone(), skeleton, syllables)
    }

    #[test]
    fn test_nt_coda_is_removed() {
        let mut words = vec![word(vec![Syllable::new("d", "I4").with_coda("nt")])];
        nasalize(&mut words);

        let syllable = &words[0].syllables[0];
        assert_eq!(syllable.nucleus, "I4n");
        assert_eq!(syllable.coda, "");
    }

    #[test]
    fn test_nt_removed_before_consonant_initial_word() {
        let mut words = vec![
            word(vec![Syllable::new("v", "e").with_coda("nt")]),
            word(vec![Syllable::new("p", "a")]),
        ];
        nasalize(&mut words);

        assert_eq!(words[0].syllables[0].nucleus, "ẽ");
        assert_eq!(words[0].syllables[0].coda, "");
    }

    #[test]
    fn test_final_nasal_kept_before_vowel_initial_word() {
        let mut words = vec![
            word(vec![Syllable::new("b", "I4").with_coda("n")]),
            word(vec![Syllable::new("", "a")]),
        ];
        nasalize(&mut words);

        assert_eq!(words[0].syllables[0].nucleus, "I4n");
        assert_eq!(words[0].syllables[0].coda, "n");
    }

    #[test]
    fn test_final_nasal_dropped_at_utterance_end() {
        let mut words = vec![word(vec![
            Syllable::new("p", "A1"),
            Syllable::new("", "e").with_coda("n"),
        ])];
        let result = nasalize(&mut words);

        assert_eq!(words[0].syllables[1].nucleus, "ẽ");
        assert_eq!(words[0].syllables[1].coda, "");
        assert_eq!(result.nasals_deleted, 1);
    }

    #[test]
    fn test_onset_nasal_donated_and_kept_before_vowel() {
        let mut words = vec![word(vec![Syllable::new("f", "a"), Syllable::new("m", "e")])];
        let result = nasalize(&mut words);

        assert_eq!(result.nasals_donated, 1);
        assert_eq!(words[0].syllables[0].nucleus, "ɑ\u{303}");
        assert_eq!(words[0].syllables[0].coda, "m");
        assert_eq!(words[0].syllables[1].onset, "");
    }

    #[test]
    fn test_only_one_nasal_donated() {
        let mut words = vec![word(vec![Syllable::new("f", "a"), Syllable::new("mn", "e")])];
        let result = nasalize(&mut words);

        assert_eq!(result.nasals_donated, 1);
        assert_eq!(words[0].syllables[0].nucleus, "ɑ\u{303}");
        assert_eq!(words[0].syllables[1].onset, "n");
        // A consonant still follows, so the borrowed nasal is deleted again
        assert_eq!(words[0].syllables[0].coda, "");
        assert_eq!(words[0].syllables[1].nucleus, "e");
    }

    #[test]
    fn test_word_without_syllables_blocks_vowel() {
        let mut words = vec![
            word(vec![Syllable::new("b", "o").with_coda("n")]),
            word(vec![]),
            word(vec![Syllable::new("", "a")]),
        ];
        nasalize(&mut words);

        assert_eq!(words[0].syllables[0].nucleus, "õ");
        assert_eq!(words[0].syllables[0].coda, "");
    }

    #[test]
    fn test_stress_glyph_ignored_in_next_onset() {
        let mut words = vec![
            word(vec![Syllable::new("b", "o").with_coda("n")]),
            word(vec![Syllable::new("ˈ", "a")]),
        ];
        nasalize(&mut words);

        assert_eq!(words[0].syllables[0].coda, "n");
    }

    #[test]
    fn test_unlisted_nucleus_gets_tilde() {
        assert_eq!(nasalized_nucleus("A1"), "A1\u{303}");
        assert_eq!(nasalized_nucleus("E1"), "E1n");
        assert_eq!(nasalized_nucleus("y"), "y\u{303}");
    }
}
