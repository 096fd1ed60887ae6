use crate::models::markers::{is_marker_nucleus, is_triphthong};
use crate::models::{Stress, Syllable};

/// Word endings that never carry final stress
const UNSTRESSED_ENDINGS: [&str; 2] = ["es", "et"];

fn has_unstressed_ending(syllable: &Syllable) -> bool {
    let full = syllable.full();
    UNSTRESSED_ENDINGS.iter().any(|ending| full.ends_with(*ending))
}

/// Choose the primary stress of a word
///
/// - No syllables: unstressed
/// - One syllable: stressed unless it ends in `es`/`et`
/// - A triphthong nucleus anywhere takes the stress (first one wins)
/// - Otherwise the last syllable is stressed when it does not end in
///   `es`/`et` and is heavy (diphthong nucleus or non-empty coda); else the
///   penultimate
pub fn assign_stress(syllables: &[Syllable]) -> Stress {
    let Some(last) = syllables.last() else {
        return Stress::Unstressed;
    };

    if syllables.len() == 1 {
        return if has_unstressed_ending(last) {
            Stress::Unstressed
        } else {
            Stress::Syllable(0)
        };
    }

    if let Some(index) = syllables.iter().position(|s| is_triphthong(&s.nucleus)) {
        return Stress::Syllable(index);
    }

    let heavy = is_marker_nucleus(&last.nucleus) || !last.coda.is_empty();
    if !has_unstressed_ending(last) && heavy {
        Stress::Syllable(syllables.len() - 1)
    } else {
        Stress::Syllable(syllables.len() - 2)
    }
}

/// Resolve plain `e` nuclei: `ɛ` under stress, `ə` elsewhere
pub fn adjust_vowel_quality(syllables: &mut [Syllable], stress: Stress) {
    for (index, syllable) in syllables.iter_mut().enumerate() {
        if is_marker_nucleus(&syllable.nucleus) || !syllable.nucleus.contains('e') {
            continue;
        }
        let quality = if stress.is_stressed(index) { "ɛ" } else { "ə" };
        syllable.nucleus = syllable.nucleus.replace('e', quality);
    }
}
