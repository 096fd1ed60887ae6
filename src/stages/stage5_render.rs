use crate::models::{STRESS_MARK, Stress, Syllable};
use crate::rules::{DECODER_RULES, NASAL_DECODER_RULES, apply_rules_seq};

/// Flatten syllables back into a marked string, with the stress glyph
/// placed before the stressed syllable's onset
pub fn build_word(syllables: &[Syllable], stress: Stress) -> String {
    let mut built = String::new();
    for (index, syllable) in syllables.iter().enumerate() {
        if stress.is_stressed(index) {
            built.push(STRESS_MARK);
        }
        built.push_str(&syllable.full());
    }
    built
}

/// Replace placeholders with IPA, nasal combinations first
pub fn decode_sequences(built: &str) -> String {
    let nasal_resolved = apply_rules_seq(built, NASAL_DECODER_RULES);
    apply_rules_seq(&nasal_resolved, DECODER_RULES)
}
