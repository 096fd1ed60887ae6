use tracing::trace;

use crate::rules::{MARKER_RULES, apply_rules_seq};

/// Perform Stage 1: rewrite digraphs, diphthongs and triphthongs into placeholders
///
/// After this stage every syllable nucleus in the word is either one vowel
/// letter or one two-character marker.
pub fn mark_sequences(word: &str) -> String {
    let marked = apply_rules_seq(word, MARKER_RULES);
    trace!("Marked {:?} -> {:?}", word, marked);
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraphs_longest_first() {
        assert_eq!(mark_sequences("bocche"), "boCe");
        assert_eq!(mark_sequences("chose"), "Cose");
        assert_eq!(mark_sequences("magne"), "maGe");
    }

    #[test]
    fn test_gu_qu_keep_following_vowel() {
        assert_eq!(mark_sequences("guerre"), "gerre");
        assert_eq!(mark_sequences("quant"), "kant");
        assert_eq!(mark_sequences("gua"), "gua");
    }

    #[test]
    fn test_diphthongs() {
        assert_eq!(mark_sequences("reis"), "rE1s");
        assert_eq!(mark_sequences("paien"), "pA1en");
        assert_eq!(mark_sequences("roi"), "rO1");
        assert_eq!(mark_sequences("dient"), "dI4nt");
        assert_eq!(mark_sequences("lui"), "lU1");
        assert_eq!(mark_sequences("cuer"), "cU2r");
    }

    #[test]
    fn test_ieu_taken_by_oral_rule_before_triphthong() {
        // The I2 rule runs first, so no ieu survives for T2.
        assert_eq!(mark_sequences("dieu"), "dI2");
        // au is consumed before the eau triphthong rule is reached.
        assert_eq!(mark_sequences("beau"), "beA2");
    }
}
