use tracing::{debug, trace};

use crate::models::{STRESS_MARK, is_boundary};
use crate::rules::{
    FINAL_SUBSTITUTIONS, INTERVOCALIC_T, NT_BEFORE_VOWEL, apply_rule, apply_rules_seq,
    apply_until_stable, base_letter_count, is_consonant, starts_with_vowel,
};

/// Configuration for Stage 6 final rules
#[derive(Debug, Clone)]
pub struct FinalRulesConfig {
    /// Words with at most this many base letters lose their stress glyph
    pub max_unstressed_len: usize,
}

impl Default for FinalRulesConfig {
    fn default() -> Self {
        Self {
            max_unstressed_len: 2,
        }
    }
}

/// Soften a word-final `t`/`d` unless a consonant precedes it or the word
/// ends in `es`/`et`. Before a vowel-initial word both become `ð`;
/// otherwise `t` → `θ` and `d` → `ð`.
fn soften_final_dental(word: &str, next: Option<&str>) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let Some(&last) = chars.last() else {
        return String::new();
    };
    if last != 't' && last != 'd' {
        return word.to_string();
    }

    let protected = word.ends_with("es")
        || word.ends_with("et")
        || (chars.len() >= 2 && is_consonant(chars[chars.len() - 2]));
    if protected {
        return word.to_string();
    }

    let before_vowel = next.is_some_and(starts_with_vowel);
    let softened = if before_vowel || last == 'd' { 'ð' } else { 'θ' };
    chars.pop();
    chars.push(softened);
    chars.into_iter().collect()
}

/// Drop the stress glyph from words that are too short to carry it
fn suppress_short_stress(word: String, max_len: usize) -> String {
    if word.contains(STRESS_MARK) && base_letter_count(&word) <= max_len {
        word.replace(STRESS_MARK, "")
    } else {
        word
    }
}

/// Apply the final rules to one decoded word, given the raw next token
pub fn rewrite_word(word: &str, next: Option<&str>, config: &FinalRulesConfig) -> String {
    let resolved = apply_rule(word, &NT_BEFORE_VOWEL);
    let softened = soften_final_dental(&resolved, next);
    let lenited = apply_until_stable(&softened, &INTERVOCALIC_T);
    let substituted = apply_rules_seq(&lenited, FINAL_SUBSTITUTIONS);
    let rewritten = suppress_short_stress(substituted, config.max_unstressed_len);

    trace!("Final rules {:?} -> {:?}", word, rewritten);
    rewritten
}

/// Perform Stage 6: cross-word and letter-level rules over the token stream
///
/// Boundary tokens pass through unchanged. Each word sees the next token as
/// it was before this stage ran.
pub fn apply_final_rules(tokens: &[String], config: &FinalRulesConfig) -> Vec<String> {
    let rewritten: Vec<String> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if is_boundary(token) {
                return token.clone();
            }
            let next = tokens.get(i + 1).map(String::as_str);
            rewrite_word(token, next, config)
        })
        .collect();

    debug!("Final rules applied to {} tokens", rewritten.len());
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[&str]) -> Vec<String> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        apply_final_rules(&tokens, &FinalRulesConfig::default())
    }

    #[test]
    fn test_final_t_before_vowel_and_consonant() {
        assert_eq!(run(&["ˈtot", "ˈɛst"]), vec!["toð", "ɛst"]);
        assert_eq!(run(&["ˈtot", "ˈpar"]), vec!["toθ", "ˈpar"]);
        assert_eq!(run(&["ˈtot", "~"]), vec!["toθ", "~"]);
    }

    #[test]
    fn test_final_d_always_voiced() {
        assert_eq!(soften_final_dental("ˈnud", None), "ˈnuð");
        assert_eq!(soften_final_dental("ˈnud", Some("ami")), "ˈnuð");
    }

    #[test]
    fn test_protected_final_dentals() {
        assert_eq!(soften_final_dental("ˈɛst", None), "ˈɛst");
        assert_eq!(soften_final_dental("ˈvaret", None), "ˈvaret");
        assert_eq!(soften_final_dental("", None), "");
    }

    #[test]
    fn test_intervocalic_lenition() {
        assert_eq!(run(&["ˈvita"]), vec!["ˈviθa"]);
        assert_eq!(run(&["ˈɑ\u{303}tora"]), vec!["ˈɑ\u{303}θora"]);
        assert_eq!(run(&["ˈvido"]), vec!["ˈviðo"]);
    }

    #[test]
    fn test_nt_before_vowel_loses_t() {
        assert_eq!(rewrite_word("ˈkantara", None, &FinalRulesConfig::default()), "ˈkanara");
    }

    #[test]
    fn test_short_words_lose_stress() {
        assert_eq!(run(&["ˈdi\u{32f}ẽ"]), vec!["di\u{32f}ẽ"]);
        assert_eq!(run(&["ˈtʃaθ"]), vec!["tʃaθ"]);
        assert_eq!(run(&["ˈpai\u{32f}ẽ"]), vec!["ˈpai\u{32f}ẽ"]);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let config = FinalRulesConfig {
            max_unstressed_len: 0,
        };
        assert_eq!(rewrite_word("ˈdi\u{32f}ẽ", None, &config), "ˈdi\u{32f}ẽ");
    }

    #[test]
    fn test_boundaries_untouched() {
        assert_eq!(run(&["~", "#"]), vec!["~", "#"]);
    }
}
