//! Table-driven string rewriting.
//!
//! Every stage that rewrites text does so through an ordered list of
//! [`RewriteRule`]s. A rule matches a literal pattern, optionally constrained
//! by what follows it (and, for intervocalic rules, what precedes it). Context
//! characters are looked at but never consumed, so a following vowel can
//! still license the next match.
//!
//! Order inside a table is significant: later rules see the output of
//! earlier ones.

pub mod classes;
pub mod tables;

pub use classes::*;
pub use tables::*;

/// Where a rule is allowed to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// No restriction
    Anywhere,
    /// The character right after the pattern must be in the class
    FollowedBy(&'static [char]),
    /// Preceded by a member of `preceding` (optionally nasalized with a
    /// combining tilde) and followed by a member of `following`
    Between {
        preceding: &'static [char],
        following: &'static [char],
    },
}

/// A literal pattern → replacement rewrite with a context condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule {
    /// Human-readable name, used in trace logs
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub context: Context,
}

impl RewriteRule {
    pub const fn anywhere(name: &'static str, pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern,
            replacement,
            context: Context::Anywhere,
        }
    }

    pub const fn followed_by(
        name: &'static str,
        pattern: &'static str,
        replacement: &'static str,
        class: &'static [char],
    ) -> Self {
        Self {
            name,
            pattern,
            replacement,
            context: Context::FollowedBy(class),
        }
    }

    pub const fn between(
        name: &'static str,
        pattern: &'static str,
        replacement: &'static str,
        preceding: &'static [char],
        following: &'static [char],
    ) -> Self {
        Self {
            name,
            pattern,
            replacement,
            context: Context::Between {
                preceding,
                following,
            },
        }
    }
}

fn pattern_matches_at(chars: &[char], pos: usize, pattern: &[char]) -> bool {
    chars
        .get(pos..pos + pattern.len())
        .is_some_and(|window| window == pattern)
}

fn context_matches(chars: &[char], pos: usize, len: usize, context: &Context) -> bool {
    let followed_by = |class: &[char]| chars.get(pos + len).is_some_and(|c| class.contains(c));

    match context {
        Context::Anywhere => true,
        Context::FollowedBy(class) => followed_by(class),
        Context::Between {
            preceding,
            following,
        } => {
            let mut before = pos;
            if before > 0 && chars[before - 1] == NASAL_TILDE {
                before -= 1;
            }
            before > 0 && preceding.contains(&chars[before - 1]) && followed_by(following)
        }
    }
}

/// Apply one rule in a single left-to-right, non-overlapping pass
pub fn apply_rule(input: &str, rule: &RewriteRule) -> String {
    let pattern: Vec<char> = rule.pattern.chars().collect();
    if pattern.is_empty() {
        return input.to_string();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < chars.len() {
        if pattern_matches_at(&chars, pos, &pattern)
            && context_matches(&chars, pos, pattern.len(), &rule.context)
        {
            output.push_str(rule.replacement);
            pos += pattern.len();
        } else {
            output.push(chars[pos]);
            pos += 1;
        }
    }

    output
}

/// Apply every rule of a table in order, each over the whole string
pub fn apply_rules_seq(input: &str, rules: &[RewriteRule]) -> String {
    rules.iter().fold(input.to_string(), |text, rule| {
        let rewritten = apply_rule(&text, rule);
        if rewritten != text {
            tracing::trace!(rule = rule.name, before = %text, after = %rewritten, "rule applied");
        }
        rewritten
    })
}

/// Re-apply a rule until the text stops changing.
///
/// Fuel is bounded by the input length, which is enough for any rule whose
/// replacement does not reintroduce its own pattern.
pub fn apply_until_stable(input: &str, rule: &RewriteRule) -> String {
    let mut current = input.to_string();
    let mut fuel = input.chars().count() + 1;

    while fuel > 0 {
        let next = apply_rule(&current, rule);
        if next == current {
            break;
        }
        current = next;
        fuel -= 1;
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT: &[char] = &['e', 'i'];
    const VOW: &[char] = &['a', 'e', 'o'];

    #[test]
    fn test_anywhere_rule() {
        let rule = RewriteRule::anywhere("ch", "ch", "C");
        assert_eq!(apply_rule("chastel", &rule), "Castel");
        assert_eq!(apply_rule("bouche chose", &rule), "bouCe Cose");
    }

    #[test]
    fn test_followed_by_does_not_consume_context() {
        let rule = RewriteRule::followed_by("gu", "gu", "g", FRONT);
        assert_eq!(apply_rule("guerre", &rule), "gerre");
        assert_eq!(apply_rule("gua", &rule), "gua");
        assert_eq!(apply_rule("guigue", &rule), "gige");
    }

    #[test]
    fn test_between_accepts_nasal_tilde() {
        let rule = RewriteRule::between("t", "t", "θ", VOW, VOW);
        assert_eq!(apply_rule("ata", &rule), "aθa");
        assert_eq!(apply_rule("a\u{303}ta", &rule), "a\u{303}θa");
        assert_eq!(apply_rule("ta", &rule), "ta");
        assert_eq!(apply_rule("rta", &rule), "rta");
    }

    #[test]
    fn test_rules_apply_in_order() {
        let rules = [
            RewriteRule::anywhere("ll", "ll", "l"),
            RewriteRule::anywhere("l", "l", "L"),
        ];
        assert_eq!(apply_rules_seq("bella", &rules), "beLa");
    }

    #[test]
    fn test_until_stable_terminates() {
        let rule = RewriteRule::between("t", "t", "θ", VOW, VOW);
        assert_eq!(apply_until_stable("atatota", &rule), "aθaθoθa");
        assert_eq!(apply_until_stable("", &rule), "");
    }
}
