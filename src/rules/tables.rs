//! Fixed rule tables, one per rewriting stage.

use super::RewriteRule;
use super::classes::{FRONT_VOWELS, GU_FRONT_VOWELS, PLAIN_VOWELS, VOWELS};
use crate::models::markers::{DIGRAPH_CH, DIGRAPH_GN};

/// Grapheme marking: digraphs, then `gu`/`qu`, then diphthongs, then triphthongs.
///
/// `ieu` appears twice: the `I2` rule consumes every `ieu`
/// present at that point; the `T2` rule only sees what survives.
pub const MARKER_RULES: &[RewriteRule] = &[
    RewriteRule::anywhere("cch → C", "cch", DIGRAPH_CH),
    RewriteRule::anywhere("ch → C", "ch", DIGRAPH_CH),
    RewriteRule::anywhere("gn → G", "gn", DIGRAPH_GN),
    RewriteRule::followed_by("gu → g / _[ei]", "gu", "g", GU_FRONT_VOWELS),
    RewriteRule::followed_by("qu → k / _V", "qu", "k", PLAIN_VOWELS),
    RewriteRule::anywhere("ei → E1", "ei", "E1"),
    RewriteRule::anywhere("ai → A1", "ai", "A1"),
    RewriteRule::anywhere("oi → O1", "oi", "O1"),
    RewriteRule::anywhere("au → A2", "au", "A2"),
    RewriteRule::anywhere("ou → O2", "ou", "O2"),
    RewriteRule::anywhere("ieu → I2", "ieu", "I2"),
    RewriteRule::anywhere("iu → I3", "iu", "I3"),
    RewriteRule::anywhere("ie → I4", "ie", "I4"),
    RewriteRule::anywhere("ui → U1", "ui", "U1"),
    RewriteRule::anywhere("ue → U2", "ue", "U2"),
    RewriteRule::anywhere("eau → T1", "eau", "T1"),
    RewriteRule::anywhere("ieu → T2", "ieu", "T2"),
    RewriteRule::anywhere("ueu → T3", "ueu", "T3"),
];

/// Nasalized marker sequences; must run before [`DECODER_RULES`]
pub const NASAL_DECODER_RULES: &[RewriteRule] = &[
    RewriteRule::anywhere("E1n → ẽi̯", "E1n", "ẽi\u{32f}"),
    RewriteRule::anywhere("O1n → õi̯", "O1n", "õi\u{32f}"),
    RewriteRule::anywhere("I4n → i̯ẽ", "I4n", "i\u{32f}ẽ"),
    RewriteRule::anywhere("U1n → ɥĩ", "U1n", "ɥĩ"),
    RewriteRule::anywhere("U2n → wẽ", "U2n", "wẽ"),
];

/// Placeholder → IPA. Glides avoid `j` and `u`, which the final rules rewrite.
pub const DECODER_RULES: &[RewriteRule] = &[
    RewriteRule::anywhere("C → tʃ", DIGRAPH_CH, "tʃ"),
    RewriteRule::anywhere("G → ɲ", DIGRAPH_GN, "ɲ"),
    RewriteRule::anywhere("E1 → ei̯", "E1", "ei\u{32f}"),
    RewriteRule::anywhere("A1 → ai̯", "A1", "ai\u{32f}"),
    RewriteRule::anywhere("O1 → oi̯", "O1", "oi\u{32f}"),
    RewriteRule::anywhere("A2 → aw", "A2", "aw"),
    RewriteRule::anywhere("O2 → ow", "O2", "ow"),
    RewriteRule::anywhere("I2 → i̯ew", "I2", "i\u{32f}ew"),
    RewriteRule::anywhere("I3 → iw", "I3", "iw"),
    RewriteRule::anywhere("I4 → i̯e", "I4", "i\u{32f}e"),
    RewriteRule::anywhere("U1 → ɥi", "U1", "ɥi"),
    RewriteRule::anywhere("U2 → we", "U2", "we"),
    RewriteRule::anywhere("T1 → eaw", "T1", "eaw"),
    RewriteRule::anywhere("T2 → i̯ɛw", "T2", "i\u{32f}ɛw"),
    RewriteRule::anywhere("T3 → wɛw", "T3", "wɛw"),
    RewriteRule::anywhere("z → ts", "z", "ts"),
];

/// `nt` before a vowel loses its `t`
pub const NT_BEFORE_VOWEL: RewriteRule =
    RewriteRule::followed_by("nt → n / _V", "nt", "n", VOWELS);

/// Intervocalic `t`, applied until stable
pub const INTERVOCALIC_T: RewriteRule =
    RewriteRule::between("t → θ / V_V", "t", "θ", VOWELS, VOWELS);

/// Remaining letter → IPA substitutions, in application order
pub const FINAL_SUBSTITUTIONS: &[RewriteRule] = &[
    RewriteRule::anywhere("ll → l", "ll", "l"),
    RewriteRule::anywhere("j → dʒ", "j", "dʒ"),
    RewriteRule::anywhere("é → e", "é", "e"),
    RewriteRule::between("d → ð / V_V", "d", "ð", VOWELS, VOWELS),
    RewriteRule::followed_by("c → tʃ / _a", "c", "tʃ", &['a']),
    RewriteRule::followed_by("c → ts / _[front]", "c", "ts", FRONT_VOWELS),
    RewriteRule::followed_by("g → dʒ / _[front]", "g", "dʒ", FRONT_VOWELS),
    RewriteRule::anywhere("qu → k", "qu", "k"),
    RewriteRule::anywhere("ï → i", "ï", "i"),
    RewriteRule::anywhere("ë → e", "ë", "e"),
    RewriteRule::anywhere("ä → a", "ä", "a"),
    RewriteRule::anywhere("ü → u", "ü", "u"),
    RewriteRule::anywhere("ö → o", "ö", "o"),
    RewriteRule::anywhere("ç → ts", "ç", "ts"),
    RewriteRule::anywhere("q → k", "q", "k"),
    RewriteRule::anywhere("u → y", "u", "y"),
    RewriteRule::anywhere("c → k", "c", "k"),
    RewriteRule::anywhere("g → ɡ", "g", "ɡ"),
];
