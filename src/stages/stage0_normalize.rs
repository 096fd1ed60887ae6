use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::models::PAUSE_MARKER;

/// Punctuation that becomes a pause boundary
pub const PAUSE_PUNCTUATION: &[char] = &[',', '.', ':', ';', '»', '«'];

/// Apostrophes, removed outright
pub const APOSTROPHES: &[char] = &['\'', '’'];

/// Perform Stage 0: orthographic normalization
///
/// This stage:
/// 1. Composes the text to NFC so accented letters are single characters
/// 2. Lowercases it
/// 3. Drops apostrophes
/// 4. Replaces each pause punctuation mark with a space-padded `~`
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for c in text.nfc().flat_map(char::to_lowercase) {
        if APOSTROPHES.contains(&c) {
            continue;
        }
        if PAUSE_PUNCTUATION.contains(&c) {
            normalized.push(' ');
            normalized.push_str(PAUSE_MARKER);
            normalized.push(' ');
        } else {
            normalized.push(c);
        }
    }

    debug!("Normalized {:?} -> {:?}", text, normalized);
    normalized
}
