/// Placeholder for the `ch`/`cch` digraph
pub const DIGRAPH_CH: &str = "C";
/// Placeholder for the `gn` digraph
pub const DIGRAPH_GN: &str = "G";

/// Two-character diphthong placeholders, in the order the marker assigns them
pub const DIPHTHONG_MARKERS: [&str; 10] = [
    "E1", "A1", "O1", "A2", "O2", "I2", "I3", "I4", "U1", "U2",
];

/// Two-character triphthong placeholders
pub const TRIPHTHONG_MARKERS: [&str; 3] = ["T1", "T2", "T3"];

/// Diphthong markers that nasalize by taking a literal `n` suffix
pub const N_SUFFIX_MARKERS: [&str; 5] = ["E1", "O1", "I4", "U1", "U2"];

/// Look up the marker starting at `chars[index]`, if any.
///
/// Markers are always two characters wide, so the syllabifier tries this
/// before falling back to a single vowel letter.
pub fn marker_at(chars: &[char], index: usize) -> Option<&'static str> {
    let (first, second) = (*chars.get(index)?, *chars.get(index + 1)?);
    DIPHTHONG_MARKERS
        .iter()
        .chain(TRIPHTHONG_MARKERS.iter())
        .find(|marker| {
            let mut m = marker.chars();
            m.next() == Some(first) && m.next() == Some(second)
        })
        .copied()
}

/// The marker a nucleus is built on, ignoring any nasal suffix or diacritic
pub fn nucleus_marker(nucleus: &str) -> Option<&'static str> {
    let chars: Vec<char> = nucleus.chars().collect();
    marker_at(&chars, 0)
}

/// Whether the nucleus is a triphthong placeholder
pub fn is_triphthong(nucleus: &str) -> bool {
    nucleus_marker(nucleus).is_some_and(|m| TRIPHTHONG_MARKERS.contains(&m))
}

/// Whether the nucleus is any multi-vowel placeholder (diphthong or triphthong)
pub fn is_marker_nucleus(nucleus: &str) -> bool {
    nucleus_marker(nucleus).is_some()
}
