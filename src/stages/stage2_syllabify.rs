use tracing::trace;

use crate::models::Syllable;
use crate::models::markers::marker_at;
use crate::rules::is_vowel;

/// Consonant clusters that may open a syllable as a whole
pub const ONSET_CLUSTERS: &[&str] = &[
    "tr", "dr", "pr", "br", "cr", "gr", "pl", "bl", "cl", "gl", "fl", "vr",
];

fn is_valid_onset(run: &[char]) -> bool {
    match run.len() {
        1 => true,
        2 => {
            let cluster: String = run.iter().collect();
            ONSET_CLUSTERS.contains(&cluster.as_str())
        }
        _ => false,
    }
}

/// Split a consonant run between the previous syllable's coda and the next onset.
///
/// Returns `(coda, onset)`. The caller only applies the coda when a previous
/// syllable exists.
fn split_consonant_run(run: &[char]) -> (String, String) {
    if run.len() <= 1 || is_valid_onset(run) {
        return (String::new(), run.iter().collect());
    }

    let split = (1..run.len())
        .find(|&i| is_valid_onset(&run[i..]))
        .unwrap_or(1);

    (run[..split].iter().collect(), run[split..].iter().collect())
}

/// Perform Stage 2: segment a marked word into syllables
///
/// Nuclei are two-character markers (matched first) or single vowel letters.
/// Consonants between nuclei are split with maximal valid onsets; a run at
/// the start of the word is always a whole onset, and a run at the end is the
/// last syllable's coda. A word without any nucleus yields no syllables.
pub fn syllabify(marked: &str) -> Vec<Syllable> {
    let chars: Vec<char> = marked.chars().collect();
    let mut syllables: Vec<Syllable> = Vec::new();
    let mut run: Vec<char> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let nucleus = match marker_at(&chars, pos) {
            Some(marker) => Some(marker.to_string()),
            None if is_vowel(chars[pos]) => Some(chars[pos].to_string()),
            None => None,
        };

        // Consonants accumulate until the next nucleus
        let Some(nucleus) = nucleus else {
            run.push(chars[pos]);
            pos += 1;
            continue;
        };
        pos += nucleus.chars().count();

        // Split the run between the previous coda and this onset
        let onset = match syllables.last_mut() {
            Some(previous) => {
                let (coda, onset) = split_consonant_run(&run);
                previous.coda = coda;
                onset
            }
            None => run.iter().collect(),
        };
        run.clear();

        syllables.push(Syllable::new(onset, nucleus));
    }

    // Trailing consonants close the word
    if let Some(last) = syllables.last_mut() {
        last.coda = run.iter().collect();
    }

    trace!("Syllabified {:?} into {} syllables", marked, syllables.len());
    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(syllables: &[Syllable]) -> Vec<(&str, &str, &str)> {
        syllables
            .iter()
            .map(|s| (s.onset.as_str(), s.nucleus.as_str(), s.coda.as_str()))
            .collect()
    }

    #[test]
    fn test_markers_are_atomic_nuclei() {
        let syllables = syllabify("dI4nt");
        assert_eq!(parts(&syllables), vec![("d", "I4", "nt")]);

        let syllables = syllabify("pA1en");
        assert_eq!(parts(&syllables), vec![("p", "A1", ""), ("", "e", "n")]);
    }

    #[test]
    fn test_cluster_split_prefers_valid_onset() {
        let syllables = syllabify("mA1stre");
        assert_eq!(parts(&syllables), vec![("m", "A1", "s"), ("tr", "e", "")]);

        let syllables = syllabify("issi");
        assert_eq!(parts(&syllables), vec![("", "i", "s"), ("s", "i", "")]);

        let syllables = syllabify("libre");
        assert_eq!(parts(&syllables), vec![("l", "i", ""), ("br", "e", "")]);
    }

    #[test]
    fn test_word_initial_run_stays_onset() {
        let syllables = syllabify("stra");
        assert_eq!(parts(&syllables), vec![("str", "a", "")]);
    }

    #[test]
    fn test_digraph_placeholder_is_consonant() {
        let syllables = syllabify("Cose");
        assert_eq!(parts(&syllables), vec![("C", "o", ""), ("s", "e", "")]);
    }

    #[test]
    fn test_no_nucleus_drops_word() {
        assert!(syllabify("brr").is_empty());
        assert!(syllabify("").is_empty());
    }

    #[test]
    fn test_skeleton_reconstructs_input() {
        for word in ["mA1stre", "esprit", "kant", "rE1s", "cU2r", "aa"] {
            let rebuilt: String = syllabify(word).iter().map(Syllable::full).collect();
            assert_eq!(rebuilt, word);
        }
    }
}
