use serde::{Deserialize, Serialize};

/// Primary stress glyph inserted before the stressed syllable
pub const STRESS_MARK: char = 'ˈ';

/// One syllable of a marked word.
///
/// `onset`, `nucleus` and `coda` are the only source of truth; the flattened
/// form is always derived with [`Syllable::full`], so later stages can
/// rewrite any field without a cached copy going stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Consonant letters before the nucleus (possibly empty)
    pub onset: String,
    /// A single vowel letter or one placeholder marker (never empty)
    pub nucleus: String,
    /// Consonant letters after the nucleus (possibly empty)
    pub coda: String,
}

impl Syllable {
    pub fn new(onset: impl Into<String>, nucleus: impl Into<String>) -> Self {
        Self {
            onset: onset.into(),
            nucleus: nucleus.into(),
            coda: String::new(),
        }
    }

    pub fn with_coda(mut self, coda: impl Into<String>) -> Self {
        self.coda = coda.into();
        self
    }

    /// `onset + nucleus + coda`
    pub fn full(&self) -> String {
        let mut full =
            String::with_capacity(self.onset.len() + self.nucleus.len() + self.coda.len());
        full.push_str(&self.onset);
        full.push_str(&self.nucleus);
        full.push_str(&self.coda);
        full
    }
}

/// Primary stress of a word, resolved once to an absolute syllable index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Stress {
    #[default]
    Unstressed,
    Syllable(usize),
}

impl Stress {
    pub fn index(&self) -> Option<usize> {
        match self {
            Stress::Unstressed => None,
            Stress::Syllable(i) => Some(*i),
        }
    }

    pub fn is_stressed(&self, index: usize) -> bool {
        self.index() == Some(index)
    }
}

/// A word token carried through the word-level stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// The normalized token as it appeared in the input
    pub source: String,
    /// The token after grapheme marking
    pub marked: String,
    /// Syllables in order; empty when the token has no nucleus
    pub syllables: Vec<Syllable>,
    /// Primary stress, assigned after nasalization
    pub stress: Stress,
}

impl Word {
    pub fn new(source: impl Into<String>, marked: impl Into<String>, syllables: Vec<Syllable>) -> Self {
        Self {
            source: source.into(),
            marked: marked.into(),
            syllables,
            stress: Stress::Unstressed,
        }
    }

    /// First syllable's onset, used for look-ahead across word boundaries
    pub fn first_onset(&self) -> Option<&str> {
        self.syllables.first().map(|s| s.onset.as_str())
    }
}
