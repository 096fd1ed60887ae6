use serde::Serialize;
use tracing::{debug, info};

use crate::models::{PAUSE_MARKER, Stress, Syllable, Token, TokenizedUtterance, Word, is_boundary};
use crate::stages::{
    FinalRulesConfig, NasalizationResult, adjust_vowel_quality, apply_final_rules, assign_stress,
    build_word, decode_sequences, mark_sequences, nasalize, normalize, syllabify,
};

/// Configuration for the whole pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Wrap the output in `~ … ~` boundary markers
    pub wrap_boundaries: bool,
    /// Stage 6 settings
    pub final_rules: FinalRulesConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            wrap_boundaries: true,
            final_rules: FinalRulesConfig::default(),
        }
    }
}

/// Everything the pipeline produced for one word token
#[derive(Debug, Clone, Serialize)]
pub struct WordTrace {
    /// Normalized source token
    pub source: String,
    /// Token after grapheme marking
    pub marked: String,
    /// Syllables after nasalization and vowel quality adjustment
    pub syllables: Vec<Syllable>,
    pub stress: Stress,
    /// Built and decoded word, before the final rules
    pub decoded: String,
    /// Final IPA; empty when the word had no nucleus and was dropped
    pub ipa: String,
}

/// Result of running the pipeline over one utterance
#[derive(Debug, Clone, Serialize)]
pub struct Transcription {
    pub input: String,
    pub normalized: String,
    pub tokens: Vec<Token>,
    pub words: Vec<WordTrace>,
    pub nasalization: NasalizationResult,
    /// The IPA string
    pub output: String,
}

/// Split normalized text into tagged tokens, marking and syllabifying each word.
///
/// Tokens and words are built in one pass, so every `Token::Word` index
/// refers to its own entry in `words`.
pub fn tokenize(normalized: &str) -> TokenizedUtterance {
    let mut utterance = TokenizedUtterance::default();

    for raw in normalized.split_whitespace() {
        if is_boundary(raw) {
            utterance.tokens.push(Token::Boundary(raw.to_string()));
            continue;
        }

        let marked = mark_sequences(raw);
        let syllables = syllabify(&marked);
        utterance.tokens.push(Token::Word(utterance.words.len()));
        utterance.words.push(Word::new(raw, marked, syllables));
    }

    utterance
}

/// Runs the Old French → IPA pipeline
#[derive(Debug, Clone, Default)]
pub struct Transcriber {
    config: PipelineConfig,
}

impl Transcriber {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Transcribe one utterance, keeping per-word intermediate forms
    pub fn run(&self, text: &str) -> Transcription {
        let normalized = normalize(text);
        let mut utterance = tokenize(&normalized);
        info!(
            "Tokenized {} words, {} boundaries",
            utterance.word_count(),
            utterance.boundary_count()
        );

        let nasalization = nasalize(&mut utterance.words);
        info!(
            "Nasalized {} nuclei ({} nasals moved, {} deleted)",
            nasalization.nuclei_nasalized, nasalization.nasals_donated, nasalization.nasals_deleted
        );

        let decoded: Vec<String> = utterance
            .words
            .iter_mut()
            .map(|word| {
                word.stress = assign_stress(&word.syllables);
                adjust_vowel_quality(&mut word.syllables, word.stress);
                decode_sequences(&build_word(&word.syllables, word.stress))
            })
            .collect();

        // Words without syllables are dropped from the stream.
        let (positions, stream): (Vec<Option<usize>>, Vec<String>) = utterance
            .tokens
            .iter()
            .filter_map(|token| match token {
                Token::Boundary(marker) => Some((None, marker.clone())),
                Token::Word(index) if decoded[*index].is_empty() => None,
                Token::Word(index) => Some((Some(*index), decoded[*index].clone())),
            })
            .unzip();
        debug!("Reassembled stream: {:?}", stream);

        let finished = apply_final_rules(&stream, &self.config.final_rules);

        let mut ipa = vec![String::new(); utterance.words.len()];
        for (position, text) in positions.iter().zip(&finished) {
            if let Some(index) = position {
                ipa[*index] = text.clone();
            }
        }

        let inner = finished.join(" ");
        let output = match (self.config.wrap_boundaries, inner.is_empty()) {
            (false, _) => inner,
            (true, true) => format!("{PAUSE_MARKER} {PAUSE_MARKER}"),
            (true, false) => format!("{PAUSE_MARKER} {inner} {PAUSE_MARKER}"),
        };

        let words = utterance
            .words
            .into_iter()
            .zip(decoded)
            .zip(ipa)
            .map(|((word, decoded), ipa)| WordTrace {
                source: word.source,
                marked: word.marked,
                syllables: word.syllables,
                stress: word.stress,
                decoded,
                ipa,
            })
            .collect();

        Transcription {
            input: text.to_string(),
            normalized,
            tokens: utterance.tokens,
            words,
            nasalization,
            output,
        }
    }
}

/// Transcribe Old French text to IPA with the default configuration
pub fn transcribe(text: &str) -> String {
    Transcriber::default().run(text).output
}
