use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::TranscriptIoError;
use crate::models::{STRESS_MARK, Stress, Syllable};
use crate::pipeline::{Transcription, WordTrace};

/// Machine-readable output format
#[derive(Debug, Clone, Serialize)]
pub struct MachineTranscription<'a> {
    /// Per-utterance results in input order
    pub utterances: &'a [Transcription],
    /// Metadata about the processing
    pub metadata: TranscriptionMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionMetadata {
    pub total_utterances: usize,
    pub total_words: usize,
    /// Words with no nucleus, dropped from the output
    pub words_dropped: usize,
    pub stressed_words: usize,
}

impl TranscriptionMetadata {
    pub fn from_transcriptions(transcriptions: &[Transcription]) -> Self {
        let words = || transcriptions.iter().flat_map(|t| t.words.iter());
        Self {
            total_utterances: transcriptions.len(),
            total_words: words().count(),
            words_dropped: words().filter(|w| w.syllables.is_empty()).count(),
            stressed_words: words().filter(|w| w.ipa.contains(STRESS_MARK)).count(),
        }
    }
}

impl<'a> MachineTranscription<'a> {
    pub fn new(utterances: &'a [Transcription]) -> Self {
        Self {
            utterances,
            metadata: TranscriptionMetadata::from_transcriptions(utterances),
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<(), TranscriptIoError> {
        let file = std::fs::File::create(path).map_err(|source| TranscriptIoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Human-readable transcription format
pub struct HumanTranscription<'a> {
    utterances: &'a [Transcription],
}

impl<'a> HumanTranscription<'a> {
    pub fn new(utterances: &'a [Transcription]) -> Self {
        Self { utterances }
    }

    /// Format as text: the source line, its wrapped IPA, then one row per word
    pub fn format(&self) -> String {
        let mut output = String::new();

        for transcription in self.utterances {
            output.push_str(&format!("> {}\n", transcription.input));
            output.push_str(&wrap_text(&transcription.output, 80));
            output.push('\n');

            for word in &transcription.words {
                output.push_str(&format_word_row(word));
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<(), TranscriptIoError> {
        let write_err = |source: std::io::Error| TranscriptIoError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut file = std::fs::File::create(path).map_err(write_err)?;
        write!(file, "{}", self.format()).map_err(write_err)?;
        Ok(())
    }
}

/// Syllables joined with `.`, the stressed one prefixed with the stress glyph
pub fn format_syllables(syllables: &[Syllable], stress: Stress) -> String {
    syllables
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if stress.is_stressed(i) {
                format!("{STRESS_MARK}{}", s.full())
            } else {
                s.full()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn format_word_row(word: &WordTrace) -> String {
    let syllables = if word.syllables.is_empty() {
        "(no nucleus)".to_string()
    } else {
        format_syllables(&word.syllables, word.stress)
    };
    format!("  {:<16} {:<20} {}", word.source, syllables, word.ipa)
}

/// Wrap text at approximately the given width, counting characters
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word_len;
    }

    result
}
