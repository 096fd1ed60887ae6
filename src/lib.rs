pub mod io;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod stages;

pub use io::{HumanTranscription, MachineTranscription, TranscriptIoError, read_utterances};
pub use models::{Stress, Syllable, Token, TokenizedUtterance, Word};
pub use pipeline::{PipelineConfig, Transcriber, Transcription, WordTrace, tokenize, transcribe};
pub use stages::{
    FinalRulesConfig, adjust_vowel_quality, apply_final_rules, assign_stress, build_word,
    decode_sequences, mark_sequences, nasalize, normalize, syllabify,
};
