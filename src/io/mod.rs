pub mod input;
pub mod output;

pub use input::*;
pub use output::*;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading input text or writing transcription files
#[derive(Error, Debug)]
pub enum TranscriptIoError {
    #[error("Failed to read file: {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize transcription: {0}")]
    Serialize(#[from] serde_json::Error),
}
