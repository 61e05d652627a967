use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("cannot open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading input")]
    Read(#[from] std::io::Error),

    #[error("invalid input on line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    #[error("unrecognized mode {0:?} (expected \"1\" or \"2\")")]
    UnrecognizedMode(String),
}

impl ScoreError {
    pub fn invalid(line: usize, reason: impl Into<String>) -> Self {
        ScoreError::InvalidInput {
            line,
            reason: reason.into(),
        }
    }
}
