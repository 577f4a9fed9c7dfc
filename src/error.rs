use std::path::PathBuf;

use crate::space::ColorFormat;

/// Text that could not be read as a color in the expected format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("'{input}' is not a valid {format} color")]
    ParseRejected { format: ColorFormat, input: String },
}

impl ColorError {
    pub fn rejected(format: ColorFormat, input: &str) -> Self {
        ColorError::ParseRejected {
            format,
            input: input.to_string(),
        }
    }
}

/// Errors that end a command: config access and session I/O.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session I/O failed: {0}")]
    Session(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}
