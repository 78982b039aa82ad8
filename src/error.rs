use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VpeakError {
    #[error("invalid {field} option {value:?}: {reason}")]
    InvalidOption {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("command not found: {}", path.display())]
    EngineNotFound { path: PathBuf },

    #[error("voicepeak command failed: {0}")]
    EngineExecutionFailed(String),

    #[error("wav file play failed: {0}")]
    PlaybackFailed(String),

    #[error("failed to delete {}: {source}", path.display())]
    CleanupFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading file ({}): {source}", path.display())]
    FileReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading directory ({}): {source}", path.display())]
    DirectoryReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not create output directory ({}): {source}", path.display())]
    OutputDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(&'static str),

    #[error("config error: {0}")]
    Config(String),
}

impl VpeakError {
    pub fn invalid(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        VpeakError::InvalidOption {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether a batch run may log this error and move on to the next file.
    pub fn is_batch_recoverable(&self) -> bool {
        matches!(
            self,
            VpeakError::InvalidOption { .. }
                | VpeakError::EngineExecutionFailed(_)
                | VpeakError::PlaybackFailed(_)
                | VpeakError::CleanupFailed { .. }
                | VpeakError::FileReadFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, VpeakError>;
