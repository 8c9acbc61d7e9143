use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing the post file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a JSON array of posts.
    #[error("corrupt post file at {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// The largest stored id is `u64::MAX`; no id is left to assign.
    #[error("post ids exhausted")]
    IdsExhausted,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
