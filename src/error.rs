use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::models::{MAX_MESSAGE_LEN, MAX_POSTED_BY_LEN, MIN_MESSAGE_LEN};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("message is {len} characters, the minimum is {}", MIN_MESSAGE_LEN)]
    MessageTooShort { len: usize },

    #[error("message is {len} characters, the maximum is {}", MAX_MESSAGE_LEN)]
    MessageTooLong { len: usize },

    #[error("author is {len} characters, the maximum is {}", MAX_POSTED_BY_LEN)]
    PostedByTooLong { len: usize },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("board not found at {0}")]
    Missing(PathBuf),

    #[error("failed to lock board: {0}")]
    Lock(#[source] io::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize thoughts: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("invalid thought {message:?}: {reason}")]
    Validation {
        message: String,
        #[source]
        reason: ValidationError,
    },

    #[error("could not save thought {message:?}: {source}")]
    Creation {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("thought {id} was saved, but the board could not be reloaded: {source}")]
    Refresh {
        id: String,
        #[source]
        source: StoreError,
    },

    #[error("Thought not found: {id}")]
    NotFound { id: String },

    #[error("page must be a positive integer, got {0}")]
    InvalidPage(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BoardError {
    /// Whether the caller caused this failure, as opposed to the board itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BoardError::Validation { .. } | BoardError::NotFound { .. } | BoardError::InvalidPage(_)
        )
    }
}

/// JSON error body returned in place of a listing or thought.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: String,
}

impl From<&BoardError> for ErrorBody {
    fn from(err: &BoardError) -> Self {
        match err {
            BoardError::Validation { reason, .. } => Self {
                message: Some("Could not save thought".to_string()),
                error: reason.to_string(),
            },
            BoardError::Creation { source, .. } => Self {
                message: Some("Could not save thought".to_string()),
                error: source.to_string(),
            },
            BoardError::Refresh { source, .. } => Self {
                message: Some("Thought saved, but the board could not be reloaded".to_string()),
                error: source.to_string(),
            },
            BoardError::NotFound { .. } => Self {
                message: None,
                error: "Thought not found.".to_string(),
            },
            other => Self {
                message: None,
                error: other.to_string(),
            },
        }
    }
}
