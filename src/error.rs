use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the word store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store: word '{0}' already exists")]
    AlreadyExists(String),

    #[error("store: word '{0}' does not exist")]
    NotFound(String),

    #[error("entry: {0}")]
    InvalidInput(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("cannot expand home directory in '{0}'")]
    HomeDir(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        StoreError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
