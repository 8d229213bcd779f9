//! Error types shared by the generators, the fixture writer and the verifier.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("i/o error at '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid recipe: {0}")]
    Recipe(String),
    #[error("json error")]
    Json(#[from] serde_json::Error),
    #[error("malformed artifact '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("fixture '{case}' does not match its oracle: {detail}")]
    Mismatch { case: String, detail: String },
}

impl FixtureError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, FixtureError::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
