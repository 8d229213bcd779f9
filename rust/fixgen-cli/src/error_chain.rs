//! Error types for the CLI and cause-chain rendering.
//!
//! [`CliError`] is what every command returns. [`ErrorChain`] walks its
//! `source()` links so the user sees the failing path and the underlying
//! OS error on separate "caused by:" lines.

use fixgen_core::FixtureError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("cannot read config '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("'{}' already exists, not overwriting", .0.display())]
    AlreadyExists(PathBuf),
    #[error("{failed} of {total} fixture(s) failed verification")]
    VerifyFailed { failed: usize, total: usize },
}

impl CliError {
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Fixture(e) if e.is_usage())
    }
}

// =============================================================================
// ErrorChain
// =============================================================================

/// A primary message plus the ordered chain of underlying causes.
#[derive(Debug, Clone)]
pub struct ErrorChain {
    pub primary: String,
    pub causes: Vec<String>,
}

impl ErrorChain {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            causes: Vec::new(),
        }
    }

    pub fn caused_by(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Render with a custom prefix, e.g. a colored `error:`.
    ///
    /// ```text
    /// error: <primary message>
    ///   caused by: <cause 1>
    /// ```
    pub fn format_with_prefix(&self, prefix: &str) -> String {
        let mut out = format!("{} {}", prefix, self.primary);
        for cause in &self.causes {
            out.push_str(&format!("\n  caused by: {}", cause));
        }
        out
    }

    pub fn format_for_display(&self) -> String {
        self.format_with_prefix("error:")
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        for cause in &self.causes {
            write!(f, "\n  caused by: {}", cause)?;
        }
        Ok(())
    }
}

/// Walk a `std::error::Error` source chain into an [`ErrorChain`].
pub fn chain_from_error(err: &dyn std::error::Error) -> ErrorChain {
    let mut chain = ErrorChain::new(err.to_string());
    let mut source = err.source();
    while let Some(cause) = source {
        chain = chain.caused_by(cause.to_string());
        source = cause.source();
    }
    chain
}
