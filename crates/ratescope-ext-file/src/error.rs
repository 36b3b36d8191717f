//! Errors raised while reading rate history files.

use std::path::PathBuf;

use ratescope_core::ScopeError;
use thiserror::Error;

/// Rate history file error.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File could not be opened or read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A required header is absent.
    #[error("Missing column '{column}' (found: {})", .found.join(", "))]
    MissingColumn {
        /// Header that was looked for.
        column: String,
        /// Headers actually present.
        found: Vec<String>,
    },

    /// A row could not be read or a field could not be parsed.
    #[error("Parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number in the file.
        line: u64,
        /// What went wrong.
        reason: String,
    },
}

impl SourceError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

impl From<SourceError> for ScopeError {
    fn from(err: SourceError) -> Self {
        ScopeError::input(err.to_string())
    }
}
