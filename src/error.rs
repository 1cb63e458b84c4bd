//! Typed error surface for the seeding pipeline.
//!
//! Every failure is fatal to the run: a pipeline invocation either completes
//! and returns a [`RunSummary`](crate::RunSummary), or aborts with one of the
//! kinds below. There is no retry, skip-and-continue, or partial-success mode;
//! output is regenerated wholesale on every invocation, so callers recover by
//! fixing the input and re-running. Batch files sealed before the failure are
//! left on disk and cleaned up by the next run's directory preparation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The four failure kinds a seeding run can abort with.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Tabular input could not be read, or is missing the header row or any
    /// data rows.
    #[error("invalid tabular input {}: {reason}", .path.display())]
    InputFormat {
        /// Path of the offending input file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// A template file was missing or did not parse as JSON at load time.
    /// Raised before any output is produced.
    #[error("failed to load template {}: {reason}", .path.display())]
    TemplateLoad {
        /// Path of the offending template file.
        path: PathBuf,
        /// Read or parse detail.
        reason: String,
    },

    /// The post-substitution text no longer parses as JSON (most commonly an
    /// unescaped quote inside a substituted value), or strict placeholder
    /// checking found an unmatched `{{NAME}}` token.
    #[error("template substitution failed: {0}")]
    TemplateSubstitution(String),

    /// A filesystem operation on the output location failed: creating or
    /// clearing the directory, or writing a batch file.
    #[error("output I/O failed at {}: {source}", .path.display())]
    OutputIo {
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SeedError {
    pub(crate) fn output_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputIo {
            path: path.into(),
            source,
        }
    }
}
