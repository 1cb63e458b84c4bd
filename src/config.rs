//! Run-profile configuration.
//!
//! A seeding run takes everything it needs as one explicit [`SeedProfile`]
//! value: input path, template specs, output directory, variant keys, and the
//! behavioural knobs. There is no ambient global state, so the pipeline can
//! be driven against injected paths in tests.
//!
//! Profiles are compile-time constants of a given binary, not parsed
//! command-line options; see the binaries under `src/bin/` for the two
//! shipped profiles.

use std::path::PathBuf;

/// Where one template lives and which output stream its documents feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Output stream name; becomes the file-name stem of the stream's JSONL
    /// files (`<stream>.jsonl` or `<stream>-<n>.jsonl`).
    pub stream: String,
    /// Path to the JSON template file.
    pub path: PathBuf,
}

impl TemplateSpec {
    /// Pair a stream name with its template path.
    pub fn new(stream: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            stream: stream.into(),
            path: path.into(),
        }
    }
}

/// Output-directory lifecycle applied before any line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPolicy {
    /// Remove the whole directory tree (tolerating absence) and recreate it
    /// empty. Prior contents, related or not, are gone.
    Destructive,
    /// Keep the directory and delete only previously generated `*.jsonl`
    /// files, leaving unrelated content untouched. Creates the directory if
    /// it does not exist.
    Selective,
}

/// How generated lines map onto output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Accumulate everything and write exactly one `<stream>.jsonl` per
    /// stream at the end. Peak memory holds the full output.
    Single,
    /// Seal a numbered `<stream>-<n>.jsonl` (1-based `n`) every `max_lines`
    /// lines, bounding peak memory. All streams seal at the same row
    /// boundary so file `n` covers the same input range in every stream.
    Batched {
        /// Lines per sealed file.
        max_lines: usize,
    },
}

/// What to do with a `{{NAME}}` token that has no context value.
///
/// The original tool silently passed unmatched placeholders through to the
/// output; that stays the default for template compatibility, with strict
/// checking available as an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderPolicy {
    /// Leave the token verbatim in the output.
    #[default]
    PassThrough,
    /// Abort the run with a substitution error naming the token.
    Strict,
}

/// Everything one seeding run needs.
#[derive(Debug, Clone)]
pub struct SeedProfile {
    /// Comma-delimited input file with a header row.
    pub input_csv: PathBuf,
    /// Templates to expand, in stream order.
    pub templates: Vec<TemplateSpec>,
    /// Directory the JSONL files are written into.
    pub output_dir: PathBuf,
    /// Variant keys each record is multiplied against.
    pub variants: Vec<String>,
    /// Directory lifecycle before writing.
    pub output_policy: OutputPolicy,
    /// Single-file or batched output.
    pub batch_mode: BatchMode,
    /// Handling of unmatched placeholders.
    pub placeholder_policy: PlaceholderPolicy,
}
