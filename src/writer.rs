//! Batched JSONL output with output-directory lifecycle management.
//!
//! A [`BatchWriter`] owns one line buffer per output stream and the file
//! boundaries of the run:
//!
//! - **Directory preparation** happens once at construction, per
//!   [`OutputPolicy`]: either the whole tree is recreated, or only stale
//!   `*.jsonl` files are removed.
//! - **Row-aligned appends**: [`push_row`](BatchWriter::push_row) takes one
//!   line per stream, so paired streams always seal at the same row boundary
//!   and file `n` of every stream covers the same input range. Downstream
//!   import tooling relies on that pairing.
//! - **Sealing**: in batched mode a file is written and the buffer cleared
//!   whenever the threshold is reached; in single mode everything is written
//!   once at [`finish`](BatchWriter::finish).
//!
//! Files are newline-delimited JSON with no trailing newline. Already-sealed
//! files are never reopened or rolled back; an I/O failure aborts the run
//! and leaves them in place for the next run's directory preparation to
//! clear.

use crate::config::{BatchMode, OutputPolicy};
use crate::error::SeedError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-stream totals reported after a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    /// Stream name (file-name stem).
    pub stream: String,
    /// Total documents written across all files.
    pub documents: usize,
    /// Number of files the stream was split into.
    pub files: usize,
}

struct StreamBuffer {
    name: String,
    lines: Vec<String>,
    documents: usize,
    files: usize,
}

/// Accumulates serialized document lines per stream and flushes them to
/// sequentially numbered JSONL files.
pub struct BatchWriter {
    dir: PathBuf,
    mode: BatchMode,
    streams: Vec<StreamBuffer>,
    batch_number: usize,
}

impl BatchWriter {
    /// Prepare the output directory under `policy` and set up one buffer per
    /// stream name.
    ///
    /// # Errors
    /// Returns [`SeedError::OutputIo`] if the directory cannot be cleared or
    /// created.
    pub fn create(
        dir: impl Into<PathBuf>,
        policy: OutputPolicy,
        stream_names: &[String],
        mode: BatchMode,
    ) -> Result<Self, SeedError> {
        let dir = dir.into();
        prepare_output_dir(&dir, policy)?;
        let streams = stream_names
            .iter()
            .map(|name| StreamBuffer {
                name: name.clone(),
                lines: Vec::new(),
                documents: 0,
                files: 0,
            })
            .collect();
        Ok(Self {
            dir,
            mode,
            streams,
            batch_number: 1,
        })
    }

    /// Append one serialized document per stream for a single iteration.
    ///
    /// `lines` must hold exactly one line per stream, in stream order. In
    /// batched mode, reaching the threshold seals every stream under the
    /// current batch number before returning.
    ///
    /// # Errors
    /// Returns [`SeedError::OutputIo`] if sealing a full batch fails.
    pub fn push_row(&mut self, lines: Vec<String>) -> Result<(), SeedError> {
        debug_assert_eq!(lines.len(), self.streams.len(), "one line per stream");
        for (stream, line) in self.streams.iter_mut().zip(lines) {
            stream.lines.push(line);
        }
        if let BatchMode::Batched { max_lines } = self.mode
            && self.streams.first().is_some_and(|s| s.lines.len() >= max_lines)
        {
            self.seal_all()?;
        }
        Ok(())
    }

    /// Flush any unsealed remainder and return per-stream totals.
    ///
    /// In single mode this writes the one `<stream>.jsonl` file per stream
    /// (empty input yields empty files). In batched mode a final numbered
    /// file is written only if lines remain.
    ///
    /// # Errors
    /// Returns [`SeedError::OutputIo`] on any write failure.
    pub fn finish(mut self) -> Result<Vec<StreamSummary>, SeedError> {
        match self.mode {
            BatchMode::Single => {
                for stream in &mut self.streams {
                    let path = self.dir.join(format!("{}.jsonl", stream.name));
                    write_lines(&path, &stream.lines)?;
                    stream.documents += stream.lines.len();
                    stream.files += 1;
                    stream.lines.clear();
                    info!(stream = %stream.name, documents = stream.documents, "wrote stream file");
                }
            }
            BatchMode::Batched { .. } => {
                // Buffers stay length-aligned, so one emptiness check covers all.
                if self.streams.first().is_some_and(|s| !s.lines.is_empty()) {
                    self.seal_all()?;
                }
            }
        }
        Ok(self
            .streams
            .iter()
            .map(|s| StreamSummary {
                stream: s.name.clone(),
                documents: s.documents,
                files: s.files,
            })
            .collect())
    }

    fn seal_all(&mut self) -> Result<(), SeedError> {
        let n = self.batch_number;
        for stream in &mut self.streams {
            let path = self.dir.join(format!("{}-{n}.jsonl", stream.name));
            write_lines(&path, &stream.lines)?;
            stream.documents += stream.lines.len();
            stream.files += 1;
            debug!(stream = %stream.name, batch = n, lines = stream.lines.len(), "sealed batch");
            stream.lines.clear();
        }
        self.batch_number += 1;
        Ok(())
    }
}

/// Apply the directory lifecycle for `policy`.
fn prepare_output_dir(dir: &Path, policy: OutputPolicy) -> Result<(), SeedError> {
    match policy {
        OutputPolicy::Destructive => {
            if let Err(e) = fs::remove_dir_all(dir)
                && e.kind() != io::ErrorKind::NotFound
            {
                return Err(SeedError::output_io(dir, e));
            }
            fs::create_dir_all(dir).map_err(|e| SeedError::output_io(dir, e))?;
            info!(dir = %dir.display(), "recreated output directory");
        }
        OutputPolicy::Selective => {
            if dir.is_dir() {
                let pattern = dir.join("*.jsonl");
                let matches = glob::glob(&pattern.to_string_lossy())
                    .map_err(|e| SeedError::output_io(dir, io::Error::other(e)))?;
                let mut removed = 0usize;
                for entry in matches {
                    let path = entry.map_err(|e| SeedError::output_io(dir, io::Error::other(e)))?;
                    fs::remove_file(&path).map_err(|e| SeedError::output_io(&path, e))?;
                    removed += 1;
                }
                info!(dir = %dir.display(), removed, "cleared generated files from output directory");
            } else {
                fs::create_dir_all(dir).map_err(|e| SeedError::output_io(dir, e))?;
                info!(dir = %dir.display(), "created output directory");
            }
        }
    }
    Ok(())
}

/// Write `lines` joined by `\n`, with no trailing newline.
fn write_lines(path: &Path, lines: &[String]) -> Result<(), SeedError> {
    let file = File::create(path).map_err(|e| SeedError::output_io(path, e))?;
    let mut w = BufWriter::new(file);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            w.write_all(b"\n")
                .map_err(|e| SeedError::output_io(path, e))?;
        }
        w.write_all(line.as_bytes())
            .map_err(|e| SeedError::output_io(path, e))?;
    }
    w.flush().map_err(|e| SeedError::output_io(path, e))?;
    Ok(())
}
