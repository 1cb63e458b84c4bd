//! The expansion driver: records × variants × templates → JSONL streams.
//!
//! [`run`] is the whole pipeline as one function returning a structured
//! [`RunSummary`]; the binaries only translate its result into an exit code.
//! Input is read and all templates are loaded before the output directory is
//! touched, so a malformed input produces zero output files.
//!
//! Iteration order is outer loop over records, inner loop over variants.
//! Exactly one clock read and one reference generation happen per iteration,
//! and every template is expanded with that same context, so documents
//! sharing a (record, variant) pair carry byte-identical `TIMESTAMP` and
//! `REFERENCE_NUMBER` values across streams so they can be correlated
//! downstream.

use crate::config::SeedProfile;
use crate::error::SeedError;
use crate::expand::{SubstitutionContext, expand};
use crate::tabular::read_records;
use crate::template::TemplateStore;
use crate::writer::{BatchWriter, StreamSummary};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use tracing::info;
use uuid::Uuid;

/// Context key carrying the variant code of the current iteration.
pub const VARIANT_KEY: &str = "GRANT_CODE";
/// Context key carrying the per-iteration generation timestamp.
pub const TIMESTAMP_KEY: &str = "TIMESTAMP";
/// Context key carrying the per-iteration correlation reference.
pub const REFERENCE_KEY: &str = "REFERENCE_NUMBER";

/// Counts reported after a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Input records consumed.
    pub records: usize,
    /// Variant keys each record was multiplied against.
    pub variants: usize,
    /// Per-stream document and file totals.
    pub streams: Vec<StreamSummary>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "JSONL generation complete: {} record(s) x {} variant(s)",
            self.records, self.variants
        )?;
        for s in &self.streams {
            writeln!(
                f,
                "  {}: {} document(s) across {} file(s)",
                s.stream, s.documents, s.files
            )?;
        }
        Ok(())
    }
}

/// Execute one full seeding run described by `profile`.
///
/// Emits R×K documents per template for R records and K variants, in
/// iteration order, into the profile's output directory.
///
/// # Errors
/// - [`SeedError::InputFormat`] — input unreadable or missing header/data rows
/// - [`SeedError::TemplateLoad`] — template missing or not valid JSON
/// - [`SeedError::TemplateSubstitution`] — substituted text fails to reparse,
///   or strict mode found an unmatched placeholder
/// - [`SeedError::OutputIo`] — any output filesystem failure
pub fn run(profile: &SeedProfile) -> Result<RunSummary, SeedError> {
    let records = read_records(&profile.input_csv)?;
    info!(
        records = records.len(),
        input = %profile.input_csv.display(),
        "loaded tabular input"
    );

    let store = TemplateStore::load(&profile.templates)?;
    info!(templates = store.len(), "loaded document templates");

    let stream_names = store.stream_names();
    let mut writer = BatchWriter::create(
        &profile.output_dir,
        profile.output_policy,
        &stream_names,
        profile.batch_mode,
    )?;

    for record in &records {
        for variant in &profile.variants {
            // One clock read and one reference per iteration; every template
            // sees the same context so paired documents stay correlated.
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            let reference = Uuid::new_v4().to_string();

            let mut ctx = SubstitutionContext::new();
            for (name, value) in record.fields() {
                ctx.set(name, value);
            }
            ctx.set(VARIANT_KEY, variant.as_str());
            ctx.set(TIMESTAMP_KEY, timestamp);
            ctx.set(REFERENCE_KEY, reference);

            let mut row = Vec::with_capacity(store.len());
            for template in store.templates() {
                let doc = expand(template.value(), &ctx, profile.placeholder_policy)?;
                row.push(doc.to_string());
            }
            writer.push_row(row)?;
        }
    }

    let streams = writer.finish()?;
    let summary = RunSummary {
        records: records.len(),
        variants: profile.variants.len(),
        streams,
    };
    info!(
        records = summary.records,
        variants = summary.variants,
        "seeding run complete"
    );
    Ok(summary)
}
