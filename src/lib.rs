//! # Seedstream
//!
//! A **bulk seed-data generator** for document stores. Seedstream combines a
//! tabular list of subject identifiers with JSON document templates and
//! writes newline-delimited JSON (JSONL) files ready for direct bulk import:
//! synthetic-but-realistic records for performance testing and hotfix data
//! migration, without going through the target system's own write API.
//!
//! ## Pipeline
//!
//! - **Tabular Reader** — parse a comma-delimited identifier list with a
//!   header row into records
//! - **Template Store** — load immutable JSON templates, one per output
//!   stream
//! - **Placeholder Expander** — substitute `{{NAME}}` tokens via
//!   serialize → literal multi-replace → reparse (partial-string
//!   placeholders work)
//! - **Expansion Driver** — iterate records × variant keys, one fresh
//!   timestamp and reference per iteration shared across all templates
//! - **Batched Writer** — clear-or-create the output directory and seal
//!   size-bounded, sequentially numbered JSONL files
//!
//! ## Quick Start
//!
//! ```no_run
//! use seedstream::*;
//!
//! # fn main() -> Result<(), SeedError> {
//! let profile = SeedProfile {
//!     input_csv: "resources/seed-users.csv".into(),
//!     templates: vec![
//!         TemplateSpec::new("state-documents", "resources/state-template.json"),
//!         TemplateSpec::new("submission-documents", "resources/submission-template.json"),
//!     ],
//!     output_dir: "output".into(),
//!     variants: vec!["adding-value".into(), "laying-hens".into()],
//!     output_policy: OutputPolicy::Destructive,
//!     batch_mode: BatchMode::Batched { max_lines: 10_000 },
//!     placeholder_policy: PlaceholderPolicy::PassThrough,
//! };
//!
//! let summary = run(&profile)?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Guarantees
//!
//! - Output line order equals record × variant iteration order
//! - Documents from one iteration share byte-identical reference and
//!   timestamp values across streams
//! - Paired streams seal at the same row boundary, so file `n` of every
//!   stream covers the same input range
//! - Every failure is fatal: a run completes fully or exits non-zero with
//!   no partial-output cleanup (sealed files are cleared by the next run)
//!
//! ## Module Overview
//!
//! - [`config`] — the [`SeedProfile`] run configuration value object
//! - [`tabular`] — naive comma-delimited input reader
//! - [`template`] — template loading and storage
//! - [`expand`] — placeholder substitution and the escaping contract
//! - [`driver`] — the record × variant × template expansion loop
//! - [`writer`] — directory lifecycle and batched JSONL sealing
//! - [`error`] — the typed [`SeedError`] failure kinds

pub mod config;
pub mod driver;
pub mod error;
pub mod expand;
pub mod tabular;
pub mod template;
pub mod writer;

pub use config::{BatchMode, OutputPolicy, PlaceholderPolicy, SeedProfile, TemplateSpec};
pub use driver::{REFERENCE_KEY, RunSummary, TIMESTAMP_KEY, VARIANT_KEY, run};
pub use error::SeedError;
pub use expand::{SubstitutionContext, escape_json_fragment, expand};
pub use tabular::{Record, read_records};
pub use template::{Template, TemplateStore};
pub use writer::{BatchWriter, StreamSummary};
