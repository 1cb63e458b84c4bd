//! Selective batched seeding profile.
//!
//! Writes paired `state-documents-<n>.jsonl` / `submission-documents-<n>.jsonl`
//! batches of up to 10 000 lines into `upload/`, clearing only stale `*.jsonl`
//! files beforehand so unrelated content in the directory survives. File `n`
//! of both streams covers the same input range, which the import tooling
//! depends on.

use seedstream::{
    BatchMode, OutputPolicy, PlaceholderPolicy, SeedProfile, TemplateSpec, run,
};

const BATCH_SIZE: usize = 10_000;

fn profile() -> SeedProfile {
    SeedProfile {
        input_csv: "resources/import-users.csv".into(),
        templates: vec![
            TemplateSpec::new("state-documents", "resources/state-template.json"),
            TemplateSpec::new(
                "submission-documents",
                "resources/submission-template.json",
            ),
        ],
        output_dir: "upload".into(),
        variants: vec!["adding-value".into(), "laying-hens".into()],
        output_policy: OutputPolicy::Selective,
        batch_mode: BatchMode::Batched {
            max_lines: BATCH_SIZE,
        },
        placeholder_policy: PlaceholderPolicy::PassThrough,
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    match run(&profile()) {
        Ok(summary) => print!("{summary}"),
        Err(err) => {
            eprintln!("fatal error during batch generation: {err}");
            std::process::exit(1);
        }
    }
}
