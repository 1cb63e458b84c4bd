//! Destructive single-file seeding profile.
//!
//! Regenerates `output/` wholesale: the directory is removed and recreated,
//! then one unnumbered JSONL file is written per stream. Suited to embedding
//! the generated files in a hotfix release for direct import.

use seedstream::{
    BatchMode, OutputPolicy, PlaceholderPolicy, SeedProfile, TemplateSpec, run,
};

fn profile() -> SeedProfile {
    SeedProfile {
        input_csv: "resources/seed-users.csv".into(),
        templates: vec![
            TemplateSpec::new(
                "grant-application-state",
                "resources/state-template.json",
            ),
            TemplateSpec::new(
                "grant-application-submissions",
                "resources/submission-template.json",
            ),
        ],
        output_dir: "output".into(),
        variants: vec!["adding-value".into(), "laying-hens".into()],
        output_policy: OutputPolicy::Destructive,
        batch_mode: BatchMode::Single,
        placeholder_policy: PlaceholderPolicy::PassThrough,
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    match run(&profile()) {
        Ok(summary) => print!("{summary}"),
        Err(err) => {
            eprintln!("fatal error during JSONL generation: {err}");
            std::process::exit(1);
        }
    }
}
