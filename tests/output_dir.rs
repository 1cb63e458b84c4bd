use anyhow::Result;
use seedstream::{BatchMode, BatchWriter, OutputPolicy};
use std::fs;

#[test]
fn destructive_mode_empties_a_preexisting_directory() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("out");
    fs::create_dir_all(dir.join("nested"))?;
    fs::write(dir.join("unrelated.txt"), "keep me? no")?;
    fs::write(dir.join("old-1.jsonl"), "{}")?;

    let w = BatchWriter::create(
        &dir,
        OutputPolicy::Destructive,
        &["docs".to_string()],
        BatchMode::Single,
    )?;
    // Directory exists and holds nothing before any write.
    let entries: Vec<_> = fs::read_dir(&dir)?.collect();
    assert!(entries.is_empty(), "expected empty directory");
    drop(w);
    Ok(())
}

#[test]
fn destructive_mode_tolerates_a_missing_directory() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("never-existed");

    BatchWriter::create(
        &dir,
        OutputPolicy::Destructive,
        &["docs".to_string()],
        BatchMode::Single,
    )?;
    assert!(dir.is_dir());
    Ok(())
}

#[test]
fn selective_mode_removes_only_generated_files() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("upload");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("state-documents-1.jsonl"), "{}")?;
    fs::write(dir.join("submission-documents-1.jsonl"), "{}")?;
    fs::write(dir.join("README.txt"), "hands off")?;

    BatchWriter::create(
        &dir,
        OutputPolicy::Selective,
        &["state-documents".to_string()],
        BatchMode::Batched { max_lines: 10 },
    )?;

    assert!(!dir.join("state-documents-1.jsonl").exists());
    assert!(!dir.join("submission-documents-1.jsonl").exists());
    assert_eq!(fs::read_to_string(dir.join("README.txt"))?, "hands off");
    Ok(())
}

#[test]
fn selective_mode_creates_a_missing_directory() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("upload");

    BatchWriter::create(
        &dir,
        OutputPolicy::Selective,
        &["docs".to_string()],
        BatchMode::Batched { max_lines: 10 },
    )?;
    assert!(dir.is_dir());
    Ok(())
}
