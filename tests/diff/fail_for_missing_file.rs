use crate::common::command::{run_tdiff_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_for_missing_file(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_tdiff_command(workspace_dir.path(), &["diff", "missing.txt", "other.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));

    Ok(())
}
