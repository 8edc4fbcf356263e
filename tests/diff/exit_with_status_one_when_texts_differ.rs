use crate::common::command::{run_tdiff_command, workspace_dir_with_program_pair};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn exit_with_status_one_when_texts_differ(
    workspace_dir_with_program_pair: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_with_program_pair;

    run_tdiff_command(
        workspace_dir.path(),
        &["diff", "--exit-code", "old.txt", "new.txt"],
    )
    .assert()
    .code(1)
    .stdout(predicate::str::starts_with("@@ -1,9 +1,6 @@\n"));

    Ok(())
}

#[rstest]
fn exit_successfully_without_flag_even_when_texts_differ(
    workspace_dir_with_program_pair: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_with_program_pair;

    run_tdiff_command(workspace_dir.path(), &["stat", "old.txt", "new.txt"])
        .assert()
        .success();

    Ok(())
}
