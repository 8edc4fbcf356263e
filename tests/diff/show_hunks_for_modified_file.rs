use crate::common::command::{
    diff_hunks_output, run_tdiff_command, workspace_dir_with_program_pair,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_hunks_for_modified_file(
    workspace_dir_with_program_pair: TempDir,
    diff_hunks_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_with_program_pair;

    let actual_output = run_tdiff_command(workspace_dir.path(), &["diff", "old.txt", "new.txt"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, diff_hunks_output);

    Ok(())
}
