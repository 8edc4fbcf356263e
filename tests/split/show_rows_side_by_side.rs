use crate::common::command::{run_tdiff_command, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_rows_side_by_side(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, "a\nb\nc", "a\nx\nc");

    let expected_output = "  a    |   a\n- b    |\n       | + x\n  c    |   c\n".to_string();
    let actual_output = run_tdiff_command(
        workspace_dir.path(),
        &["split", "--width", "6", "old.txt", "new.txt"],
    )
    .assert()
    .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
