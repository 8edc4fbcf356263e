use crate::common::command::{run_tdiff_command, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn read_new_side_from_stdin(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, "a\nb\nc", "unused");

    run_tdiff_command(workspace_dir.path(), &["diff", "old.txt", "-"])
        .write_stdin("a\nx\nc")
        .assert()
        .success()
        .stdout("@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n");

    Ok(())
}

#[rstest]
fn refuse_stdin_on_both_sides(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_tdiff_command(workspace_dir.path(), &["diff", "-", "-"])
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one side"));

    Ok(())
}
