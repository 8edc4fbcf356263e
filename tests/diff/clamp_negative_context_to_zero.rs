use crate::common::command::{run_tdiff_command, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn clamp_negative_context_to_zero(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, "a\nb\nc", "a\nx\nc");

    run_tdiff_command(
        workspace_dir.path(),
        &["diff", "-U", "-2", "old.txt", "new.txt"],
    )
    .assert()
    .success()
    .stdout("@@ -2,1 +2,1 @@\n-b\n+x\n");

    Ok(())
}
