use crate::common::command::{run_tdiff_command, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("x\ny", "y", "@@ -1,2 +1,1 @@\n-x\n y\n")]
#[case("the quick fox", "the slow fox", "@@ -1,1 +1,1 @@\n-the quick fox\n+the slow fox\n")]
#[case(
    "one two\nthree\n",
    "one 2\nthree\n",
    "@@ -1,3 +1,3 @@\n-one two\n+one 2\n three\n \n"
)]
fn show_word_changes_as_whole_lines(
    workspace_dir: TempDir,
    #[case] old: &str,
    #[case] new: &str,
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, old, new);

    run_tdiff_command(
        workspace_dir.path(),
        &["diff", "-g", "word", "old.txt", "new.txt"],
    )
    .assert()
    .success()
    .stdout(expected_output.to_string());

    Ok(())
}
