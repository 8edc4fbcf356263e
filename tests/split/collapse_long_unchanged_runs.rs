use crate::common::command::{run_tdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

fn numbered_lines() -> String {
    (1..=10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n")
}

#[rstest]
fn collapse_long_unchanged_runs(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old = numbered_lines();
    write_pair(&workspace_dir, &old, &old.replace('5', "five"));

    let mut cmd = run_tdiff_command(
        workspace_dir.path(),
        &["split", "-U", "1", "--width", "30", "old.txt", "new.txt"],
    );
    let stdout = stdout_of(&mut cmd)?;

    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 8);
    assert!(lines[1].contains("… 2 unchanged lines …"));
    assert!(lines[3].starts_with("- 5"));
    assert!(lines[4].ends_with("+ five"));
    assert!(lines[6].contains("… 3 unchanged lines …"));

    Ok(())
}

#[rstest]
fn keep_every_row_without_collapse(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = numbered_lines();
    write_pair(&workspace_dir, &old, &old.replace('5', "five"));

    let mut cmd = run_tdiff_command(
        workspace_dir.path(),
        &["split", "-U", "1", "--no-collapse", "old.txt", "new.txt"],
    );
    let stdout = stdout_of(&mut cmd)?;

    assert_eq!(stdout.lines().count(), 11);
    assert!(!stdout.contains("unchanged lines"));

    Ok(())
}
