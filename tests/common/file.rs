use assert_fs::TempDir;
use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&file_spec.path, file_spec.content).expect("Failed to write file");
}

/// Writes `old.txt` and `new.txt` into `dir`.
pub fn write_pair(dir: &TempDir, old: &str, new: &str) {
    write_file(FileSpec::new(dir.path().join("old.txt"), old.to_string()));
    write_file(FileSpec::new(dir.path().join("new.txt"), new.to_string()));
}

/// Random multi-line text built from lorem words.
pub fn generate_text(lines: usize) -> String {
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    (0..lines)
        .map(|_| Words(1..6).fake::<Vec<String>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
