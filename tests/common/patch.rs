/// Applies a header-less unified patch to `old` lines.
///
/// Context and deletions must match the old lines exactly; returns `None`
/// on any mismatch or malformed hunk.
pub fn apply_unified(old: &[String], patch: &str) -> Option<Vec<String>> {
    let mut result = Vec::new();
    let mut cursor = 0;
    let mut lines = patch.split_terminator('\n').peekable();

    while let Some(header) = lines.next() {
        let a_start = parse_old_start(header)?;
        let hunk_start = a_start.saturating_sub(1);
        if hunk_start < cursor || hunk_start > old.len() {
            return None;
        }
        result.extend_from_slice(&old[cursor..hunk_start]);
        cursor = hunk_start;

        while let Some(line) = lines.next_if(|line| !line.starts_with("@@")) {
            let (marker, text) = line.split_at(1);
            match marker {
                " " => {
                    if old.get(cursor)? != text {
                        return None;
                    }
                    result.push(text.to_string());
                    cursor += 1;
                }
                "-" => {
                    if old.get(cursor)? != text {
                        return None;
                    }
                    cursor += 1;
                }
                "+" => result.push(text.to_string()),
                _ => return None,
            }
        }
    }

    result.extend_from_slice(&old[cursor..]);
    Some(result)
}

fn parse_old_start(header: &str) -> Option<usize> {
    let ranges = header.strip_prefix("@@ -")?.strip_suffix(" @@")?;
    let (old, _new) = ranges.split_once(" +")?;
    let (start, _count) = old.split_once(',')?;
    start.parse().ok()
}
