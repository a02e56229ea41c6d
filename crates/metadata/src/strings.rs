/// Split a comma-joined display string into trimmed, non-empty parts.
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Join parts into one comma-separated display string, dropping blanks.
/// Returns `None` when nothing remains.
pub fn join_comma_list(parts: &[String]) -> Option<String> {
    let joined: Vec<&str> = parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if joined.is_empty() {
        None
    } else {
        Some(joined.join(", "))
    }
}
