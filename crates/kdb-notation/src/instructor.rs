//! Instructor list (担当教員) splitting.

/// Splits a comma-separated instructor list, trimming names and dropping
/// empty entries.
pub fn split_instructors(text: &str) -> Vec<String> {
    text.split([',', '，'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
