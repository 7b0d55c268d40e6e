//! Line-oriented input lists.
//!
//! Domain lists, URL lists and resolver lists share one format: UTF-8 text,
//! one entry per line, surrounding whitespace ignored. Blank lines and lines
//! starting with `#` are skipped.

use std::path::Path;

/// Extracts the entries of a list from its text content.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads a list file.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or is not UTF-8.
pub async fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(parse_lines(&content))
}
