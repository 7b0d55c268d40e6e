//! Pretty JSON output.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::config::JSON_INDENT;

/// Serializes `value` as pretty JSON with 4-space indentation.
///
/// Maps keep their iteration order, so an `IndexMap` is emitted in insertion
/// order. An empty map is rendered as `{}`.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize results as JSON")?;
    String::from_utf8(buffer).context("Serialized JSON is not valid UTF-8")
}

/// Writes already rendered output to `path`, replacing any existing file.
pub async fn write_output_file(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// Exports `value` as pretty JSON to `path`.
pub async fn export_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = to_pretty_json(value)?;
    write_output_file(path, &json).await
}
