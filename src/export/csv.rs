//! CSV export of CNAME results.
//!
//! One row per chain entry: `domain,target`. No header row; rows end with
//! CRLF.

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;

use crate::cname::CnameMap;

/// Writes every `domain,target` row of `results` to `writer`.
///
/// # Returns
///
/// The number of rows written.
pub fn write_cname_rows<W: Write>(results: &CnameMap, writer: W) -> Result<usize> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    let mut rows = 0;
    for (domain, chain) in results {
        for target in chain {
            csv_writer
                .write_record([domain.as_str(), target.as_str()])
                .context("Failed to write CSV record")?;
            rows += 1;
        }
    }
    csv_writer.flush().context("Failed to flush CSV writer")?;
    Ok(rows)
}

/// Exports `results` to a CSV file at `path`.
///
/// # Returns
///
/// The number of rows written.
pub fn export_csv(results: &CnameMap, path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    write_cname_rows(results, file)
}
