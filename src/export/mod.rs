//! Export functionality for result mappings.
//!
//! Every JSON document this crate prints or writes goes through
//! `to_pretty_json` (4-space indentation, key order preserved). CNAME
//! results can additionally be flattened to CSV rows.

mod csv;
mod json;

pub use csv::{export_csv, write_cname_rows};
pub use json::{export_json, to_pretty_json, write_output_file};
