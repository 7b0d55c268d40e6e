//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, defaults, endpoints)
//! - CLI option types and parsing
//! - Library configuration structs usable without clap

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Cli, CnameConfig, CnameOpt, Command, CrtOpt, HeadersConfig, HeadersOpt, LogFormat, LogLevel,
    MassdnsOpt,
};
