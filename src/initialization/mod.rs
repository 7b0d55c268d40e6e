//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver (system or user-supplied nameservers)
//! - HTTP clients
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::{init_client, init_insecure_client};
pub use logger::init_logger_with;
pub use resolver::{
    init_resolver, load_nameservers, parse_nameserver, resolver_for_nameservers, system_resolver,
};
