//! Domain name normalization.
//!
//! Domain names compare case-insensitively and DNS presentation format carries
//! a trailing root dot (`www.example.com.`). Both are normalized away so input
//! keys and discovered CNAME targets share one spelling.

/// Normalizes a domain name: trims whitespace, strips trailing dots, lowercases.
///
/// The root name (`.`) normalizes to an empty string.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}
