//! URL validation and normalization for the headers fetcher.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix if no http(s) scheme is present, then checks that
/// the result parses and stays within `MAX_URL_LENGTH`. Logs a warning and
/// returns `None` for anything unusable.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let normalized = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        let preview: String = normalized.chars().take(50).collect();
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            preview
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Some(normalized),
        Ok(_) => {
            warn!("Skipping URL without a host: {url}");
            None
        }
        Err(e) => {
            warn!("Skipping invalid URL {url}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn test_bare_host_gets_https() {
        assert_eq!(
            validate_and_normalize_url("example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(
            validate_and_normalize_url("http://example.com/path"),
            Some("http://example.com/path".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("https://example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert_eq!(validate_and_normalize_url("exa mple.com"), None);
        assert_eq!(validate_and_normalize_url("https://"), None);
    }

    #[test]
    fn test_overlong_url_is_rejected() {
        let long = format!("{}.com", "a".repeat(3000));
        assert_eq!(validate_and_normalize_url(&long), None);
    }
}
