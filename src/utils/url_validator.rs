//! Destination URL validation.
//!
//! Destinations are stored exactly as supplied (after trimming surrounding
//! whitespace), so a redirect sends visitors where the creator asked.

use url::Url;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// Validates a destination URL and returns its trimmed form.
///
/// Rejects blank input, embedded control characters, unparsable or relative
/// URLs, non-HTTP(S) schemes such as `javascript:` or `file:`, and URLs
/// without a host.
///
/// The stored string ends up in a `Location` header verbatim, so characters
/// `Url::parse` would silently strip (tab, CR, LF) are rejected up front.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url(" https://example.com ").unwrap(), "https://example.com");
/// assert!(validate_url("ftp://example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed.to_string())
}
