//! Redirect entity mapping a short id to its destination.

/// A stored redirect record.
///
/// `clicks` only ever grows; it is incremented once per successful visit.
/// `enabled` is persisted and returned to clients but does not gate redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub id: String,
    pub url: String,
    pub clicks: i64,
    pub enabled: bool,
}

impl Redirect {
    /// Creates a new Redirect instance.
    pub fn new(id: String, url: String, clicks: i64, enabled: bool) -> Self {
        Self {
            id,
            url,
            clicks,
            enabled,
        }
    }
}

/// Input data for inserting a redirect. Clicks always start at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRedirect {
    pub id: String,
    pub url: String,
    pub enabled: bool,
}

impl From<NewRedirect> for Redirect {
    fn from(new_redirect: NewRedirect) -> Self {
        Redirect::new(new_redirect.id, new_redirect.url, 0, new_redirect.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_creation() {
        let redirect = Redirect::new(
            "aB3xY".to_string(),
            "https://example.com".to_string(),
            7,
            true,
        );

        assert_eq!(redirect.id, "aB3xY");
        assert_eq!(redirect.url, "https://example.com");
        assert_eq!(redirect.clicks, 7);
        assert!(redirect.enabled);
    }

    #[test]
    fn test_new_redirect_starts_with_zero_clicks() {
        let redirect: Redirect = NewRedirect {
            id: "qWeRt".to_string(),
            url: "https://rust-lang.org".to_string(),
            enabled: false,
        }
        .into();

        assert_eq!(redirect.clicks, 0);
        assert!(!redirect.enabled);
    }
}
