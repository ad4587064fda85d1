//! DTOs for the create endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Redirect;

/// Request to create a redirect.
///
/// `enabled` defaults to `false` when omitted. The URL itself is checked by
/// [`crate::application::services::RedirectService::create`].
#[derive(Debug, Deserialize)]
pub struct CreateRedirectRequest {
    /// Destination URL.
    pub url: String,

    #[serde(default)]
    pub enabled: bool,
}

/// A redirect record as returned to API clients.
#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub id: String,
    pub url: String,
    pub clicks: i64,
    pub enabled: bool,
}

impl From<Redirect> for RedirectResponse {
    fn from(redirect: Redirect) -> Self {
        Self {
            id: redirect.id,
            url: redirect.url,
            clicks: redirect.clicks,
            enabled: redirect.enabled,
        }
    }
}
