//! Redirect creation, lookup and click accounting.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewRedirect, Redirect};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::utils::id_generator::{DEFAULT_ID_LENGTH, IdGenerator, RandomIdGenerator};
use crate::utils::url_validator::validate_url;

/// Default number of ids tried before giving up on a create.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Service for creating redirects and counting visits.
///
/// Generates ids, validates destinations and re-rolls the id when the store
/// reports a primary-key conflict.
pub struct RedirectService {
    repository: Arc<dyn RedirectRepository>,
    generator: Arc<dyn IdGenerator>,
    id_length: usize,
    max_attempts: usize,
}

impl RedirectService {
    /// Creates a service with the default id length, attempt budget and a
    /// random id generator.
    pub fn new(repository: Arc<dyn RedirectRepository>) -> Self {
        Self {
            repository,
            generator: Arc::new(RandomIdGenerator),
            id_length: DEFAULT_ID_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the length of generated ids.
    pub fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length;
        self
    }

    /// Sets how many ids are tried before a create fails. At least one
    /// attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Replaces the id generator.
    pub fn with_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Creates a redirect to `url` with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is blank, malformed or not HTTP(S);
    /// nothing is written in that case.
    ///
    /// Returns [`AppError::Storage`] if the write fails or every generated id
    /// collided with an existing record.
    pub async fn create(&self, url: &str, enabled: bool) -> Result<Redirect, AppError> {
        let url = validate_url(url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=self.max_attempts {
            let new_redirect = NewRedirect {
                id: self.generator.generate(self.id_length),
                url: url.clone(),
                enabled,
            };
            let id = new_redirect.id.clone();

            match self.repository.create(new_redirect).await {
                Ok(redirect) => {
                    tracing::info!(id = %redirect.id, url = %redirect.url, "Redirect created");
                    return Ok(redirect);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(
                        id = %id,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Generated id already exists, regenerating"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::storage(
            "Failed to allocate a unique id",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Retrieves a redirect by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no redirect has this id.
    /// Returns [`AppError::Storage`] on storage failure.
    pub async fn lookup(&self, id: &str) -> Result<Redirect, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Redirect not found", json!({ "id": id })))
    }

    /// Counts one click on `id`.
    ///
    /// Returns `Ok(false)` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failure.
    pub async fn increment(&self, id: &str) -> Result<bool, AppError> {
        let updated = self.repository.increment_clicks(id).await?;
        if !updated {
            tracing::debug!(id, "Click not counted, redirect does not exist");
        }
        Ok(updated)
    }
}
