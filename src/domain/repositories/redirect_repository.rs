//! Repository trait for redirect storage.

use crate::domain::entities::{NewRedirect, Redirect};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for redirect records.
///
/// The store is treated as a key-value table keyed by id with one atomic
/// counter update. Implementations must enforce id uniqueness themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryRedirectRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Inserts a new redirect with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    /// Returns [`AppError::Storage`] on any other storage failure.
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError>;

    /// Finds a redirect by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failure.
    async fn find_by_id(&self, id: &str) -> Result<Option<Redirect>, AppError>;

    /// Atomically adds one to the click counter of `id`.
    ///
    /// Returns `Ok(false)` if no such redirect exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failure.
    async fn increment_clicks(&self, id: &str) -> Result<bool, AppError>;
}
