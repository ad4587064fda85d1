//! In-process implementation of the redirect repository.
//!
//! Used by the HTTP integration tests and by embedders that do not need
//! durable storage. Records are lost when the process exits.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewRedirect, Redirect};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Redirect store backed by a `HashMap` behind an async `RwLock`.
///
/// Inserts and increments take the write lock, so both are atomic with
/// respect to every other operation on the store.
#[derive(Default)]
pub struct MemoryRedirectRepository {
    records: RwLock<HashMap<String, Redirect>>,
}

impl MemoryRedirectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored redirects.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RedirectRepository for MemoryRedirectRepository {
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        let mut records = self.records.write().await;

        if records.contains_key(&new_redirect.id) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "redirects_pkey" }),
            ));
        }

        let redirect = Redirect::from(new_redirect);
        records.insert(redirect.id.clone(), redirect.clone());

        Ok(redirect)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Redirect>, AppError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn increment_clicks(&self, id: &str) -> Result<bool, AppError> {
        match self.records.write().await.get_mut(id) {
            Some(redirect) => {
                redirect.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_redirect(id: &str) -> NewRedirect {
        NewRedirect {
            id: id.to_string(),
            url: "https://example.com".to_string(),
            enabled: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryRedirectRepository::new();

        let created = repo.create(new_redirect("aB3xY")).await.unwrap();
        assert_eq!(created.clicks, 0);

        let found = repo.find_by_id("aB3xY").await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_is_exact_match() {
        let repo = MemoryRedirectRepository::new();
        repo.create(new_redirect("aB3xY")).await.unwrap();

        assert!(repo.find_by_id("ab3xy").await.unwrap().is_none());
        assert!(repo.find_by_id("aB3x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_conflict() {
        let repo = MemoryRedirectRepository::new();
        repo.create(new_redirect("aB3xY")).await.unwrap();

        let result = repo.create(new_redirect("aB3xY")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_increment_missing_is_noop() {
        let repo = MemoryRedirectRepository::new();

        assert!(!repo.increment_clicks("ghost").await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let repo = Arc::new(MemoryRedirectRepository::new());
        repo.create(new_redirect("aB3xY")).await.unwrap();

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.increment_clicks("aB3xY").await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap());
        }

        let redirect = repo.find_by_id("aB3xY").await.unwrap().unwrap();
        assert_eq!(redirect.clicks, 200);
    }
}
