#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use redirector::application::services::RedirectService;
use redirector::domain::entities::{NewRedirect, Redirect};
use redirector::domain::repositories::RedirectRepository;
use redirector::error::AppError;
use redirector::infrastructure::persistence::MemoryRedirectRepository;
use redirector::routes::router;
use redirector::state::AppState;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

pub const FALLBACK_URL: &str = "https://fallback.test/404";

/// Store whose every operation fails, for exercising storage error paths.
pub struct FailingRedirectRepository;

#[async_trait]
impl RedirectRepository for FailingRedirectRepository {
    async fn create(&self, _new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        Err(AppError::storage("Database error", json!({})))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Redirect>, AppError> {
        Err(AppError::storage("Database error", json!({})))
    }

    async fn increment_clicks(&self, _id: &str) -> Result<bool, AppError> {
        Err(AppError::storage("Database error", json!({})))
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryRedirectRepository>) {
    let repository = Arc::new(MemoryRedirectRepository::new());
    let service = RedirectService::new(repository.clone());

    (AppState::new(Arc::new(service), FALLBACK_URL), repository)
}

pub fn create_failing_state() -> AppState {
    let service = RedirectService::new(Arc::new(FailingRedirectRepository));
    AppState::new(Arc::new(service), FALLBACK_URL)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn seed_redirect(repository: &MemoryRedirectRepository, id: &str, url: &str) {
    repository
        .create(NewRedirect {
            id: id.to_string(),
            url: url.to_string(),
            enabled: true,
        })
        .await
        .unwrap();
}

pub async fn clicks(repository: &MemoryRedirectRepository, id: &str) -> i64 {
    repository.find_by_id(id).await.unwrap().unwrap().clicks
}

/// Waits for detached click increments to land, returning the final count.
///
/// Gives up after roughly two seconds and returns whatever is stored.
pub async fn wait_for_clicks(
    repository: &MemoryRedirectRepository,
    id: &str,
    expected: i64,
) -> i64 {
    for _ in 0..200 {
        let current = clicks(repository, id).await;
        if current >= expected {
            return current;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    clicks(repository, id).await
}
