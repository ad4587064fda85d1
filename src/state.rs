//! Shared application state injected into handlers.

use std::sync::Arc;

use tokio_util::task::TaskTracker;

use crate::application::services::RedirectService;

/// State shared by all request handlers.
///
/// Built once at startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    /// Where visitors are sent when a lookup fails.
    pub fallback_url: Arc<str>,
    /// Click increments still running. Closed and drained on shutdown.
    pub click_tasks: TaskTracker,
}

impl AppState {
    pub fn new(redirect_service: Arc<RedirectService>, fallback_url: impl Into<Arc<str>>) -> Self {
        Self {
            redirect_service,
            fallback_url: fallback_url.into(),
            click_tasks: TaskTracker::new(),
        }
    }
}
