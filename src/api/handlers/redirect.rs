//! Handler for short id redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its destination URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Request Flow
///
/// 1. Remove any `/` from the decoded id
/// 2. Look the id up in the store
/// 3. Spawn the click increment as an independent task
/// 4. Return 307 Temporary Redirect to the stored URL
///
/// # Failure Handling
///
/// Visitors never see an error status. Any lookup failure redirects to the
/// configured fallback URL; unknown ids are logged at debug level and storage
/// failures at error level. A failed click increment is logged and dropped.
///
/// Increments run on [`AppState::click_tasks`], so a graceful shutdown waits
/// for them instead of dropping clicks that were already answered.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Redirect {
    visit(&state, &id).await
}

/// Serves `GET /create`, whose path is shadowed by the create route.
///
/// Behaves exactly like [`redirect_handler`] for the id `create`.
pub async fn create_path_redirect_handler(State(state): State<AppState>) -> Redirect {
    visit(&state, "create").await
}

async fn visit(state: &AppState, raw_id: &str) -> Redirect {
    let id = raw_id.replace('/', "");

    let redirect = match state.redirect_service.lookup(&id).await {
        Ok(redirect) => redirect,
        Err(AppError::NotFound { .. }) => {
            debug!(id = %id, "Unknown id, redirecting to fallback");
            return Redirect::temporary(&state.fallback_url);
        }
        Err(e) => {
            error!(id = %id, error = %e, "Lookup failed, redirecting to fallback");
            return Redirect::temporary(&state.fallback_url);
        }
    };

    // Count the click without holding up the response
    let service = state.redirect_service.clone();
    let click_id = redirect.id.clone();
    state.click_tasks.spawn(async move {
        if let Err(e) = service.increment(&click_id).await {
            error!(id = %click_id, error = %e, "Failed to update click count");
        }
    });

    Redirect::temporary(&redirect.url)
}
