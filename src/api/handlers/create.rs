//! Handler for redirect creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::create::{CreateRedirectRequest, RedirectResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a redirect with a server-generated id.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "enabled": true }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "aB3xY", "url": "https://example.com", "clicks": 0, "enabled": true }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, `url` is missing, or
/// `url` is not an absolute HTTP(S) URL. Nothing is stored in that case.
/// Returns 500 Internal Server Error if the store rejects the write.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRedirectRequest>, JsonRejection>,
) -> Result<Json<RedirectResponse>, AppError> {
    let Json(payload) = payload?;

    let redirect = state
        .redirect_service
        .create(&payload.url, payload.enabled)
        .await?;

    Ok(Json(redirect.into()))
}
