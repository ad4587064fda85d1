//! Public route configuration.

use crate::api::handlers::{create_handler, create_path_redirect_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Redirect and create routes.
///
/// # Endpoints
///
/// - `POST /create` - Create a redirect with a generated id
/// - `GET  /{id}`   - Redirect to the stored URL (or the fallback)
///
/// The static `/create` path takes precedence over `/{id}`, so `GET /create`
/// is routed to a handler that resolves the id `create` like any other.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/create",
            post(create_handler).get(create_path_redirect_handler),
        )
        .route("/{id}", get(redirect_handler))
}
