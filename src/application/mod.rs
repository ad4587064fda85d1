//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::redirect_service::RedirectService`] - Redirect creation, lookup and click counting

pub mod services;
