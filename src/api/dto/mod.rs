//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for JSON serialization; field rules live in the services.

pub mod create;
