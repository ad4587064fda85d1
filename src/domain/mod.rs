//! Domain layer: the redirect entity and the storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or HTTP types.

pub mod entities;
pub mod repositories;
