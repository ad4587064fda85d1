//! Redirect repository implementations.
//!
//! - [`PgRedirectRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryRedirectRepository`] - In-process storage with the same guarantees

pub mod memory_redirect_repository;
pub mod pg_redirect_repository;

pub use memory_redirect_repository::MemoryRedirectRepository;
pub use pg_redirect_repository::PgRedirectRepository;
