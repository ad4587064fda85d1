//! Utility functions used across the application.
//!
//! - [`id_generator`] - Short id alphabet and random generation
//! - [`url_validator`] - Destination URL validation

pub mod id_generator;
pub mod url_validator;
