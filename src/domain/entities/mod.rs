//! Core domain entities.
//!
//! - [`Redirect`] - A stored short id → URL mapping with its click counter
//! - [`NewRedirect`] - Insert payload for a redirect

pub mod redirect;

pub use redirect::{NewRedirect, Redirect};
