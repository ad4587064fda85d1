//! HTTP request handlers.

pub mod create;
pub mod redirect;

pub use create::create_handler;
pub use redirect::{create_path_redirect_handler, redirect_handler};
