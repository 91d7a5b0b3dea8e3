//! Inbound storefront surface: the proxied review form endpoint, the
//! embedded admin page, request verification and HTML rendering.

pub mod api;
pub mod form;
pub mod render;
pub mod signature;

pub use api::{AppState, StorefrontError, router, serve};
