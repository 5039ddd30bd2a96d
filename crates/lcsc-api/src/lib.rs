//! # lcsc-api
//!
//! HTTP surface of the exporter: the index form, the four download routes
//! and a health probe, plus the error-to-status mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
