//! # lcsc-core
//!
//! Core crate for the LCSC KiCad exporter. Contains the configuration
//! schema, the unified error system, the per-request domain types and the
//! traits implemented by the upstream lookup and the converter backends.
//!
//! This crate has **no** internal dependencies on other exporter crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
