//! Custom Axum extractors.

pub mod component_id;

pub use component_id::ComponentId;
