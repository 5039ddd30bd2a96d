//! # lcsc-easyeda
//!
//! Upstream CAD data lookup against the EasyEDA component API. The client is
//! stateless apart from its connection pool and implements
//! [`lcsc_core::traits::ComponentSource`].

pub mod client;
pub mod error;
pub mod models;

pub use client::EasyedaClient;
pub use error::UpstreamError;
