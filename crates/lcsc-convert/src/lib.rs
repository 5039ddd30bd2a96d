//! # lcsc-convert
//!
//! Everything between the upstream CAD document and the bytes that go on the
//! wire: running the external converter in a scoped scratch directory,
//! wrapping its output into KiCad containers, and zipping bundles.

pub mod assembler;
pub mod bundle;
pub mod command;
pub mod error;
pub mod executor;
pub mod scratch;
pub mod service;

pub use assembler::ArtifactAssembler;
pub use bundle::{Bundle, BundleBuilder};
pub use command::CommandConverter;
pub use error::{BundleError, ConverterError};
pub use service::ExportService;
