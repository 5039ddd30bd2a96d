//! Collaborator traits defined in `lcsc-core` and implemented by other crates.

pub mod converter;
pub mod source;

pub use converter::CadConverter;
pub use source::ComponentSource;
