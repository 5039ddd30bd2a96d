//! CAD-to-KiCad conversion black box.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{CadData, FootprintOutput, LcscId, ModelOutput};

/// Converts upstream CAD data into KiCad artifact bodies.
///
/// An artifact that simply does not exist for the component (typically the
/// 3D model) is reported as
/// [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound); any other
/// failure uses a server-side kind.
#[async_trait]
pub trait CadConverter: Send + Sync + std::fmt::Debug + 'static {
    /// Produce the symbol block (or a complete symbol library).
    async fn symbol(&self, id: &LcscId, cad: &CadData) -> AppResult<String>;

    /// Produce the footprint module and its name.
    async fn footprint(&self, id: &LcscId, cad: &CadData) -> AppResult<FootprintOutput>;

    /// Produce the STEP model and its name.
    async fn model(&self, id: &LcscId, cad: &CadData) -> AppResult<ModelOutput>;
}
