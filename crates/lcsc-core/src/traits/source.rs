//! Upstream component lookup.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{CadData, LcscId};

/// Looks up raw CAD data for a component.
///
/// Implementations must report an unknown or empty component as
/// [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) and reserve
/// other kinds for genuine failures. The EasyEDA HTTP client lives in
/// `lcsc-easyeda`.
#[async_trait]
pub trait ComponentSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the CAD document for `id`.
    async fn fetch(&self, id: &LcscId) -> AppResult<CadData>;
}
