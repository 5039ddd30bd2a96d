//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a gzip compression layer for text downloads.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
