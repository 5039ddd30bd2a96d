//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use lcsc_convert::ExportService;
use lcsc_core::config::AppConfig;

/// Shared, immutable dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Nothing in here is
/// mutated after startup, so requests never observe each other.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Component lookup + conversion pipeline
    pub export_service: Arc<ExportService>,
}

impl AppState {
    /// Create the state from its parts.
    pub fn new(config: AppConfig, export_service: ExportService) -> Self {
        Self {
            config: Arc::new(config),
            export_service: Arc::new(export_service),
        }
    }
}
