//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Read};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode};
use tower::ServiceExt;

use lcsc_api::{AppState, build_app};
use lcsc_convert::{CommandConverter, ExportService};
use lcsc_core::config::{AppConfig, ConverterConfig};
use lcsc_core::error::AppError;
use lcsc_core::result::AppResult;
use lcsc_core::traits::{CadConverter, ComponentSource};
use lcsc_core::types::{CadData, FootprintOutput, LcscId, ModelOutput};

/// Component with symbol, footprint and 3D model.
pub const FULL_PART: &str = "C2040";
/// Component without a 3D model.
pub const NO_MODEL_PART: &str = "C1525";
/// Component the upstream fails on.
pub const BROKEN_UPSTREAM_PART: &str = "C500";
/// Component whose symbol conversion throws.
pub const BROKEN_SYMBOL_PART: &str = "C666";

/// Upstream stub serving a fixed catalog.
#[derive(Debug, Default)]
pub struct StubSource;

#[async_trait]
impl ComponentSource for StubSource {
    async fn fetch(&self, id: &LcscId) -> AppResult<CadData> {
        match id.as_str() {
            FULL_PART | BROKEN_SYMBOL_PART => Ok(CadData(serde_json::json!({
                "lcsc": id.as_str(),
                "package": "LQFN-56_L7.0-W7.0",
                "has_model": true,
            }))),
            NO_MODEL_PART => Ok(CadData(serde_json::json!({
                "lcsc": id.as_str(),
                "package": "0603",
                "has_model": false,
            }))),
            BROKEN_UPSTREAM_PART => Err(AppError::external_service(
                "Upstream returned HTTP 502 from 10.0.0.7",
            )),
            _ => Err(AppError::not_found(format!("Component '{id}' not found upstream"))),
        }
    }
}

/// Deterministic converter deriving everything from the CAD document.
#[derive(Debug, Default)]
pub struct StubConverter;

fn package(cad: &CadData) -> String {
    cad.0["package"].as_str().unwrap_or_default().to_string()
}

#[async_trait]
impl CadConverter for StubConverter {
    async fn symbol(&self, id: &LcscId, _cad: &CadData) -> AppResult<String> {
        if id.as_str() == BROKEN_SYMBOL_PART {
            return Err(AppError::conversion("symbol importer raised KeyError"));
        }
        Ok(format!("(symbol \"{id}\"\n  (property \"Reference\" \"U\")\n)"))
    }

    async fn footprint(&self, _id: &LcscId, cad: &CadData) -> AppResult<FootprintOutput> {
        let name = package(cad);
        Ok(FootprintOutput {
            content: format!("(module {name} (layer F.Cu))\n"),
            name,
        })
    }

    async fn model(&self, _id: &LcscId, cad: &CadData) -> AppResult<ModelOutput> {
        if !cad.0["has_model"].as_bool().unwrap_or(false) {
            return Err(AppError::not_found("No model available for this component"));
        }
        Ok(ModelOutput {
            name: package(cad),
            step: Bytes::from_static(b"ISO-10303-21;\nEND-ISO-10303-21;\n"),
        })
    }
}

/// Captured response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw body.
    pub body: Bytes,
}

impl TestResponse {
    /// Header value as string, empty when absent.
    pub fn header(&self, name: &str) -> String {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    /// Body parsed as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }

    /// Body as UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("UTF-8 body")
    }

    /// Names of the entries of a zip body.
    pub fn zip_entries(&self) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(self.body.to_vec())).expect("zip body");
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Contents of one zip entry.
    pub fn zip_entry(&self, name: &str) -> Vec<u8> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(self.body.to_vec())).expect("zip body");
        let mut file = archive.by_name(name).expect("entry present");
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).expect("read entry");
        buf
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// App backed by the in-memory stubs.
    pub fn new() -> Self {
        Self::with_converter(Arc::new(StubConverter))
    }

    /// App backed by the stub upstream and the given converter.
    pub fn with_converter(converter: Arc<dyn CadConverter>) -> Self {
        let service = ExportService::new(Arc::new(StubSource), converter);
        let state = AppState::new(AppConfig::default(), service);
        Self {
            router: build_app(state),
        }
    }

    /// App running a real converter process: `sh -c <script> sh kind output_dir input`.
    pub fn with_shell_converter(script: &str, scratch_root: &std::path::Path) -> Self {
        let config = ConverterConfig {
            command: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                script.to_string(),
                "sh".to_string(),
                "{kind}".to_string(),
                "{output_dir}".to_string(),
                "{input}".to_string(),
            ],
            timeout_seconds: 2,
            scratch_dir: Some(scratch_root.to_path_buf()),
            ..Default::default()
        };
        Self::with_converter(Arc::new(CommandConverter::new(&config)))
    }

    /// Issue a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router never fails");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
