//! Integration tests for the download routes.

mod helpers;

use http::StatusCode;

use helpers::{BROKEN_SYMBOL_PART, BROKEN_UPSTREAM_PART, FULL_PART, NO_MODEL_PART, TestApp};

const DOWNLOAD_ROUTES: [&str; 4] = ["/get_symbol", "/get_footprint", "/get_step", "/get_all"];

#[tokio::test]
async fn test_index_lists_download_routes() {
    let app = TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").starts_with("text/html"));
    let html = response.text();
    for route in DOWNLOAD_ROUTES {
        assert!(html.contains(&format!("formaction=\"{route}\"")), "{route}");
    }
    assert!(html.contains("name=\"lcsc_id\""));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_symbol_download() {
    let app = TestApp::new();

    let response = app.get("/get_symbol?lcsc_id=C2040").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/plain");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"C2040.kicad_sym\""
    );
    let body = response.text();
    assert!(body.starts_with("(kicad_symbol_lib\n"));
    assert!(body.contains("(symbol \"C2040\""));
    assert!(body.ends_with(")\n"));
}

#[tokio::test]
async fn test_footprint_download_named_after_footprint() {
    let app = TestApp::new();

    let response = app.get("/get_footprint/C2040").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/plain");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"LQFN-56_L7.0-W7.0.kicad_mod\""
    );
    assert!(response.text().starts_with("(module LQFN-56_L7.0-W7.0"));
}

#[tokio::test]
async fn test_step_download() {
    let app = TestApp::new();

    let response = app.get("/get_step?lcsc_id=C2040").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/step");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"LQFN-56_L7.0-W7.0.step\""
    );
    assert_eq!(response.header("content-length"), response.body.len().to_string());
    assert!(response.body.starts_with(b"ISO-10303-21;"));
}

#[tokio::test]
async fn test_all_download_contains_three_entries() {
    let app = TestApp::new();

    let response = app.get(&format!("/get_all/{FULL_PART}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/zip");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"C2040.zip\""
    );
    assert_eq!(
        response.zip_entries(),
        vec![
            "C2040.kicad_sym",
            "LQFN-56_L7.0-W7.0.kicad_mod",
            "LQFN-56_L7.0-W7.0.step",
        ]
    );
    let symbol = app.get("/get_symbol/C2040").await;
    assert_eq!(response.zip_entry("C2040.kicad_sym"), symbol.body.to_vec());
}

#[tokio::test]
async fn test_all_download_without_model_has_two_entries() {
    let app = TestApp::new();

    let response = app.get(&format!("/get_all?lcsc_id={NO_MODEL_PART}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.zip_entries(), vec!["0603.kicad_mod", "C1525.kicad_sym"]);
}

#[tokio::test]
async fn test_all_download_tolerates_conversion_failure() {
    let app = TestApp::new();

    let response = app.get(&format!("/get_all/{BROKEN_SYMBOL_PART}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.zip_entries().len(), 2);
}

#[tokio::test]
async fn test_missing_identifier_is_bad_request() {
    let app = TestApp::new();

    for route in DOWNLOAD_ROUTES {
        for uri in [route.to_string(), format!("{route}?lcsc_id="), format!("{route}?lcsc_id=%20")] {
            let response = app.get(&uri).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(response.json()["error"], "VALIDATION_ERROR");
        }
    }
}

#[tokio::test]
async fn test_invalid_identifier_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/get_symbol?lcsc_id=C20%2240%0d%0a").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_identifier_is_not_found() {
    let app = TestApp::new();

    for route in DOWNLOAD_ROUTES {
        let by_query = app.get(&format!("{route}?lcsc_id=C0000001")).await;
        assert_eq!(by_query.status, StatusCode::NOT_FOUND, "{route}");
        let by_path = app.get(&format!("{route}/C0000001")).await;
        assert_eq!(by_path.status, StatusCode::NOT_FOUND, "{route}");
        assert_eq!(by_path.json()["error"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_missing_model_is_not_found() {
    let app = TestApp::new();

    let response = app.get(&format!("/get_step/{NO_MODEL_PART}")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upstream_failure_is_generic_server_error() {
    let app = TestApp::new();

    for route in DOWNLOAD_ROUTES {
        let response = app.get(&format!("{route}/{BROKEN_UPSTREAM_PART}")).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{route}");
        let body = response.json();
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.7"));
    }
}

#[tokio::test]
async fn test_conversion_failure_is_server_error() {
    let app = TestApp::new();

    let response = app.get(&format!("/get_symbol/{BROKEN_SYMBOL_PART}")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_path_segment_takes_precedence() {
    let app = TestApp::new();

    let response = app.get("/get_symbol/C2040?lcsc_id=C0000001").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"C2040.kicad_sym\""
    );
}

#[tokio::test]
async fn test_symbol_output_is_deterministic() {
    let app = TestApp::new();

    let first = app.get("/get_symbol?lcsc_id=C2040").await;
    let second = app.get("/get_symbol?lcsc_id=C2040").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);

    let first_zip = app.get("/get_all?lcsc_id=C2040").await;
    let second_zip = app.get("/get_all?lcsc_id=C2040").await;
    assert_eq!(first_zip.body, second_zip.body);
}
