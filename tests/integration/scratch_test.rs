//! Scratch directory lifecycle through the HTTP surface, using a real
//! converter process.

#![cfg(unix)]

mod helpers;

use http::StatusCode;
use tempfile::TempDir;

use helpers::TestApp;

/// Writes one artifact per kind; the model only when the CAD data has one.
const CONVERTER: &str = r#"
case "$1" in
  symbol) printf '(symbol "X")' > "$2/X.kicad_sym" ;;
  footprint) printf '(module SOT-23-5)' > "$2/SOT-23-5.kicad_mod" ;;
  model) grep -q '"has_model":true' "$3" && printf 'ISO-10303-21;' > "$2/SOT-23-5.step" ;;
esac
exit 0
"#;

fn leftovers(root: &TempDir) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(root.path())
        .expect("scratch root")
        .map(|e| e.expect("entry").path())
        .collect()
}

#[tokio::test]
async fn test_scratch_removed_after_success() {
    let root = tempfile::tempdir().unwrap();
    let app = TestApp::with_shell_converter(CONVERTER, root.path());

    let response = app.get("/get_all/C2040").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.zip_entries(),
        vec!["C2040.kicad_sym", "SOT-23-5.kicad_mod", "SOT-23-5.step"]
    );
    assert!(leftovers(&root).is_empty());
}

#[tokio::test]
async fn test_scratch_removed_when_model_missing() {
    let root = tempfile::tempdir().unwrap();
    let app = TestApp::with_shell_converter(CONVERTER, root.path());

    let response = app.get("/get_step/C1525").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(leftovers(&root).is_empty());
}

#[tokio::test]
async fn test_scratch_removed_when_converter_fails() {
    let root = tempfile::tempdir().unwrap();
    let app = TestApp::with_shell_converter(
        r#"printf 'half' > "$2/X.kicad_sym"; echo 'Traceback' >&2; exit 1"#,
        root.path(),
    );

    let response = app.get("/get_symbol?lcsc_id=C2040").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(leftovers(&root).is_empty());
}

#[tokio::test]
async fn test_scratch_removed_when_converter_hangs() {
    let root = tempfile::tempdir().unwrap();
    let app = TestApp::with_shell_converter("sleep 10", root.path());

    let response = app.get("/get_footprint/C2040").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(leftovers(&root).is_empty());
}
