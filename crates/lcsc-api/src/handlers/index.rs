//! Landing page.

use axum::response::Html;

/// The form posting to the four download routes.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
