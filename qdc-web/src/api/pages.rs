//! Embedded front-end pages
//!
//! The drawing and game pages are compiled into the binary so the service
//! ships as a single executable with no asset directory to deploy.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const GAME_HTML: &str = include_str!("../../static/game.html");

/// GET / - free drawing page
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /game - guess-the-drawing game page
pub async fn game_page() -> Html<&'static str> {
    Html(GAME_HTML)
}
