//! Frontend endpoint
//!
//! Serves the single-page frontend embedded at build time.

use axum::{response::Html, routing::get, Router};

use crate::state::AppState;

async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
