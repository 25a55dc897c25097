use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::api::{get_quote, health, list_countries};
use crate::handlers::pages::{home, not_found, root, send_money};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/countries", get(list_countries))
        .route("/api/quote", get(get_quote))
        .route("/healthz", get(health))
        .route("/:country", get(home))
        .route("/:country/send-to/:target", get(send_money))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
