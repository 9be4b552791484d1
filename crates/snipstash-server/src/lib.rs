//! snipstash-server
//!
//! HTTP façade over the snippet store and the highlighting engine. Thin by
//! design: handlers validate, delegate, and serialize.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Assemble the application router. Shared between `main` and the
/// integration tests.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/snippets", get(routes::snippets::list_snippets))
        .route("/api/snippets", post(routes::snippets::create_snippet))
        .route(
            "/api/snippets/search",
            get(routes::snippets::search_snippets),
        )
        .route("/api/themes", get(routes::themes::list_themes))
        .route("/api/highlight", post(routes::highlight::highlight_code))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
