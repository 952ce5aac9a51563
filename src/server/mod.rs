pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::health;

/// Full application router. CORS is permissive so the browser frontend can
/// call the API from any origin.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/analyze", post(handlers::analyze_website))
        .route("/analyze-qr", post(handlers::analyze_qr))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
