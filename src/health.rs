use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    time: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    info!("Health check requested");
    Json(HealthResponse {
        status: "Server is running!".to_string(),
        time: Utc::now().to_rfc3339(),
    })
}
