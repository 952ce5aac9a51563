use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::analysis::{self, AnalyzeError};
use crate::server::dtos::{AnalyzeQrRequest, AnalyzeRequest, AnalyzeResponse, ErrorResponse};

pub async fn analyze_website(Json(payload): Json<AnalyzeRequest>) -> Response {
    info!("Analysis request received");

    let Some(url) = payload.url else {
        return bad_request(AnalyzeError::MissingUrl);
    };

    match analysis::analyze_url(&url).await {
        Ok(analysis) => (
            StatusCode::OK,
            Json(AnalyzeResponse {
                success: true,
                analysis: analysis.result,
                analyzed_url: Some(analysis.analyzed_url.to_string()),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "Analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_message(
                    "Could not analyze website",
                    err.to_string(),
                )),
            )
                .into_response()
        }
    }
}

pub async fn analyze_qr(Json(payload): Json<AnalyzeQrRequest>) -> Response {
    info!("QR analysis request received");

    let Some(content) = payload.content else {
        return bad_request(AnalyzeError::MissingContent);
    };

    let analysis = analysis::analyze_qr_content(&content);
    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            success: true,
            analysis,
            analyzed_url: None,
        }),
    )
        .into_response()
}

fn bad_request(err: AnalyzeError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(err.to_string())),
    )
        .into_response()
}
