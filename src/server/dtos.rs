use crate::analysis::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Request bodies keep their fields optional so that an absent field maps to
/// the API's own 400 message instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQrRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    #[serde(rename = "analyzedUrl", skip_serializing_if = "Option::is_none")]
    pub analyzed_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}
