use thiserror::Error;

/// Failures that actually reach the caller. Fetch and parse problems are
/// recovered into the degraded result and never show up here.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Please provide a URL")]
    MissingUrl,

    #[error("Please provide content")]
    MissingContent,

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
