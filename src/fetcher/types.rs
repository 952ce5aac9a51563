use reqwest::StatusCode;
use url::Url;

/// Raw page as fetched, before any extraction. Request-scoped; dropped once
/// the summary has been built.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
}
