use reqwest::StatusCode;

/// Structured summary of a fetched page. Built once per request and dropped
/// with it; the body sample is capped so nothing large is retained.
#[derive(Debug, Clone)]
pub struct PageSummary {
    pub title: String,
    pub description: String,
    /// Up to five h1/h2/h3 texts in document order.
    pub headings: Vec<String>,
    /// First 1000 characters of flattened body text.
    pub body_text: String,
    pub link_count: usize,
    pub image_count: usize,
    pub status: StatusCode,
    pub https: bool,
}
