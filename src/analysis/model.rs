use serde::Serialize;
use url::Url;

/// The two entry points of the pipeline. Exactly one variant is active per
/// request; QR content never touches the network.
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    Url(String),
    QrContent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    Safe,
    Warning,
}

/// Verdict plus its ordered warning list. Warnings are append-only and never
/// deduplicated; appending one forces the verdict to `Warning` and nothing
/// ever lowers it back, so `Warning` holds iff the list is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyVerdict {
    pub safety: Safety,
    pub warnings: Vec<String>,
}

impl SafetyVerdict {
    pub fn safe() -> Self {
        Self {
            safety: Safety::Safe,
            warnings: Vec::new(),
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
        self.safety = Safety::Warning;
    }
}

impl Default for SafetyVerdict {
    fn default() -> Self {
        Self::safe()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageElements {
    pub links: usize,
    pub images: usize,
    pub headings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub domain: String,
    /// Absent when the page could not be reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(rename = "hasSSL")]
    pub has_ssl: bool,
    #[serde(rename = "pageElements", skip_serializing_if = "Option::is_none")]
    pub page_elements: Option<PageElements>,
}

/// The sole externally visible output. Created per request, returned,
/// discarded; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_label: String,
    #[serde(flatten)]
    pub safety: SafetyVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A URL analysis together with the normalized URL it was run against,
/// which the API echoes back as `analyzedUrl`.
#[derive(Debug, Clone)]
pub struct UrlAnalysis {
    pub analyzed_url: Url,
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_starts_safe_and_empty() {
        let verdict = SafetyVerdict::safe();
        assert_eq!(verdict.safety, Safety::Safe);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn warning_is_monotonic_and_ordered() {
        let mut verdict = SafetyVerdict::safe();
        verdict.warn("first");
        verdict.warn("second");
        verdict.warn("first");
        assert_eq!(verdict.safety, Safety::Warning);
        assert_eq!(verdict.warnings, vec!["first", "second", "first"]);
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let result = AnalysisResult {
            title: "t".to_string(),
            description: "d".to_string(),
            type_label: "General Website".to_string(),
            safety: SafetyVerdict::safe(),
            metadata: Some(Metadata {
                domain: "example.com".to_string(),
                status: Some(200),
                has_ssl: true,
                page_elements: Some(PageElements {
                    links: 1,
                    images: 2,
                    headings: 3,
                }),
            }),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "General Website");
        assert_eq!(json["safety"], "safe");
        assert_eq!(json["warnings"], serde_json::json!([]));
        assert_eq!(json["metadata"]["hasSSL"], true);
        assert_eq!(json["metadata"]["pageElements"]["links"], 1);
    }
}
