use crate::analysis::model::SafetyVerdict;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Coarse heuristic tokens; matching is substring-based and intentionally
/// kept as-is, false positives included.
const SUSPICIOUS_TOKENS: [&str; 5] = ["bit.ly", "tinyurl", "suspicious", "malicious", "phishing"];

static IP_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap());

/// Three ordered checks, each appending at most one warning. The verdict
/// only ever moves toward `Warning`; check order fixes warning order.
pub fn evaluate(url: &Url, domain: &str) -> SafetyVerdict {
    let mut verdict = SafetyVerdict::safe();

    if url.scheme() != "https" {
        verdict.warn("Website does not use secure HTTPS connection");
    }

    // First matching token is enough; we do not enumerate the rest.
    if SUSPICIOUS_TOKENS.iter().any(|token| domain.contains(token)) {
        verdict.warn("Domain may contain suspicious elements");
    }

    if IP_LITERAL_REGEX.is_match(domain) {
        verdict.warn("Website uses IP address instead of domain name");
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::Safety;

    fn evaluate_str(url: &str) -> SafetyVerdict {
        let url = Url::parse(url).unwrap();
        let domain = url.host_str().unwrap().to_string();
        evaluate(&url, &domain)
    }

    #[test]
    fn https_known_domain_is_safe() {
        let verdict = evaluate_str("https://example.com");
        assert_eq!(verdict.safety, Safety::Safe);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn plain_http_warns() {
        let verdict = evaluate_str("http://example.com");
        assert_eq!(verdict.safety, Safety::Warning);
        assert_eq!(
            verdict.warnings,
            vec!["Website does not use secure HTTPS connection"]
        );
    }

    #[test]
    fn suspicious_token_warns_once() {
        // Contains both "suspicious" and "phishing": still a single warning.
        let verdict = evaluate_str("https://suspicious-phishing.example.com");
        assert_eq!(verdict.warnings, vec!["Domain may contain suspicious elements"]);
    }

    #[test]
    fn ip_literal_warns() {
        let verdict = evaluate_str("https://192.168.1.1");
        assert_eq!(
            verdict.warnings,
            vec!["Website uses IP address instead of domain name"]
        );
    }

    #[test]
    fn checks_stack_in_order() {
        let verdict = evaluate_str("http://1.2.3.4");
        assert_eq!(verdict.safety, Safety::Warning);
        assert_eq!(
            verdict.warnings,
            vec![
                "Website does not use secure HTTPS connection",
                "Website uses IP address instead of domain name",
            ]
        );
    }

    #[test]
    fn verdict_is_deterministic() {
        assert_eq!(evaluate_str("http://bit.ly"), evaluate_str("http://bit.ly"));
    }
}
