use crate::analysis::model::{AnalysisResult, SafetyVerdict};
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;
use tracing::debug;

const LENGTHY_THRESHOLD: usize = 100;
const LOG_ECHO_CHARS: usize = 50;

// Loose on purpose: an optional leading '+', then digits with the usual
// separator characters.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d[\d\s\-()]+$").unwrap());

/// Closed set of QR payload categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrContentType {
    EmailAddress,
    PhoneNumber,
    WifiCredentials,
    ContactInformation,
    PlainText,
}

impl QrContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailAddress => "Email Address",
            Self::PhoneNumber => "Phone Number",
            Self::WifiCredentials => "WiFi Credentials",
            Self::ContactInformation => "Contact Information",
            Self::PlainText => "Plain Text",
        }
    }
}

impl Display for QrContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered cascade, first match wins. The email check runs before the phone
/// check, so "a@b.c" never counts as a phone number.
pub fn classify_content(content: &str) -> QrContentType {
    if content.contains('@') && content.contains('.') {
        QrContentType::EmailAddress
    } else if PHONE_REGEX.is_match(content) {
        QrContentType::PhoneNumber
    } else if content.contains("WIFI:") {
        QrContentType::WifiCredentials
    } else if content.contains("BEGIN:VCARD") {
        QrContentType::ContactInformation
    } else {
        QrContentType::PlainText
    }
}

/// Classify a decoded QR payload without any network access. Local content
/// carries no URL risk signals, so the verdict is always safe.
pub fn analyze_qr_content(content: &str) -> AnalysisResult {
    let echo: String = content.chars().take(LOG_ECHO_CHARS).collect();
    debug!(content = %echo, "classifying qr payload");

    let content_type = classify_content(content);
    let mut description = format!("This QR code contains: \"{}\". ", content);
    description.push_str(match content_type {
        QrContentType::EmailAddress => {
            "This appears to be an email address for direct contact."
        }
        QrContentType::PhoneNumber => "This is a phone number for calling or messaging.",
        QrContentType::WifiCredentials => {
            "This contains WiFi network information for automatic connection."
        }
        QrContentType::ContactInformation => {
            "This is contact information that can be saved to your address book."
        }
        QrContentType::PlainText => {
            if content.chars().count() > LENGTHY_THRESHOLD {
                "This appears to be plain text content. The content is quite lengthy."
            } else {
                "This appears to be plain text content. This is a simple text-based QR code."
            }
        }
    });

    AnalysisResult {
        title: format!("QR Code: {}", content_type),
        description,
        type_label: format!("QR Content - {}", content_type),
        safety: SafetyVerdict::safe(),
        metadata: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::Safety;

    #[test]
    fn classifies_email() {
        assert_eq!(
            classify_content("alice@example.com"),
            QrContentType::EmailAddress
        );
    }

    #[test]
    fn classifies_phone_numbers() {
        assert_eq!(classify_content("+1 (555) 123-4567"), QrContentType::PhoneNumber);
        assert_eq!(classify_content("0800 555 123"), QrContentType::PhoneNumber);
    }

    #[test]
    fn classifies_wifi_payload() {
        assert_eq!(
            classify_content("WIFI:T:WPA;S:home;P:pass;;"),
            QrContentType::WifiCredentials
        );
    }

    #[test]
    fn classifies_vcard() {
        assert_eq!(
            classify_content("BEGIN:VCARD\nVERSION:3.0\nFN:Alice\nEND:VCARD"),
            QrContentType::ContactInformation
        );
    }

    #[test]
    fn email_check_precedes_vcard_check() {
        // A vCard with an email line hits the email rule first; the cascade
        // order is part of the behavior.
        assert_eq!(
            classify_content("BEGIN:VCARD\nEMAIL:alice@example.com\nEND:VCARD"),
            QrContentType::EmailAddress
        );
    }

    #[test]
    fn plain_text_fallback() {
        assert_eq!(classify_content("plain hello world"), QrContentType::PlainText);
    }

    #[test]
    fn short_plain_text_gets_simple_note() {
        let result = analyze_qr_content("plain hello world");
        assert_eq!(result.type_label, "QR Content - Plain Text");
        assert_eq!(result.title, "QR Code: Plain Text");
        assert!(result.description.contains("This is a simple text-based QR code."));
        assert!(result.description.contains("\"plain hello world\""));
    }

    #[test]
    fn long_plain_text_gets_lengthy_note() {
        let long = "lorem ipsum ".repeat(20);
        let result = analyze_qr_content(&long);
        assert!(result.description.contains("The content is quite lengthy."));
    }

    #[test]
    fn qr_results_are_always_safe() {
        for content in ["WIFI:T:WPA;S:home;P:pass;;", "alice@example.com", "hello"] {
            let result = analyze_qr_content(content);
            assert_eq!(result.safety.safety, Safety::Safe);
            assert!(result.safety.warnings.is_empty());
            assert!(result.metadata.is_none());
        }
    }

    #[test]
    fn analysis_is_idempotent() {
        let first = analyze_qr_content("WIFI:T:WPA;S:home;P:pass;;");
        let second = analyze_qr_content("WIFI:T:WPA;S:home;P:pass;;");
        assert_eq!(first, second);
    }
}
