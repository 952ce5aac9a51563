use std::fmt::{Display, Formatter};

/// Closed set of website-type labels. `Unknown` is reserved for the
/// degraded path; `classify` never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebsiteType {
    Educational,
    Government,
    Ecommerce,
    NewsBlog,
    SearchEngine,
    SocialMedia,
    General,
    Unknown,
}

impl WebsiteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Educational => "Educational",
            Self::Government => "Government",
            Self::Ecommerce => "E-commerce",
            Self::NewsBlog => "News/Blog",
            Self::SearchEngine => "Search Engine",
            Self::SocialMedia => "Social Media",
            Self::General => "General Website",
            Self::Unknown => "Unknown Website",
        }
    }
}

impl Display for WebsiteType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword cascade over page text and domain. The rule order is the
/// contract: the first matching row wins, so a page mentioning both
/// "university" and "shop" is Educational, not E-commerce.
pub fn classify(title: &str, description: &str, body_text: &str, domain: &str) -> WebsiteType {
    let text = format!("{} {} {}", title, description, body_text).to_lowercase();
    let domain = domain.to_lowercase();

    let text_has = |needles: &[&str]| needles.iter().any(|n| text.contains(n));
    let domain_has = |needles: &[&str]| needles.iter().any(|n| domain.contains(n));

    let rules = [
        (
            domain_has(&["edu"]) || text_has(&["university", "school"]),
            WebsiteType::Educational,
        ),
        (
            domain_has(&["gov"]) || text_has(&["government"]),
            WebsiteType::Government,
        ),
        (text_has(&["shop", "buy", "cart"]), WebsiteType::Ecommerce),
        (
            text_has(&["news", "article", "blog"]),
            WebsiteType::NewsBlog,
        ),
        (
            text_has(&["search"]) || domain_has(&["google"]),
            WebsiteType::SearchEngine,
        ),
        (
            text_has(&["social", "profile"]) || domain_has(&["facebook", "twitter"]),
            WebsiteType::SocialMedia,
        ),
    ];

    rules
        .into_iter()
        .find_map(|(hit, label)| hit.then_some(label))
        .unwrap_or(WebsiteType::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_text(text: &str) -> WebsiteType {
        classify(text, "", "", "example.com")
    }

    #[test]
    fn matches_each_category() {
        assert_eq!(classify_text("Welcome to our university"), WebsiteType::Educational);
        assert_eq!(classify_text("government services portal"), WebsiteType::Government);
        assert_eq!(classify_text("add to cart"), WebsiteType::Ecommerce);
        assert_eq!(classify_text("latest news today"), WebsiteType::NewsBlog);
        assert_eq!(classify_text("search the web"), WebsiteType::SearchEngine);
        assert_eq!(classify_text("view my profile"), WebsiteType::SocialMedia);
        assert_eq!(classify_text("just a homepage"), WebsiteType::General);
    }

    #[test]
    fn domain_signals_alone_are_sufficient() {
        assert_eq!(classify("", "", "", "mit.edu"), WebsiteType::Educational);
        assert_eq!(classify("", "", "", "usa.gov"), WebsiteType::Government);
        assert_eq!(classify("", "", "", "google.com"), WebsiteType::SearchEngine);
        assert_eq!(classify("", "", "", "facebook.com"), WebsiteType::SocialMedia);
    }

    #[test]
    fn earlier_rules_take_precedence() {
        // "university" (rule 1) beats "shop" (rule 3) regardless of position.
        assert_eq!(
            classify_text("shop at the university store"),
            WebsiteType::Educational
        );
        // "shop" (rule 3) beats "news" (rule 4).
        assert_eq!(classify_text("news about our shop"), WebsiteType::Ecommerce);
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        assert_eq!(
            classify("University", "", "", "EXAMPLE.COM"),
            WebsiteType::Educational
        );
        assert_eq!(
            classify("", "", "Buy now", "example.com"),
            WebsiteType::Ecommerce
        );
    }

    #[test]
    fn substring_matching_is_deliberate() {
        // "education.example.com" contains "edu"; behavior preserved as-is.
        assert_eq!(
            classify("", "", "", "education.example.com"),
            WebsiteType::Educational
        );
    }
}
