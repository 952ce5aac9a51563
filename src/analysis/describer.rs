use crate::analysis::classifier::WebsiteType;
use crate::extractor::PageSummary;

const PREVIEW_CHARS: usize = 200;
const MIN_PREVIEW_CHARS: usize = 50;
const MIN_DESCRIPTION_CHARS: usize = 100;
const TOP_HEADINGS: usize = 3;

/// One fixed sentence per website type. Unknown labels fall back to the
/// General Website sentence.
fn type_explanation(website_type: WebsiteType) -> &'static str {
    match website_type {
        WebsiteType::Educational => {
            "This educational website provides learning resources and academic information."
        }
        WebsiteType::Government => {
            "This government website provides official information and services."
        }
        WebsiteType::Ecommerce => {
            "This is an online shopping website where you can purchase products."
        }
        WebsiteType::NewsBlog => "This website provides news articles and blog content.",
        WebsiteType::SearchEngine => {
            "This is a search engine that helps you find information online."
        }
        WebsiteType::SocialMedia => "This is a social media platform for connecting and sharing.",
        WebsiteType::General | WebsiteType::Unknown => {
            "This appears to be a standard website providing information and services."
        }
    }
}

/// Compose the natural-language description from the extracted signals.
/// Parts are concatenated in fixed order and individually omitted when
/// their signal is absent; a generic domain sentence backfills short
/// results up to a readable minimum.
pub fn compose(summary: &PageSummary, website_type: WebsiteType, domain: &str) -> String {
    let mut result = String::new();

    if !summary.title.is_empty() && summary.title != domain {
        result.push_str(&format!("{} - ", summary.title));
    }

    if !summary.description.is_empty() {
        result.push_str(&format!("{} ", summary.description));
    }

    if !summary.headings.is_empty() {
        let top_headings = summary
            .headings
            .iter()
            .take(TOP_HEADINGS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        result.push_str(&format!("The main sections include: {}. ", top_headings));
    }

    let clean_text = summary.body_text.split_whitespace().collect::<Vec<_>>().join(" ");
    let preview: String = clean_text.chars().take(PREVIEW_CHARS).collect();
    if preview.chars().count() > MIN_PREVIEW_CHARS {
        let ellipsis = if clean_text.chars().count() > PREVIEW_CHARS {
            "..."
        } else {
            ""
        };
        result.push_str(&format!("Content preview: \"{}{}\". ", preview, ellipsis));
    }

    result.push_str(type_explanation(website_type));

    if result.chars().count() < MIN_DESCRIPTION_CHARS {
        result.push_str(&format!(
            " The website domain is {}, which suggests it serves its intended audience with relevant content and functionality.",
            domain
        ));
    }

    result
}
