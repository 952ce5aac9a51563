pub mod model;

pub use model::PageSummary;

use reqwest::StatusCode;
use scraper::{Html, Selector};
use tracing::debug;

const MAX_HEADINGS: usize = 5;
const BODY_SAMPLE_CHARS: usize = 1000;

/// Parse raw HTML into a `PageSummary`. The parser is tolerant, so this is
/// total: malformed markup and missing elements degrade to empty/zero values.
pub fn summarize(html: &str, domain: &str, status: StatusCode, https: bool) -> PageSummary {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();
    // A page with no usable title is labeled by its domain instead.
    let title = if title.is_empty() {
        domain.to_string()
    } else {
        title
    };

    let description = meta_content(&document, "meta[name='description']")
        .or_else(|| meta_content(&document, "meta[property='og:description']"))
        .unwrap_or_default();

    let heading_selector = Selector::parse("h1, h2, h3").unwrap();
    let headings: Vec<String> = document
        .select(&heading_selector)
        .take(MAX_HEADINGS)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    let body_selector = Selector::parse("body").unwrap();
    let body_text: String = document
        .select(&body_selector)
        .next()
        .map(|body| body.text().collect::<String>())
        .unwrap_or_default()
        .chars()
        .take(BODY_SAMPLE_CHARS)
        .collect();

    let link_selector = Selector::parse("a[href]").unwrap();
    let link_count = document.select(&link_selector).count();

    let image_selector = Selector::parse("img[src]").unwrap();
    let image_count = document.select(&image_selector).count();

    debug!(link_count, image_count, "page summarized");

    PageSummary {
        title,
        description,
        headings,
        body_text,
        link_count,
        image_count,
        status,
        https,
    }
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .find(|content| !content.is_empty())
        .map(|content| content.to_string())
}
