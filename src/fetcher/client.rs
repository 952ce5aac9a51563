use crate::fetcher::{errors::FetchError, types::PageResponse};
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(FETCH_TIMEOUT)
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                    .parse()
                    .unwrap(),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Normalize a user-supplied URL: trim it, prepend `https://` when no scheme
/// is present, and require a host. Anything that still fails to parse is
/// `InvalidUrl` — there is no fallback domain to analyze.
pub fn normalize_url(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)?;
    if parsed.host_str().is_none() {
        return Err(FetchError::InvalidUrl(format!("no host in '{}'", candidate)));
    }
    Ok(parsed)
}

/// Single GET attempt with a hard timeout. Non-2xx statuses are not errors:
/// the body is still worth summarizing and the status surfaces in metadata.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &Url) -> Result<PageResponse, FetchError> {
    let response = HTTP_CLIENT
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let url_final = response.url().clone();
    let status = response.status();

    let body_utf8 = response
        .text()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    Ok(PageResponse {
        url_final,
        status,
        body_utf8,
    })
}
