use std::path::Path;

use url::Url;

use crate::dom::parser::parse_source;
use crate::dom::SourceDocument;

/// Result of fetching a URL
#[derive(Clone)]
pub struct FetchResult {
    pub html: String,
    /// Final URL after redirects
    pub url: String,
}

/// Error while obtaining the source document
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Whether `location` should be fetched over the network rather than read
/// from disk.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Fetch a URL and return the HTML content (blocking).
pub fn fetch_url(url_str: &str) -> Result<FetchResult, FetchError> {
    let parsed = Url::parse(url_str)?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("mindmap-lens/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;

    let response = client
        .get(parsed.as_str())
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    if !response.status().is_success() {
        return Err(FetchError::Status {
            status,
            url: final_url,
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    let html = response.text()?;
    log::debug!("Fetched {} ({} bytes, {})", final_url, html.len(), content_type);

    Ok(FetchResult {
        html,
        url: final_url,
    })
}

/// Load the source document from a URL or a local HTML file and flatten it,
/// scoped to `panel` when given.
pub fn load_source(location: &str, panel: Option<&str>) -> Result<SourceDocument, FetchError> {
    if is_remote(location) {
        let fetched = fetch_url(location)?;
        return Ok(parse_source(&fetched.html, &fetched.url, panel));
    }

    let path = Path::new(location);
    let html = std::fs::read_to_string(path).map_err(|source| FetchError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_source(&html, location, panel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://example.com/article"));
        assert!(is_remote("http://localhost:8080"));
        assert!(!is_remote("./page.html"));
        assert!(!is_remote("/tmp/https-page.html"));
    }

    #[test]
    fn invalid_url_is_rejected_before_network() {
        assert!(matches!(fetch_url("https://"), Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_source("/no/such/page.html", None).unwrap_err();
        assert!(err.to_string().contains("/no/such/page.html"));
    }
}
