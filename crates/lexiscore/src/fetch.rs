//! Document text retrieval.
//!
//! [`Fetcher`] resolves a source locator to raw text. `http://` and `https://`
//! locators are downloaded (with the `fetch` feature); anything else is read
//! as a local file. HTML is reduced to its article text with
//! [`extract_article_text`].

use camino::Utf8Path;
use lexiscore_core::{FetchError, TextSource};
use scraper::{ElementRef, Html, Selector};

/// Retrieves document text for the batch driver.
#[derive(Debug, Clone)]
pub struct Fetcher {
    #[cfg(feature = "fetch")]
    client: reqwest::blocking::Client,
    max_bytes: Option<usize>,
}

impl Fetcher {
    /// Create a fetcher with a per-request timeout and an optional size limit.
    #[cfg(feature = "fetch")]
    pub fn new(timeout: std::time::Duration, max_bytes: Option<usize>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lexiscore/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, max_bytes })
    }

    /// Create a fetcher with an optional size limit (local files only).
    #[cfg(not(feature = "fetch"))]
    pub fn new(_timeout: std::time::Duration, max_bytes: Option<usize>) -> anyhow::Result<Self> {
        Ok(Self { max_bytes })
    }

    #[cfg(feature = "fetch")]
    #[tracing::instrument(skip(self))]
    fn fetch_http(&self, url: &str) -> Result<String, FetchError> {
        let request_error = |e: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        if let (Some(limit), Some(size)) = (self.max_bytes, response.content_length()) {
            check_size(url, size, limit)?;
        }

        let body = response.text().map_err(request_error)?;
        if let Some(limit) = self.max_bytes {
            check_size(url, body.len() as u64, limit)?;
        }
        tracing::debug!(bytes = body.len(), "page downloaded");
        Ok(extract_article_text(&body))
    }

    #[cfg(not(feature = "fetch"))]
    fn fetch_http(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Unsupported(url.to_string()))
    }
}

impl TextSource for Fetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if is_http(url) {
            self.fetch_http(url)
        } else {
            read_local(Utf8Path::new(url), self.max_bytes)
        }
    }
}

/// Whether a locator should be fetched over the network.
pub fn is_http(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Read a local document, reducing `.html`/`.htm` files to article text.
///
/// The file size is checked against `max_bytes` before reading. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn read_local(path: &Utf8Path, max_bytes: Option<usize>) -> Result<String, FetchError> {
    let io_error = |source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path.as_std_path()).map_err(io_error)?;
    if let Some(limit) = max_bytes {
        check_size(path.as_str(), metadata.len(), limit)?;
    }

    let bytes = std::fs::read(path.as_std_path()).map_err(io_error)?;
    let content = String::from_utf8_lossy(&bytes);

    match path.extension().map(str::to_ascii_lowercase).as_deref() {
        Some("html" | "htm") => Ok(extract_article_text(&content)),
        _ => Ok(content.into_owned()),
    }
}

fn check_size(url: &str, size: u64, limit: usize) -> Result<(), FetchError> {
    if size > limit as u64 {
        return Err(FetchError::TooLarge {
            url: url.to_string(),
            size,
            limit,
        });
    }
    Ok(())
}

/// Reduce an HTML page to `title + "\n\n" + body`.
///
/// The title is the text of the first `<h1>` (empty when there is none). The
/// body is the text of every `<p>`, joined by single spaces. Each element's
/// text nodes are trimmed, empty ones dropped, and the rest concatenated.
pub fn extract_article_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let h1 = Selector::parse("h1").expect("valid selector");
    let p = Selector::parse("p").expect("valid selector");

    let title = document
        .select(&h1)
        .next()
        .map(stripped_text)
        .unwrap_or_default();
    let body = document
        .select(&p)
        .map(stripped_text)
        .collect::<Vec<_>>()
        .join(" ");

    format!("{title}\n\n{body}")
}

fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = r#"<html><head><title>ignored</title></head><body>
        <nav><p>Menu</p></nav>
        <h1>  Quarterly <em>Results</em> </h1>
        <h1>Second heading</h1>
        <div class="post">
          <p>Revenue grew <b>strongly</b>.</p>
          <p>   </p>
          <p> We remain optimistic. </p>
        </div>
    </body></html>"#;

    #[test]
    fn extracts_title_and_paragraphs() {
        // Empty paragraphs still take a slot in the join.
        assert_eq!(
            extract_article_text(PAGE),
            "QuarterlyResults\n\nMenu Revenue grewstrongly.  We remain optimistic."
        );
    }

    #[test]
    fn missing_title_yields_leading_blank_line() {
        let text = extract_article_text("<p>Only a paragraph.</p>");
        assert_eq!(text, "\n\nOnly a paragraph.");
    }

    #[test]
    fn http_detection() {
        assert!(is_http("https://example.com/a"));
        assert!(is_http("HTTP://EXAMPLE.COM"));
        assert!(!is_http("articles/a.html"));
        assert!(!is_http("file:///tmp/a.txt"));
    }

    #[test]
    fn local_text_file_is_read_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("a.txt")).unwrap();
        fs::write(&path, "Plain <p>text</p>.").unwrap();

        assert_eq!(read_local(&path, None).unwrap(), "Plain <p>text</p>.");
    }

    #[test]
    fn local_html_file_is_extracted() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("a.HTML")).unwrap();
        fs::write(&path, "<h1>T</h1><p>Body.</p>").unwrap();

        assert_eq!(read_local(&path, None).unwrap(), "T\n\nBody.");
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.txt")).unwrap();
        fs::write(&path, "x".repeat(100)).unwrap();

        let err = read_local(&path, Some(10)).unwrap_err();
        assert!(matches!(err, FetchError::TooLarge { size: 100, limit: 10, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_local(Utf8Path::new("/nonexistent/doc.txt"), None).unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn fetcher_reads_local_paths() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("doc.txt")).unwrap();
        fs::write(&path, "Some text.").unwrap();

        let fetcher = Fetcher::new(std::time::Duration::from_secs(1), None).unwrap();
        assert_eq!(fetcher.fetch_text(path.as_str()).unwrap(), "Some text.");
    }
}
