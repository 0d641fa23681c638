//! HTTP transport for feed, boundary, and detail-page downloads.

use std::future::Future;
use std::time::Duration;

use reqwest::{redirect, Client, StatusCode};

use crate::error::ScraperError;

/// Redirect hops followed before giving up on a URL.
const MAX_REDIRECTS: usize = 10;

/// Source of page bodies.
///
/// The pipeline only ever needs "GET this URL as text"; keeping that behind a
/// trait lets the enrichment scheduler be driven by an in-memory fetcher in
/// tests.
pub trait PageFetcher {
    /// Fetches `url` and returns the body as text.
    ///
    /// Implementations must follow 301/302 redirects and fail on any final
    /// status other than 200. Callers never retry.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// `reqwest`-backed [`PageFetcher`].
///
/// Follows 301 and 302 responses up to [`MAX_REDIRECTS`] hops. Any other
/// redirect status is returned as-is and fails like a non-200. A final 404 is reported as [`ScraperError::NotFound`], any other
/// non-200 status as [`ScraperError::UnexpectedStatus`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .redirect(redirect_policy())
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

fn redirect_policy() -> redirect::Policy {
    redirect::Policy::custom(|attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else if matches!(
            attempt.status(),
            StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND
        ) {
            attempt.follow()
        } else {
            attempt.stop()
        }
    })
}

impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }
        if status != StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
