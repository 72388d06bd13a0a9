use crate::config::FetchConfig;
use crate::error::FetchError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Source of raw page bodies for absolute URLs.
///
/// The resolver only ever talks to this trait, so tests and embedding hosts
/// can supply their own transport.
pub trait PageFetcher: Send + Sync {
    /// GET `url`, following redirects, and return the final body as text.
    ///
    /// HTTP error statuses still yield `Ok` with whatever body came back.
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send + 'a>>;
}

/// `reqwest`-backed fetcher that presents itself as a desktop browser.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                url,
                status = status.as_u16(),
                "non-success status, classifying body anyway"
            );
        }
        tracing::trace!(url, final_url = %response.url(), "page fetched");

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send + 'a>> {
        Box::pin(self.get_text(url))
    }
}
