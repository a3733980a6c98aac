//! HTTP fragment fetcher.
//!
//! Fragments may change between deploys and must not be served stale, so
//! every request carries `Cache-Control: no-cache`.

use reqwest::header::CACHE_CONTROL;
use sitewire_core::fragment::FragmentFetcher;
use sitewire_types::error::LoadError;

/// Fetches fragment markup over HTTP, relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFragmentFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFragmentFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl FragmentFetcher for HttpFragmentFetcher {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let response = self
            .client
            .get(self.url(path))
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body_and_disables_caching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/partials/navbar.html"))
            .and(header("cache-control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<nav>hi</nav>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFragmentFetcher::new(server.uri());
        let body = fetcher.fetch("/partials/navbar.html").await.unwrap();

        assert_eq!(body, "<nav>hi</nav>");
    }

    #[tokio::test]
    async fn test_fetch_maps_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/partials/footer.html"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFragmentFetcher::new(server.uri());
        let err = fetcher.fetch("/partials/footer.html").await.unwrap_err();

        assert!(matches!(err, LoadError::Status(404)));
    }

    #[tokio::test]
    async fn test_fetch_maps_transport_failure() {
        // Nothing listens on port 1.
        let fetcher = HttpFragmentFetcher::new("http://127.0.0.1:1");
        let err = fetcher.fetch("/partials/navbar.html").await.unwrap_err();

        assert!(matches!(err, LoadError::Transport(_)));
    }
}
