//! Multipart form endpoint.
//!
//! The contact form posts to an external collector (e.g. a hosted script
//! endpoint). Only the response status class matters; the body is ignored.

use sitewire_core::form::FormEndpoint;
use sitewire_types::error::FormError;

/// reqwest multipart implementation of [`FormEndpoint`].
#[derive(Debug, Clone)]
pub struct HttpFormEndpoint {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpFormEndpoint {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }
}

impl FormEndpoint for HttpFormEndpoint {
    async fn submit(&self, fields: &[(String, String)]) -> Result<(), FormError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }

        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_submit_posts_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/collect"))
            .and(header_regex("content-type", "multipart/form-data"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = HttpFormEndpoint::new(format!("{}/collect", server.uri()));
        let fields = vec![("email".to_string(), "a@example.com".to_string())];

        endpoint.submit(&fields).await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_maps_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/collect"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let endpoint = HttpFormEndpoint::new(format!("{}/collect", server.uri()));
        let err = endpoint.submit(&[]).await.unwrap_err();

        assert!(matches!(err, FormError::Status(500)));
    }
}
