//! HTTP assistant endpoints.
//!
//! Two JSON POST endpoints: login exchanges credentials for a token, ask
//! carries the token and a question and returns an answer. Status mapping
//! follows the widget contract: any non-success login response reads as
//! invalid credentials, while ask failures keep their status code for
//! diagnostics.

use serde::{Deserialize, Serialize};
use sitewire_core::assistant::AssistantApi;
use sitewire_types::config::SiteConfig;
use sitewire_types::error::{AuthError, RequestError};

/// reqwest-backed implementation of [`AssistantApi`].
#[derive(Debug, Clone)]
pub struct HttpAssistantApi {
    client: reqwest::Client,
    base_url: String,
    login_path: String,
    ask_path: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    token: &'a str,
    question: &'a str,
}

#[derive(Deserialize)]
struct AskResponse {
    answer: String,
}

impl HttpAssistantApi {
    pub fn new(
        base_url: impl Into<String>,
        login_path: impl Into<String>,
        ask_path: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            login_path: login_path.into(),
            ask_path: ask_path.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.base_url, &config.login_path, &config.ask_path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl AssistantApi for HttpAssistantApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let response = self
            .client
            .post(self.url(&self.login_path))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidCredentials);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        Ok(body.token)
    }

    async fn ask(&self, token: &str, question: &str) -> Result<String, RequestError> {
        let response = self
            .client
            .post(self.url(&self.ask_path))
            .json(&AskRequest { token, question })
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| RequestError::MalformedResponse(e.to_string()))?;
        Ok(body.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> HttpAssistantApi {
        HttpAssistantApi::new(server.uri(), "/api/login", "/api/ask")
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({"username": "alice", "password": "correct"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
            .expect(1)
            .mount(&server)
            .await;

        let token = api(&server).login("alice", "correct").await.unwrap();
        assert_eq!(token, "abc123");
    }

    #[tokio::test]
    async fn test_login_rejection_is_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = api(&server).login("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_without_token_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let err = api(&server).login("alice", "correct").await.unwrap_err();
        assert!(matches!(err, AuthError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_ask_returns_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .and(body_json(
                json!({"token": "abc123", "question": "What is PixelBotix?"}),
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"answer": "A robotics company."})),
            )
            .mount(&server)
            .await;

        let answer = api(&server)
            .ask("abc123", "What is PixelBotix?")
            .await
            .unwrap();
        assert_eq!(answer, "A robotics company.");
    }

    #[tokio::test]
    async fn test_ask_keeps_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = api(&server).ask("abc123", "hi").await.unwrap_err();
        assert!(matches!(err, RequestError::Status(503)));
    }

    #[tokio::test]
    async fn test_ask_transport_failure() {
        let api = HttpAssistantApi::new("http://127.0.0.1:1", "/api/login", "/api/ask");
        let err = api.ask("abc123", "hi").await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }
}
