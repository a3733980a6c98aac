//! Assistant endpoint trait.

use sitewire_types::error::{AuthError, RequestError};

/// The two assistant endpoints: authentication and query.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// The reqwest implementation lives in sitewire-infra; tests use
/// call-counting fakes.
pub trait AssistantApi: Send + Sync {
    /// Exchange credentials for a session token.
    ///
    /// Exactly one request per call; any non-success response is
    /// `AuthError::InvalidCredentials`.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<String, AuthError>> + Send;

    /// Ask a question, authenticated by `token`. Returns the answer text.
    ///
    /// Exactly one request per call; no retries.
    fn ask(
        &self,
        token: &str,
        question: &str,
    ) -> impl std::future::Future<Output = Result<String, RequestError>> + Send;
}
