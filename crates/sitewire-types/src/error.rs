use thiserror::Error;

/// Errors from the authentication flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password was empty after trimming. Handled locally;
    /// no network call is made.
    #[error("username and password are required")]
    MissingCredentials,

    /// The login endpoint rejected the credentials (non-success status).
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed login response: {0}")]
    MalformedResponse(String),
}

/// Errors from the ask (query) endpoint.
///
/// Every variant is surfaced to the user as the same fixed unavailability
/// message; the variants exist for diagnostics.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("query endpoint returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed query response: {0}")]
    MalformedResponse(String),
}

/// Errors from fragment fetching.
///
/// Load failures are logged and swallowed by the loader; the target
/// container is left untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fragment endpoint returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from the external contact-form endpoint.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("form endpoint returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from state stores (session and local key-value storage).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid credentials"
        );
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "username and password are required"
        );
    }

    #[test]
    fn test_request_error_display() {
        let err = RequestError::Status(503);
        assert_eq!(err.to_string(), "query endpoint returned HTTP 503");
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
