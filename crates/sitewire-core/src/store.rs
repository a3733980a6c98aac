//! State store trait.
//!
//! Two scopes exist at runtime, mirroring the browser's storage pair:
//! a session-scoped store (lifetime of the process, holds the assistant
//! token) and a local store (survives restarts, holds the theme choice).
//! Both speak the same interface so either can be swapped for a fake in
//! tests. Implementations live in sitewire-infra.

use sitewire_types::error::StoreError;

/// Session-store key under which the assistant token is persisted.
pub const SESSION_TOKEN_KEY: &str = "assistant.session_token";

/// Local-store key under which the theme choice is persisted.
pub const THEME_KEY: &str = "theme";

/// String key-value storage.
///
/// Reads are synchronous snapshots; the single-threaded login flow is the
/// only writer of the token key, so no coordination beyond the store's own
/// interior locking is needed.
pub trait StateStore: Send + Sync {
    /// Get a value. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set a value (upsert).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. No-op if absent.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
