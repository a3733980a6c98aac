//! The assistant client: one session token, a login flow, and an ask flow
//! that records into the transcript.
//!
//! The client is constructed once and shared by reference with whatever
//! binds UI events. All interior state sits behind mutexes that are never
//! held across an await, so overlapping `ask` calls interleave safely:
//! each call owns its own placeholder handle and resolves independently,
//! in whatever order the responses arrive.

use std::sync::{Mutex, MutexGuard};

use secrecy::{ExposeSecret, SecretString};
use sitewire_types::error::AuthError;
use sitewire_types::message::{Message, Origin};
use tracing::{debug, info, warn};

use crate::assistant::api::AssistantApi;
use crate::assistant::transcript::Transcript;
use crate::store::{SESSION_TOKEN_KEY, StateStore};

/// Placeholder text shown while an ask request is in flight.
pub const THINKING_PLACEHOLDER: &str = "Thinking…";

/// Fixed text the placeholder becomes when an ask request fails.
pub const UNAVAILABLE_MESSAGE: &str = "Assistant unavailable.";

/// Authentication state, derived from token presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    LoggedOut,
    LoggedIn,
}

/// Session-authenticated request client for the assistant widget.
///
/// Generic over the endpoint seam and the token store so both can be faked
/// in tests. At most one token is live at a time; it is read before every
/// ask and written only by `login`.
pub struct AssistantClient<A: AssistantApi, S: StateStore> {
    api: A,
    store: S,
    token: Mutex<Option<SecretString>>,
    transcript: Mutex<Transcript>,
    prompt_visible: Mutex<bool>,
}

impl<A: AssistantApi, S: StateStore> AssistantClient<A, S> {
    /// Create a client, restoring any token previously persisted in the
    /// session store. Starts `LoggedIn` when a token is found; otherwise
    /// the login prompt is visible from the start.
    pub fn new(api: A, store: S) -> Self {
        let token = match store.get(SESSION_TOKEN_KEY) {
            Ok(Some(value)) => {
                debug!("restored session token from store");
                Some(SecretString::from(value))
            }
            Ok(None) => None,
            Err(err) => {
                warn!(%err, "session store unreadable; starting logged out");
                None
            }
        };
        let prompt_visible = token.is_none();

        Self {
            api,
            store,
            token: Mutex::new(token),
            transcript: Mutex::new(Transcript::new()),
            prompt_visible: Mutex::new(prompt_visible),
        }
    }

    pub fn state(&self) -> AuthState {
        if self.token_lock().is_some() {
            AuthState::LoggedIn
        } else {
            AuthState::LoggedOut
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state() == AuthState::LoggedIn
    }

    /// Whether the login overlay is currently shown.
    pub fn login_prompt_visible(&self) -> bool {
        *self.prompt_lock()
    }

    /// Re-show the login overlay (it can always be brought back).
    pub fn show_login_prompt(&self) {
        *self.prompt_lock() = true;
    }

    /// Authenticate and persist the resulting session token.
    ///
    /// Empty (post-trim) credentials fail locally with
    /// [`AuthError::MissingCredentials`] and no request is made. A rejected
    /// login leaves the stored token and state untouched. On success the
    /// token is persisted, the state becomes `LoggedIn`, and the login
    /// overlay is hidden.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let token = self.api.login(username, password).await?;

        // A store write failure is not fatal: the token stays live in
        // memory for the rest of the session.
        if let Err(err) = self.store.set(SESSION_TOKEN_KEY, &token) {
            warn!(%err, "failed to persist session token");
        }

        *self.token_lock() = Some(SecretString::from(token));
        *self.prompt_lock() = false;
        info!("assistant login succeeded");
        Ok(())
    }

    /// Ask a question and record the exchange in the transcript.
    ///
    /// While logged out this surfaces the login prompt and sends nothing.
    /// An empty (post-trim) question is a silent no-op. Otherwise a `user`
    /// entry and a "Thinking…" placeholder are appended, one request is
    /// issued, and the placeholder alone is amended with either the answer
    /// or the fixed unavailability message. Failures are terminal for the
    /// call; retrying is up to the user.
    pub async fn ask(&self, question: &str) {
        let token = self.token_lock().clone();
        let Some(token) = token else {
            debug!("ask while logged out; surfacing login prompt");
            *self.prompt_lock() = true;
            return;
        };

        let question = question.trim();
        if question.is_empty() {
            return;
        }

        let placeholder = {
            let mut transcript = self.transcript_lock();
            transcript.push(Origin::User, question);
            transcript.push(Origin::Assistant, THINKING_PLACEHOLDER)
        };

        match self.api.ask(token.expose_secret(), question).await {
            Ok(answer) => {
                self.transcript_lock().amend(placeholder, answer);
            }
            Err(err) => {
                warn!(%err, "ask request failed");
                self.transcript_lock().amend(placeholder, UNAVAILABLE_MESSAGE);
            }
        }
    }

    /// Snapshot of the transcript, in append order.
    pub fn messages(&self) -> Vec<Message> {
        self.transcript_lock().messages().to_vec()
    }

    pub fn transcript_len(&self) -> usize {
        self.transcript_lock().len()
    }

    fn token_lock(&self) -> MutexGuard<'_, Option<SecretString>> {
        self.token.lock().expect("token lock poisoned")
    }

    fn transcript_lock(&self) -> MutexGuard<'_, Transcript> {
        self.transcript.lock().expect("transcript lock poisoned")
    }

    fn prompt_lock(&self) -> MutexGuard<'_, bool> {
        self.prompt_visible.lock().expect("prompt lock poisoned")
    }
}
