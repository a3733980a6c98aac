//! Session-authenticated assistant client.
//!
//! The client owns the one session token, orchestrates login and ask
//! requests over an [`api::AssistantApi`] seam, and records the exchange in
//! an append-only [`transcript::Transcript`].

pub mod api;
pub mod client;
pub mod transcript;

pub use api::AssistantApi;
pub use client::{AssistantClient, AuthState, THINKING_PLACEHOLDER, UNAVAILABLE_MESSAGE};
pub use transcript::{MessageHandle, Transcript};
