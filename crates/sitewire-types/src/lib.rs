//! Shared domain types for sitewire.
//!
//! This crate contains the types used across the sitewire runtime:
//! transcript messages, site configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod message;
