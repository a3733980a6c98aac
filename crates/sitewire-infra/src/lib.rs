//! Infrastructure adapters for sitewire.
//!
//! Concrete implementations of the trait seams defined in sitewire-core:
//! reqwest-backed fetchers and endpoints, in-memory and file-backed state
//! stores, and the `config.toml` loader.

pub mod config;
pub mod http;
pub mod store;
