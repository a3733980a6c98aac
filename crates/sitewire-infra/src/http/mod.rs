//! HTTP adapters built on reqwest.
//!
//! Clients are built with transport defaults only: the fragment and
//! assistant contracts specify a single attempt per call with no bespoke
//! timeouts or retries.

pub mod assistant;
pub mod form;
pub mod fragments;

pub use assistant::HttpAssistantApi;
pub use form::HttpFormEndpoint;
pub use fragments::HttpFragmentFetcher;
