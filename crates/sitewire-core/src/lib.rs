//! Core logic for sitewire: the explicit page model, fragment hydration,
//! the session-authenticated assistant client, layout widgets, and the
//! contact-form flow.
//!
//! This crate defines the trait seams (fetchers, endpoints, state stores)
//! and never talks to the network or filesystem itself; concrete adapters
//! live in sitewire-infra.

pub mod assistant;
pub mod form;
pub mod fragment;
pub mod layout;
pub mod page;
pub mod store;
