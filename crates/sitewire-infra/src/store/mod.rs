//! State store implementations.
//!
//! `MemorySessionStore` lives for the process, standing in for the
//! browser's session storage (the token's home). `FileLocalStore` persists
//! across runs, standing in for local storage (the theme's home).

pub mod local;
pub mod session;

pub use local::FileLocalStore;
pub use session::MemorySessionStore;
