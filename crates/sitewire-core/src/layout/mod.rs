//! Layout-level UI widgets and the startup hydration sequence.
//!
//! Each widget is a capability-based binder: it is handed the element ids
//! it operates on, checks they exist at bind time, and then manipulates the
//! page through those handles only. Binding never survives a fragment
//! reload -- after a container's content is replaced, widgets are rebuilt
//! fresh, so there is no stale-handler or double-binding state to guard.

pub mod dark_mode;
pub mod hydrate;
pub mod menu;
pub mod progress;
pub mod scroller;

pub use dark_mode::DarkMode;
pub use hydrate::hydrate;
pub use menu::{MegaMenu, MenuSection, MobileMenu};
pub use progress::ScrollProgress;
pub use scroller::render_logo_strip;
