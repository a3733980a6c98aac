//! Dark mode toggle with persisted theme choice.
//!
//! The theme lives in the local (cross-session) store: `"dark"` or
//! `"light"`. The document root carries the `dark` class and the toggle
//! icon tracks the current theme.

use tracing::warn;

use crate::page::Page;
use crate::store::{THEME_KEY, StateStore};

const DARK_CLASS: &str = "dark";
const MOON_ICON: &str = "ri-moon-line";
const SUN_ICON: &str = "ri-sun-line";

/// Dark-mode widget bound to a toggle button and its icon.
pub struct DarkMode<S: StateStore> {
    store: S,
    icon_id: String,
}

impl<S: StateStore> DarkMode<S> {
    /// Bind to the toggle and icon elements, apply the persisted theme to
    /// the document root, and sync the icon. Returns `None` when either
    /// element is absent.
    pub fn bind(page: &mut Page, store: S, toggle_id: &str, icon_id: &str) -> Option<Self> {
        page.by_id(toggle_id)?;
        page.by_id(icon_id)?;

        let widget = Self {
            store,
            icon_id: icon_id.to_string(),
        };

        match widget.store.get(THEME_KEY) {
            Ok(Some(theme)) if theme == "dark" => {
                page.document_mut().add_class(DARK_CLASS);
            }
            Ok(_) => {}
            Err(err) => warn!(%err, "theme store unreadable; defaulting to light"),
        }
        widget.sync_icon(page);

        Some(widget)
    }

    /// Flip the theme, persist the choice, and sync the icon.
    pub fn toggle(&self, page: &mut Page) {
        let dark = page.document_mut().toggle_class(DARK_CLASS);
        let theme = if dark { "dark" } else { "light" };
        if let Err(err) = self.store.set(THEME_KEY, theme) {
            warn!(%err, "failed to persist theme choice");
        }
        self.sync_icon(page);
    }

    pub fn is_dark(&self, page: &Page) -> bool {
        page.document().has_class(DARK_CLASS)
    }

    /// Replace the icon's class list to match the current theme.
    fn sync_icon(&self, page: &mut Page) {
        let dark = page.document().has_class(DARK_CLASS);
        if let Some(icon) = page.by_id_mut(&self.icon_id) {
            icon.set_classes(if dark { MOON_ICON } else { SUN_ICON });
        }
    }
}
