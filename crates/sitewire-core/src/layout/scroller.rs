//! Logo strip scroller.
//!
//! Renders a list of logo files into a scroller container as lazy-loading
//! `img` elements. The list is appended twice so the CSS marquee loops
//! seamlessly. Re-rendering clears the container first, so the operation
//! is safe to repeat after a fragment reload.

use sitewire_types::config::LogoStrip;
use tracing::debug;

use crate::page::{Element, Page};

/// Default class list for strip images when the strip does not override it.
const DEFAULT_IMG_CLASS: &str = "h-12 object-contain flex-shrink-0";

/// Derive an image's alt text from its file name: `-` and `_` become
/// spaces.
pub fn alt_text(file: &str) -> String {
    file.replace(['-', '_'], " ")
}

/// Render `strip` into its container.
///
/// A missing container is a silent no-op (the strip belongs to a different
/// page layout).
pub fn render_logo_strip(page: &mut Page, strip: &LogoStrip) {
    let Some(container) = page.by_id_mut(&strip.container) else {
        debug!(container = %strip.container, "no scroller container, skipping strip");
        return;
    };

    container.clear();

    let img_class = strip.img_class.as_deref().unwrap_or(DEFAULT_IMG_CLASS);
    // Duplicate for the seamless loop.
    for file in strip.files.iter().chain(strip.files.iter()) {
        let mut img = Element::new("img");
        img.set_attr("src", format!("{}{}", strip.base_path, file));
        img.set_attr("loading", "lazy");
        img.set_attr("alt", alt_text(file));
        img.set_classes(img_class);
        container.append_child(img);
    }
}
