//! Startup hydration sequence.
//!
//! Mirrors the page bootstrap: fragments load sequentially (each awaited,
//! each fail-soft), then the logo strips render into whatever containers
//! now exist. Widget binding belongs to the caller and must happen only
//! after this returns, since every successful load replaces its
//! container's content.

use sitewire_types::config::{FragmentMount, LogoStrip};
use tracing::info;

use crate::fragment::{FragmentFetcher, FragmentLoader};
use crate::layout::scroller::render_logo_strip;
use crate::page::Page;

/// Load every fragment in order, then render the logo strips.
pub async fn hydrate<F: FragmentFetcher>(
    loader: &FragmentLoader<F>,
    page: &mut Page,
    mounts: &[FragmentMount],
    strips: &[LogoStrip],
) {
    for mount in mounts {
        loader.load(page, &mount.container, &mount.path).await;
    }

    for strip in strips {
        render_logo_strip(page, strip);
    }

    info!(fragments = mounts.len(), strips = strips.len(), "layout hydrated");
}
