//! Back-to-top indicator with a scroll-progress circle.
//!
//! The circle's stroke offset tracks how far down the document the viewport
//! is; the indicator appears once the page has scrolled past a threshold.

use crate::page::Page;

/// Radius of the progress circle in SVG user units.
pub const CIRCLE_RADIUS: f64 = 15.9155;

/// Scroll offset (px) past which the indicator is shown.
pub const SHOW_THRESHOLD: f64 = 200.0;

const SHOW_CLASS: &str = "show";

/// Full circumference of the progress circle.
pub fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * CIRCLE_RADIUS
}

/// Stroke dash offset for a scroll position.
///
/// Offset equals the full circumference at the top of the page and shrinks
/// to zero at the bottom. A zero or negative scrollable height means there
/// is nothing to scroll, so progress stays at zero.
pub fn dash_offset(scroll_top: f64, scrollable_height: f64) -> f64 {
    let ratio = if scrollable_height > 0.0 {
        (scroll_top / scrollable_height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    circumference() * (1.0 - ratio)
}

/// The back-to-top widget, bound to the indicator wrapper and the circle
/// element inside it.
#[derive(Debug)]
pub struct ScrollProgress {
    indicator_id: String,
    circle_id: String,
}

impl ScrollProgress {
    /// Bind to the indicator; primes the circle's dash attributes to the
    /// "nothing scrolled" state. Returns `None` when either element is
    /// absent.
    pub fn bind(page: &mut Page, indicator_id: &str, circle_id: &str) -> Option<Self> {
        page.by_id(indicator_id)?;
        let circle = page.by_id_mut(circle_id)?;
        circle.set_attr("stroke-dasharray", format!("{}", circumference()));
        circle.set_attr("stroke-dashoffset", format!("{}", circumference()));

        Some(Self {
            indicator_id: indicator_id.to_string(),
            circle_id: circle_id.to_string(),
        })
    }

    /// Update the circle and visibility for a new scroll position.
    ///
    /// `scrollable_height` is the document height minus the viewport
    /// height.
    pub fn on_scroll(&self, page: &mut Page, scroll_top: f64, scrollable_height: f64) {
        if let Some(circle) = page.by_id_mut(&self.circle_id) {
            let offset = dash_offset(scroll_top, scrollable_height);
            circle.set_attr("stroke-dashoffset", format!("{offset}"));
        }

        if let Some(indicator) = page.by_id_mut(&self.indicator_id) {
            if scroll_top > SHOW_THRESHOLD {
                indicator.add_class(SHOW_CLASS);
            } else {
                indicator.remove_class(SHOW_CLASS);
            }
        }
    }

    pub fn is_visible(&self, page: &Page) -> bool {
        page.by_id(&self.indicator_id)
            .is_some_and(|el| el.has_class(SHOW_CLASS))
    }
}
