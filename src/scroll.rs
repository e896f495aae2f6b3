//! Scrollbar presence: content size versus viewport size on one axis.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Content and viewport sizes in CSS pixels, read fresh on every query.
///
/// `scroll_*` come from `document.body`; `inner_*` from `window`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl PageMetrics {
    /// True when the content is strictly larger than the viewport along `axis`.
    #[must_use]
    pub fn overflows(&self, axis: Axis) -> bool {
        match axis {
            Axis::Vertical => self.scroll_height > self.inner_height,
            Axis::Horizontal => self.scroll_width > self.inner_width,
        }
    }
}
