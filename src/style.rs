//! Inline CSS declarations for the overlay and marker.
//!
//! Split into a base set, applied once when the element is created, and a
//! placement set, applied on every call. Values are formatted the way a JS
//! `number + "%"` concatenation would print them (`50`, not `50.0`).

use crate::config::MarkerConfig;
use crate::geom::{BBox, Point};

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// A CSS property name and its value.
pub type Declaration = (&'static str, String);

#[must_use]
pub fn overlay_base(config: &MarkerConfig) -> Vec<Declaration> {
    vec![
        ("position", "absolute".to_owned()),
        ("z-index", config.z_index.to_string()),
        ("border", config.overlay_border.clone()),
        ("border-radius", config.overlay_border_radius.clone()),
        ("pointer-events", "none".to_owned()),
    ]
}

/// Offsets and size as percentages of the page.
#[must_use]
pub fn overlay_placement(bbox: BBox) -> Vec<Declaration> {
    vec![
        ("top", percent(bbox.y1)),
        ("left", percent(bbox.x1)),
        ("width", percent(bbox.width())),
        ("height", percent(bbox.height())),
    ]
}

#[must_use]
pub fn marker_base(config: &MarkerConfig) -> Vec<Declaration> {
    let diameter = px(config.marker_diameter_px);
    vec![
        ("position", "absolute".to_owned()),
        ("z-index", config.z_index.to_string()),
        ("width", diameter.clone()),
        ("height", diameter),
        ("border-radius", "50%".to_owned()),
        ("background-color", config.marker_color.clone()),
        ("transform", "translate(-50%, -50%)".to_owned()),
        ("pointer-events", "none".to_owned()),
    ]
}

/// Pixel offsets of the marker center.
#[must_use]
pub fn marker_placement(point: Point) -> Vec<Declaration> {
    vec![("left", px(point.x)), ("top", px(point.y))]
}

/// Stylesheet hiding the overlay, passed to screenshot calls so it never shows up in captures.
#[must_use]
pub fn overlay_screenshot_css(config: &MarkerConfig) -> String {
    format!("#{} {{display: none;}}", config.overlay_id)
}

fn percent(fraction: f64) -> String {
    format!("{}%", css_number(fraction * 100.0))
}

fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}

// JS prints -0 as "0".
fn css_number(value: f64) -> f64 {
    value + 0.0
}
