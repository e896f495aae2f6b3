//! Shared constants for the pagemark crate.

// ── Element ids ─────────────────────────────────────────────────

/// Element id of the bounding-box overlay.
pub const OVERLAY_ID: &str = "option-el-box";

/// Element id of the point marker.
pub const MARKER_ID: &str = "option-el-position";

// ── Appearance ──────────────────────────────────────────────────

/// Stacking order shared by the overlay and the marker.
pub const Z_INDEX: i32 = 1000;

pub const OVERLAY_BORDER: &str = "2px solid rgba(255,0,0)";

pub const OVERLAY_BORDER_RADIUS: &str = "5px";

/// Marker circle diameter in CSS pixels.
pub const MARKER_DIAMETER_PX: f64 = 10.0;

pub const MARKER_COLOR: &str = "rgba(255,0,0)";

/// Stylesheet that disables text selection while a drag swipe is in flight.
pub const NO_SELECT_CSS: &str = "* {user-select: none !important;}";

// ── Geometry ────────────────────────────────────────────────────

/// Fraction of the box width/height used when a click anchor is given without an offset.
pub const DEFAULT_ANCHOR_OFFSET: f64 = 0.25;

/// Pointer-move steps for a drag swipe.
pub const DRAG_STEPS: u32 = 1000;

/// Fraction of the viewport scrolled by one wheel swipe.
pub const WHEEL_FRACTION: f64 = 0.7;
