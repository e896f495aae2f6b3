//! Swipe planning.
//!
//! Pages that scroll are swiped with the mouse wheel. Mobile-emulated pages
//! without a scrollbar on the swipe axis (carousels, swipeable panels) only
//! react to a pointer drag, so those get a drag between two fixed points.

use serde::Serialize;

use crate::consts::{DRAG_STEPS, WHEEL_FRACTION};
use crate::geom::{DeviceSize, Direction};

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

/// What the harness should do with its pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Gesture {
    /// Press at `from`, move to `to` in `steps` moves, release. Pixel coordinates.
    Drag { from: (i32, i32), to: (i32, i32), steps: u32 },
    /// A single wheel event.
    Wheel { delta_x: f64, delta_y: f64 },
}

/// Choose the gesture that moves the page content toward `direction`.
#[must_use]
pub fn plan_swipe(direction: Direction, device: DeviceSize, is_mobile: bool, has_scrollbar: bool) -> Gesture {
    let width = f64::from(device.width);
    let height = f64::from(device.height);

    if is_mobile && !has_scrollbar {
        let ((x1, y1), (x2, y2)) = match direction {
            Direction::Top => ((0.5, 0.7), (0.5, 0.1)),
            Direction::Left => ((0.8, 0.5), (0.2, 0.5)),
            Direction::Bottom => ((0.5, 0.3), (0.5, 0.9)),
            Direction::Right => ((0.2, 0.5), (0.8, 0.5)),
        };
        return Gesture::Drag {
            from: (to_px(x1 * width), to_px(y1 * height)),
            to: (to_px(x2 * width), to_px(y2 * height)),
            steps: DRAG_STEPS,
        };
    }

    let (delta_x, delta_y) = match direction {
        Direction::Top => (0.0, WHEEL_FRACTION * height),
        Direction::Left => (WHEEL_FRACTION * width, 0.0),
        Direction::Bottom => (0.0, -WHEEL_FRACTION * height),
        Direction::Right => (-WHEEL_FRACTION * width, 0.0),
    };
    Gesture::Wheel { delta_x, delta_y }
}

#[allow(clippy::cast_possible_truncation)]
fn to_px(value: f64) -> i32 {
    value as i32
}
