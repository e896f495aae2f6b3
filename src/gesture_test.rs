#![allow(clippy::float_cmp)]

use super::*;

fn device() -> DeviceSize {
    DeviceSize::new(1280, 720)
}

// --- drag ---

#[test]
fn mobile_without_scrollbar_drags_up_for_top() {
    let g = plan_swipe(Direction::Top, device(), true, false);
    assert_eq!(g, Gesture::Drag { from: (640, 503), to: (640, 72), steps: 1000 });
}

#[test]
fn mobile_without_scrollbar_drags_left() {
    let g = plan_swipe(Direction::Left, device(), true, false);
    assert_eq!(g, Gesture::Drag { from: (1024, 360), to: (256, 360), steps: 1000 });
}

#[test]
fn mobile_without_scrollbar_drags_down_for_bottom() {
    let g = plan_swipe(Direction::Bottom, device(), true, false);
    assert_eq!(g, Gesture::Drag { from: (640, 216), to: (640, 648), steps: 1000 });
}

#[test]
fn mobile_without_scrollbar_drags_right() {
    let g = plan_swipe(Direction::Right, device(), true, false);
    assert_eq!(g, Gesture::Drag { from: (256, 360), to: (1024, 360), steps: 1000 });
}

// --- wheel ---

#[test]
fn desktop_always_uses_wheel() {
    let g = plan_swipe(Direction::Top, device(), false, false);
    assert!(matches!(g, Gesture::Wheel { .. }));
}

#[test]
fn mobile_with_scrollbar_uses_wheel() {
    let g = plan_swipe(Direction::Right, device(), true, true);
    assert_eq!(g, Gesture::Wheel { delta_x: -0.7 * 1280.0, delta_y: 0.0 });
}

#[test]
fn wheel_deltas_follow_direction() {
    let top = plan_swipe(Direction::Top, device(), false, true);
    let bottom = plan_swipe(Direction::Bottom, device(), false, true);
    let left = plan_swipe(Direction::Left, device(), false, true);
    assert_eq!(top, Gesture::Wheel { delta_x: 0.0, delta_y: 0.7 * 720.0 });
    assert_eq!(bottom, Gesture::Wheel { delta_x: 0.0, delta_y: -0.7 * 720.0 });
    assert_eq!(left, Gesture::Wheel { delta_x: 0.7 * 1280.0, delta_y: 0.0 });
}

// --- serialization ---

#[test]
fn gesture_serializes_with_kind_tag() {
    let drag = serde_json::to_value(plan_swipe(Direction::Left, device(), true, false)).expect("serialize");
    assert_eq!(drag["kind"], "drag");
    assert_eq!(drag["from"], serde_json::json!([1024, 360]));
    assert_eq!(drag["steps"], 1000);

    let wheel = serde_json::to_value(plan_swipe(Direction::Left, device(), false, true)).expect("serialize");
    assert_eq!(wheel["kind"], "wheel");
    assert_eq!(wheel["delta_y"], 0.0);
}
