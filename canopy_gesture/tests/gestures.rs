// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture scenarios for the `canopy_gesture` controller.
//!
//! These drive whole gestures (press, move, release, interleaved wheel
//! bursts, finger-count changes) through a [`GestureController`] and check
//! the published transforms, where the unit tests in each module check the
//! pieces in isolation.

use canopy_gesture::{GestureConfig, GestureController};
use canopy_transform::uniform_scale;
use kurbo::{Affine, Point};

#[test]
fn drag_publishes_the_full_offset() {
    let mut controller = GestureController::new(GestureConfig::default());

    controller.on_pointer_down(Point::new(10.0, 10.0), 0);
    let published = controller.on_pointer_move(Point::new(40.0, 30.0)).unwrap();

    // Identity anchor, offset (30, 20): pure translation.
    assert_eq!(published.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 30.0, 20.0]);
}

#[test]
fn reversed_drag_returns_exactly_to_the_start() {
    let initial = Affine::translate((7.0, -4.0)) * Affine::scale(1.25);
    let mut controller = GestureController::new(GestureConfig {
        initial_transform: initial,
        ..GestureConfig::default()
    });

    // Out…
    controller.on_pointer_down(Point::new(0.0, 0.0), 0);
    controller.on_pointer_move(Point::new(33.0, 21.0));
    controller.on_pointer_up(Point::new(33.0, 21.0));
    assert_ne!(controller.transform(), initial);

    // …and back, as an independent second session.
    controller.on_pointer_down(Point::new(33.0, 21.0), 500);
    controller.on_pointer_move(Point::new(0.0, 0.0));
    controller.on_pointer_up(Point::new(0.0, 0.0));

    assert_eq!(controller.transform(), initial);
}

#[test]
fn pinch_is_continuous_at_gesture_start() {
    let mut controller = GestureController::new(GestureConfig::default());
    let before = controller.transform();

    let touch1 = Point::new(120.0, 80.0);
    let touch2 = Point::new(220.0, 180.0);
    controller.on_touch_start(&[touch1, touch2], 0);

    // Fingers down but not yet moved: exactly no change.
    let published = controller.on_touch_move(&[touch1, touch2]).unwrap();
    assert_eq!(published, before);
}

#[test]
fn coincident_anchor_touches_never_poison_the_transform() {
    let mut controller = GestureController::new(GestureConfig::default());
    let p = Point::new(50.0, 50.0);
    controller.on_touch_start(&[p, p], 0);

    let published = controller
        .on_touch_move(&[Point::new(40.0, 60.0), Point::new(80.0, 60.0)])
        .unwrap();

    assert!(published.as_coeffs().iter().all(|c| c.is_finite()));
    // Zero anchor distance means no scale jump: pure translate by the
    // center delta.
    assert_eq!(uniform_scale(published), 1.0);
    assert_eq!(published * Point::ZERO, Point::new(10.0, 10.0));
}

#[test]
fn wheel_zoom_never_escapes_the_scale_bounds() {
    let mut controller = GestureController::new(GestureConfig::default());
    let max_scale = controller.config().max_scale;
    let cursor = Point::new(300.0, 200.0);

    // A long same-direction burst, far more than enough to pin the zoom.
    for i in 0..200 {
        controller.on_wheel(cursor, -1000.0, i * 10);
        let scale = uniform_scale(controller.transform());
        assert!(
            scale <= max_scale + 1e-9,
            "scale {scale} escaped the bound on tick {i}"
        );
    }

    // And the engine is not stuck: one opposite tick zooms back out.
    let before = uniform_scale(controller.transform());
    let published = controller.on_wheel(cursor, 1000.0, 5000).unwrap();
    assert!(uniform_scale(published) < before);
}

#[test]
fn wheel_zoom_fixes_the_sample_point() {
    let mut controller = GestureController::new(GestureConfig::default());
    let cursor = Point::new(50.0, 50.0);

    let published = controller.on_wheel(cursor, -100.0, 0).unwrap();

    // exp(0.07) ≈ 1.0725: the cursor is a fixed point and distances from
    // it scale by that factor.
    let factor = uniform_scale(published);
    assert!((factor - 1.0725).abs() < 1e-3);
    assert_eq!(published * cursor, cursor);

    let mapped = published * Point::new(60.0, 50.0);
    assert!((mapped.x - (50.0 + 10.0 * factor)).abs() < 1e-9);
    assert!((mapped.y - 50.0).abs() < 1e-9);
}

#[test]
fn cancel_vetoes_the_press_inside_the_window_only() {
    let mut controller = GestureController::new(GestureConfig::default());

    controller.cancel_drag(10_000);

    // 50 ms later: vetoed, no session, and the move stream stays inert.
    controller.on_pointer_down(Point::new(5.0, 5.0), 10_050);
    assert!(!controller.is_dragging());
    assert_eq!(controller.on_pointer_move(Point::new(50.0, 50.0)), None);

    // 150 ms later: a fresh press goes through.
    controller.on_pointer_down(Point::new(5.0, 5.0), 10_150);
    assert!(controller.is_dragging());
}

#[test]
fn full_touch_session_with_finger_count_changes() {
    let mut controller = GestureController::new(GestureConfig::default());

    // One finger down and panning.
    controller.on_touch_start(&[Point::new(100.0, 100.0)], 0);
    controller.on_touch_move(&[Point::new(110.0, 100.0)]);
    assert!(controller.is_dragging());

    // Second finger lands: the pan so far is kept, a pinch begins.
    let panned = controller.transform();
    controller.on_touch_start(&[Point::new(110.0, 100.0), Point::new(210.0, 100.0)], 200);
    assert!(controller.is_pinching());

    // Spread the fingers: zoom in by 1.5x around their center.
    controller
        .on_touch_move(&[Point::new(85.0, 100.0), Point::new(235.0, 100.0)])
        .unwrap();
    let pinched = controller.transform();
    assert!((uniform_scale(pinched) - 1.5 * uniform_scale(panned)).abs() < 1e-9);

    // First finger up: the zoom is kept, the survivor keeps panning.
    controller.on_touch_end(&[Point::new(235.0, 100.0)], 400);
    assert!(controller.is_dragging());
    let moved = controller.on_pointer_move(Point::new(240.0, 110.0)).unwrap();
    assert_eq!(moved, Affine::translate((5.0, 10.0)) * pinched);

    // Last finger up: everything is committed.
    controller.on_touch_end(&[], 600);
    assert!(controller.session().is_idle());
    assert_eq!(controller.transform(), moved);
}

#[test]
fn wheel_and_drag_interleave_on_one_baseline() {
    let mut controller = GestureController::new(GestureConfig::default());

    controller.on_pointer_down(Point::new(0.0, 0.0), 0);
    controller.on_pointer_move(Point::new(20.0, 0.0));
    let zoomed = controller.on_wheel(Point::new(0.0, 0.0), -100.0, 50).unwrap();

    // The drag is still live and now composes over the zoomed base.
    let finished = controller.on_pointer_up(Point::new(25.0, 5.0)).unwrap();
    assert_eq!(finished, Affine::translate((25.0, 5.0)) * zoomed);

    // Both effects survive into the committed baseline.
    assert_eq!(controller.transform(), finished);
    assert!(controller.session().is_idle());
}
