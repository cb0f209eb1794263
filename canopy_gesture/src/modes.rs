// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How pinch touch positions feed the pinch solver.
///
/// This mode is consulted by
/// [`GestureController::on_touch_move`](crate::GestureController::on_touch_move)
/// while a pinch session is live.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PinchResponse {
    /// Feed raw touch positions straight through: the view tracks the
    /// fingers exactly.
    #[default]
    Full,
    /// Low-pass the touch positions: each move blends the previously
    /// smoothed positions toward the raw ones before solving, trading
    /// responsiveness for stability on noisy touch hardware.
    Damped {
        /// Blend weight in `(0, 1]`. Each move advances the smoothed touch
        /// points this fraction of the way toward the raw ones; `1.0` is
        /// equivalent to [`PinchResponse::Full`]. See
        /// [`DEFAULT_PINCH_DAMPING`](crate::config::DEFAULT_PINCH_DAMPING).
        factor: f64,
    },
}

/// How wheel deltas turn into zoom factors.
///
/// This mode is consulted by
/// [`GestureController::on_wheel`](crate::GestureController::on_wheel).
/// Scale clamping applies in both modes; only the accumulation behavior
/// differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelResponse {
    /// Accumulate deltas across a scroll burst (with decay between bursts)
    /// so sustained scrolling produces a smooth, velocity-proportional
    /// zoom.
    #[default]
    Accumulated,
    /// Convert each wheel sample independently. Simpler, but large per-tick
    /// jumps on fast scrolls.
    Instant,
}
