// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use kurbo::{Affine, Point};

use crate::modes::{PinchResponse, WheelResponse};

/// Default lower bound on the view's uniform scale.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Default upper bound on the view's uniform scale.
pub const DEFAULT_MAX_SCALE: f64 = 5.0;

/// Default wheel smoothing factor.
///
/// Negative, so positive `delta_y` (scroll down) zooms out. The zoom factor
/// for an accumulated delta `d` is `exp(d * smooth_factor)`.
pub const DEFAULT_WHEEL_SMOOTH_FACTOR: f64 = -0.0007;

/// Default gap, in milliseconds, after which a wheel burst is considered
/// finished and the accumulated delta resets.
pub const DEFAULT_WHEEL_DECAY_MS: u64 = 50;

/// Default window, in milliseconds, during which gesture starts are vetoed
/// after [`GestureController::cancel_drag`](crate::GestureController::cancel_drag).
pub const DEFAULT_CANCEL_DEBOUNCE_MS: u64 = 100;

/// Suggested blend weight for [`PinchResponse::Damped`].
pub const DEFAULT_PINCH_DAMPING: f64 = 0.05;

/// The kind of input that is asking to start a drag.
///
/// Passed to the [`DragFilter`] so hosts can veto drags per input kind
/// (for example, allow mouse pans but reserve single-finger touches for
/// element interaction).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// A mouse or pen pointer-down.
    Pointer,
    /// A single-finger touch-start.
    Touch,
}

/// Predicate deciding whether a drag may start from the given input.
///
/// Returning `false` rejects the gesture start; the controller stays idle
/// and publishes nothing.
pub type DragFilter = dyn Fn(DragSource, Point) -> bool;

/// Construction-time configuration for a [`GestureController`](crate::GestureController).
///
/// Supplied once and read-only thereafter. All fields have documented
/// defaults; the usual construction is struct update syntax over
/// [`GestureConfig::default`]:
///
/// ```rust
/// use canopy_gesture::GestureConfig;
///
/// let config = GestureConfig {
///     max_scale: 20.0,
///     ..GestureConfig::default()
/// };
/// assert_eq!(config.min_scale, 0.1);
/// ```
#[derive(Clone)]
pub struct GestureConfig {
    /// Lower bound on the view's uniform scale. Wheel updates that would
    /// land below it are rejected.
    pub min_scale: f64,
    /// Upper bound on the view's uniform scale. Wheel updates that would
    /// land above it are rejected.
    pub max_scale: f64,
    /// Exponent applied to wheel deltas: the zoom factor is
    /// `exp(delta * wheel_smooth_factor)`. Negative means scroll down zooms
    /// out; flip the sign to invert the wheel direction.
    pub wheel_smooth_factor: f64,
    /// Gap after which a wheel burst is considered finished and the
    /// accumulated delta resets.
    pub wheel_decay_ms: u64,
    /// Window during which gesture starts are vetoed after a cancel
    /// request.
    pub cancel_debounce_ms: u64,
    /// Full-response or damped pinch tracking.
    pub pinch_response: PinchResponse,
    /// Accumulated or instantaneous wheel zoom.
    pub wheel_response: WheelResponse,
    /// Transform the controller starts from.
    pub initial_transform: Affine,
    /// Optional veto predicate for drag starts.
    pub drag_filter: Option<Rc<DragFilter>>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            wheel_smooth_factor: DEFAULT_WHEEL_SMOOTH_FACTOR,
            wheel_decay_ms: DEFAULT_WHEEL_DECAY_MS,
            cancel_debounce_ms: DEFAULT_CANCEL_DEBOUNCE_MS,
            pinch_response: PinchResponse::default(),
            wheel_response: WheelResponse::default(),
            initial_transform: Affine::IDENTITY,
            drag_filter: None,
        }
    }
}

impl core::fmt::Debug for GestureConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GestureConfig")
            .field("min_scale", &self.min_scale)
            .field("max_scale", &self.max_scale)
            .field("wheel_smooth_factor", &self.wheel_smooth_factor)
            .field("wheel_decay_ms", &self.wheel_decay_ms)
            .field("cancel_debounce_ms", &self.cancel_debounce_ms)
            .field("pinch_response", &self.pinch_response)
            .field("wheel_response", &self.wheel_response)
            .field("initial_transform", &self.initial_transform)
            .field(
                "drag_filter",
                &self.drag_filter.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use super::{DragSource, GestureConfig};

    #[test]
    fn defaults_match_documented_values() {
        let config = GestureConfig::default();
        assert_eq!(config.min_scale, 0.1);
        assert_eq!(config.max_scale, 5.0);
        assert_eq!(config.wheel_smooth_factor, -0.0007);
        assert_eq!(config.wheel_decay_ms, 50);
        assert_eq!(config.cancel_debounce_ms, 100);
        assert!(config.drag_filter.is_none());
    }

    #[test]
    fn debug_elides_the_filter_body() {
        let config = GestureConfig {
            drag_filter: Some(Rc::new(|source, _| source == DragSource::Pointer)),
            ..GestureConfig::default()
        };
        let rendered = alloc::format!("{config:?}");
        assert!(rendered.contains("<function>"), "got {rendered}");
    }
}
