// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_transform::{compose, sanitize_scale, uniform_scale};
use kurbo::{Affine, Point, Rect};

use crate::config::{DragSource, GestureConfig};
use crate::gate::DragCancelGate;
use crate::modes::{PinchResponse, WheelResponse};
use crate::pinch;
use crate::session::GestureSession;
use crate::wheel::{WheelAccumulator, zoom_factor};

/// Inward margin, in view units, inside which a pointer-leave sample is
/// treated as still inside the view.
///
/// Hosts report pointer exits whenever the pointer crosses into a child
/// element; without the margin, every child-element boundary inside the
/// view would end an in-progress drag.
pub const POINTER_EXIT_MARGIN: f64 = 10.0;

/// The gesture-to-transform engine.
///
/// A `GestureController` owns the one authoritative current transform for a
/// view, the in-progress [`GestureSession`], the wheel accumulator, and the
/// cancel gate. Hosts feed it raw input samples (pointer, touch, wheel)
/// and it answers each with `Some(transform)` exactly once per accepted
/// update (`None` for rejected, vetoed, and no-op samples). Consumers read
/// the latest transform back through [`GestureController::transform`] or
/// map points with [`GestureController::apply_to_point`]; they should never
/// cache a private copy.
///
/// All processing is synchronous: a sample is handled to completion before
/// the next one, so transform updates are totally ordered by input arrival.
/// Time never drives the controller, it only gates it: the two
/// time-sensitive behaviors (wheel burst decay, cancel debounce) compare
/// caller-supplied millisecond timestamps against stored ones.
///
/// ```rust
/// use canopy_gesture::{GestureConfig, GestureController};
/// use kurbo::Point;
///
/// let mut controller = GestureController::new(GestureConfig::default());
///
/// // Drag from (10, 10) to (40, 30): the view pans by (30, 20).
/// controller.on_pointer_down(Point::new(10.0, 10.0), 0);
/// let published = controller.on_pointer_move(Point::new(40.0, 30.0)).unwrap();
/// assert_eq!(published.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 30.0, 20.0]);
///
/// controller.on_pointer_up(Point::new(40.0, 30.0));
/// assert_eq!(controller.apply_to_point(Point::ZERO), Point::new(30.0, 20.0));
/// ```
#[derive(Clone, Debug)]
pub struct GestureController {
    config: GestureConfig,
    /// Transform committed between gestures; the anchor for the next one.
    baseline: Affine,
    /// Latest published transform (equals `baseline` while idle).
    current: Affine,
    session: GestureSession,
    wheel: WheelAccumulator,
    gate: DragCancelGate,
    view_bounds: Option<Rect>,
}

impl GestureController {
    /// Creates a controller starting from the configured initial transform.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        let initial = config.initial_transform;
        Self {
            config,
            baseline: initial,
            current: initial,
            session: GestureSession::Idle,
            wheel: WheelAccumulator::new(),
            gate: DragCancelGate::new(),
            view_bounds: None,
        }
    }

    /// The latest published transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.current
    }

    /// Maps a content-space point to screen space through the latest
    /// published transform. Pure; callable at any time.
    #[must_use]
    pub fn apply_to_point(&self, point: Point) -> Point {
        self.current * point
    }

    /// The in-progress gesture session.
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.session
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_drag()
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.session.is_pinch()
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Sets the view's bounding rectangle, used to qualify pointer-leave
    /// samples (see [`GestureController::on_pointer_leave`]).
    pub fn set_view_bounds(&mut self, bounds: Option<Rect>) {
        self.view_bounds = bounds;
    }

    /// The view's bounding rectangle, if one was set.
    #[must_use]
    pub fn view_bounds(&self) -> Option<Rect> {
        self.view_bounds
    }

    /// Replaces the transform from outside the gesture pipeline.
    ///
    /// The committed baseline and the current transform both become
    /// `transform`, and any in-flight session is discarded, since its frame
    /// of reference no longer exists. Nothing is published; the caller
    /// initiated the change and already has the value.
    pub fn set_transform(&mut self, transform: Affine) {
        self.baseline = transform;
        self.current = transform;
        self.session = GestureSession::Idle;
    }

    /// Handles a mouse/pen press at `point`.
    ///
    /// Starts a drag session anchored at the current transform, unless the
    /// cancel gate is inside its debounce window or the configured drag
    /// filter vetoes the input. Never publishes; the view only changes
    /// once the pointer moves.
    pub fn on_pointer_down(&mut self, point: Point, now_ms: u64) -> Option<Affine> {
        self.begin_drag(DragSource::Pointer, point, now_ms)
    }

    /// Handles a pointer move at `point`.
    ///
    /// While dragging, publishes the anchor transform panned by the full
    /// offset from the anchor point. The anchor is never advanced
    /// mid-gesture: every move recomputes from the same snapshot, so a
    /// thousand one-pixel moves land exactly where one thousand-pixel move
    /// does.
    pub fn on_pointer_move(&mut self, point: Point) -> Option<Affine> {
        let GestureSession::Drag {
            anchor_transform,
            anchor_point,
        } = self.session
        else {
            return None;
        };
        let delta = point - anchor_point;
        Some(self.publish(compose(&[Affine::translate(delta), anchor_transform])))
    }

    /// Handles a pointer release at `point`.
    ///
    /// Ends an in-progress drag: recomputes the final offset transform from
    /// the release point, publishes it, and commits it as the new baseline.
    pub fn on_pointer_up(&mut self, point: Point) -> Option<Affine> {
        let GestureSession::Drag {
            anchor_transform,
            anchor_point,
        } = self.session
        else {
            return None;
        };
        let delta = point - anchor_point;
        let transform = compose(&[Affine::translate(delta), anchor_transform]);
        self.current = transform;
        self.baseline = transform;
        self.session = GestureSession::Idle;
        Some(transform)
    }

    /// Handles the pointer leaving the view at `point`.
    ///
    /// With view bounds set, positions within [`POINTER_EXIT_MARGIN`] of
    /// the interior still count as inside and the sample is ignored;
    /// genuine exits end the drag exactly like a release at `point`.
    pub fn on_pointer_leave(&mut self, point: Point) -> Option<Affine> {
        if !self.session.is_drag() {
            return None;
        }
        if let Some(bounds) = self.view_bounds {
            let inner = bounds.inset(-POINTER_EXIT_MARGIN);
            if point.x >= inner.x0
                && point.x <= inner.x1
                && point.y >= inner.y0
                && point.y <= inner.y1
            {
                return None;
            }
        }
        self.on_pointer_up(point)
    }

    /// Handles a touch-start sample carrying all currently-down touches.
    ///
    /// One touch starts a drag (subject to the cancel gate and the drag
    /// filter); two or more start a pinch anchored at the first two
    /// (subject to the cancel gate). A start arriving while another session
    /// is live replaces it, and the old session's last published transform
    /// becomes the new session's anchor.
    pub fn on_touch_start(&mut self, touches: &[Point], now_ms: u64) -> Option<Affine> {
        match touches {
            [] => None,
            [point] => self.begin_drag(DragSource::Touch, *point, now_ms),
            [touch1, touch2, ..] => self.begin_pinch(*touch1, *touch2, now_ms),
        }
    }

    /// Handles a touch-move sample carrying all currently-down touches.
    ///
    /// Routes by the live session and the finger count: single-touch moves
    /// drive a drag like pointer moves, two-touch moves drive the pinch
    /// solver, and a count that no longer matches the session forces a
    /// session replacement (committing what was already published). Moves
    /// while idle are ignored; resurrecting a vetoed or cancelled gesture
    /// from its move stream would defeat the veto.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Option<Affine> {
        match self.session {
            GestureSession::Idle => None,
            GestureSession::Drag { .. } => match touches {
                [] => None,
                [point] => self.on_pointer_move(*point),
                [touch1, touch2, ..] => {
                    // A second finger landed without a start sample.
                    self.commit();
                    self.session = GestureSession::Pinch {
                        anchor_transform: self.baseline,
                        anchor_touch1: *touch1,
                        anchor_touch2: *touch2,
                        last_touch1: None,
                        last_touch2: None,
                    };
                    None
                }
            },
            GestureSession::Pinch {
                anchor_transform,
                anchor_touch1,
                anchor_touch2,
                last_touch1,
                last_touch2,
            } => match touches {
                [] => None,
                [point] => {
                    // A finger lifted without an end sample: the pinch is
                    // over, the remaining finger continues as a drag.
                    self.commit();
                    self.session = GestureSession::Drag {
                        anchor_transform: self.baseline,
                        anchor_point: *point,
                    };
                    None
                }
                [raw1, raw2, ..] => {
                    let (touch1, touch2) = match self.config.pinch_response {
                        PinchResponse::Full => (*raw1, *raw2),
                        PinchResponse::Damped { factor } => {
                            let previous1 = last_touch1.unwrap_or(anchor_touch1);
                            let previous2 = last_touch2.unwrap_or(anchor_touch2);
                            (previous1.lerp(*raw1, factor), previous2.lerp(*raw2, factor))
                        }
                    };
                    self.session = GestureSession::Pinch {
                        anchor_transform,
                        anchor_touch1,
                        anchor_touch2,
                        last_touch1: Some(touch1),
                        last_touch2: Some(touch2),
                    };
                    Some(self.publish(pinch::solve(
                        anchor_transform,
                        anchor_touch1,
                        anchor_touch2,
                        Some(touch1),
                        Some(touch2),
                    )))
                }
            },
        }
    }

    /// Handles a touch-end sample carrying the touches still down.
    ///
    /// Whatever session was live ends here: its last published transform is
    /// committed as the new baseline. If touches remain, a fresh session
    /// starts from them immediately: one remaining finger anchors a drag
    /// at its position, two anchor a new pinch. These follow-on sessions
    /// are continuations of contact that is already down, so neither the
    /// cancel gate nor the drag filter is consulted.
    pub fn on_touch_end(&mut self, remaining: &[Point], _now_ms: u64) -> Option<Affine> {
        if self.session.is_idle() {
            return None;
        }
        self.commit();
        self.session = match remaining {
            [] => GestureSession::Idle,
            [point] => GestureSession::Drag {
                anchor_transform: self.baseline,
                anchor_point: *point,
            },
            [touch1, touch2, ..] => GestureSession::Pinch {
                anchor_transform: self.baseline,
                anchor_touch1: *touch1,
                anchor_touch2: *touch2,
                last_touch1: None,
                last_touch2: None,
            },
        };
        None
    }

    /// Handles a wheel sample at screen point `point`.
    ///
    /// Wheel zoom does not participate in the drag/pinch state machine: it
    /// is a self-contained operation over the committed baseline, and it
    /// can interleave with a live gesture (the live session's anchor is
    /// refreshed so its subsequent moves compose over the zoomed base).
    ///
    /// The delta feeds the configured response curve; an update whose
    /// resulting uniform scale would leave `[min_scale, max_scale]` is
    /// rejected and resets the accumulator, so the zoom never sticks at a
    /// bound while further input piles onto a pinned accumulation.
    /// Accepted updates scale around `point` (the content under the cursor
    /// stays under the cursor) and advance the baseline.
    pub fn on_wheel(&mut self, point: Point, delta_y: f64, now_ms: u64) -> Option<Affine> {
        let factor = match self.config.wheel_response {
            WheelResponse::Accumulated => {
                let accumulated = self.wheel.advance(delta_y, now_ms, self.config.wheel_decay_ms);
                zoom_factor(accumulated, self.config.wheel_smooth_factor)
            }
            WheelResponse::Instant => zoom_factor(delta_y, self.config.wheel_smooth_factor),
        };
        let factor = sanitize_scale(factor);

        let candidate_scale = uniform_scale(self.baseline) * factor;
        if candidate_scale < self.config.min_scale || candidate_scale > self.config.max_scale {
            self.wheel.reset();
            return None;
        }

        let transform = compose(&[
            Affine::translate(point.to_vec2()),
            Affine::scale(factor),
            Affine::translate(-point.to_vec2()),
            self.baseline,
        ]);
        self.baseline = transform;
        self.refresh_session_anchor();
        Some(self.publish(transform))
    }

    /// Discards any in-flight session and vetoes gesture starts for the
    /// configured debounce window.
    ///
    /// Nothing is published: whatever was last published stays the
    /// committed baseline, so the next gesture anchors to what is already
    /// on screen. The veto takes effect at the next gesture-start
    /// evaluation; it does not interrupt anything retroactively.
    pub fn cancel_drag(&mut self, now_ms: u64) {
        self.commit();
        self.session = GestureSession::Idle;
        self.gate.arm(now_ms);
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureDebugInfo {
        GestureDebugInfo {
            current: self.current,
            baseline: self.baseline,
            session: self.session,
            accumulated_wheel_delta: self.wheel.accumulated(),
            view_bounds: self.view_bounds,
        }
    }

    fn begin_drag(&mut self, source: DragSource, point: Point, now_ms: u64) -> Option<Affine> {
        if !self.gate.allows(now_ms, self.config.cancel_debounce_ms) {
            return None;
        }
        if let Some(filter) = &self.config.drag_filter
            && !filter(source, point)
        {
            return None;
        }
        self.commit();
        self.session = GestureSession::Drag {
            anchor_transform: self.baseline,
            anchor_point: point,
        };
        None
    }

    fn begin_pinch(&mut self, touch1: Point, touch2: Point, now_ms: u64) -> Option<Affine> {
        if !self.gate.allows(now_ms, self.config.cancel_debounce_ms) {
            return None;
        }
        self.commit();
        self.session = GestureSession::Pinch {
            anchor_transform: self.baseline,
            anchor_touch1: touch1,
            anchor_touch2: touch2,
            last_touch1: None,
            last_touch2: None,
        };
        None
    }

    /// Makes the latest published transform the committed baseline.
    fn commit(&mut self) {
        self.baseline = self.current;
    }

    fn publish(&mut self, transform: Affine) -> Affine {
        self.current = transform;
        transform
    }

    /// Re-anchors a live session onto the baseline after a wheel update,
    /// so the session's subsequent moves compose over the zoomed base.
    fn refresh_session_anchor(&mut self) {
        match &mut self.session {
            GestureSession::Idle => {}
            GestureSession::Drag {
                anchor_transform, ..
            }
            | GestureSession::Pinch {
                anchor_transform, ..
            } => {
                *anchor_transform = self.baseline;
            }
        }
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

/// Debug snapshot of a [`GestureController`] state.
#[derive(Clone, Copy, Debug)]
pub struct GestureDebugInfo {
    /// Latest published transform.
    pub current: Affine,
    /// Transform committed between gestures.
    pub baseline: Affine,
    /// The in-progress gesture session.
    pub session: GestureSession,
    /// Wheel delta accumulated in the current scroll burst.
    pub accumulated_wheel_delta: f64,
    /// View bounds used to qualify pointer-leave samples.
    pub view_bounds: Option<Rect>,
}
