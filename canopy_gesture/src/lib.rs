// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Gesture: a gesture-to-transform engine for 2D pan/zoom views.
//!
//! This crate converts raw, partially-overlapping input streams (mouse
//! drag, wheel scroll, one- and two-finger touch) into a single composable
//! [`kurbo::Affine`] transform (translate + uniform scale) over a bounded
//! viewport. It handles the parts that are easy to get wrong:
//!
//! - Gesture-mode switching: one live [`GestureSession`] (idle, drag, or
//!   pinch), replaced atomically on every transition, including mid-gesture
//!   finger-count changes.
//! - Numeric degeneracies: coincident pinch touches, degenerate scale
//!   factors, and out-of-range zooms are handled by substitution. Every
//!   computation is total and no published transform is ever non-finite.
//! - Scale clamping: wheel zoom is clamped to a configured range, with the
//!   accumulator reset on rejection so the zoom never sticks at a bound.
//! - Cancellation: an external cancel request discards the in-flight
//!   session and vetoes gesture starts for a debounce window.
//!
//! It does **not** attach event listeners, poll for elements, or render
//! anything. Callers are expected to:
//! - Translate their host's native events into [`GestureController`] method
//!   calls, with positions relative to the view's top-left and
//!   caller-supplied millisecond timestamps.
//! - Forward each `Some(transform)` return value to their render layer.
//! - Map content-space points through
//!   [`GestureController::apply_to_point`] when laying out content.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_gesture::{GestureConfig, GestureController};
//! use kurbo::Point;
//!
//! let mut controller = GestureController::new(GestureConfig::default());
//!
//! // A mouse drag pans the view.
//! controller.on_pointer_down(Point::new(10.0, 10.0), 1000);
//! controller.on_pointer_move(Point::new(40.0, 30.0));
//! controller.on_pointer_up(Point::new(40.0, 30.0));
//! assert_eq!(controller.apply_to_point(Point::ZERO), Point::new(30.0, 20.0));
//!
//! // A wheel tick zooms about the cursor; scroll up zooms in.
//! let zoomed = controller.on_wheel(Point::new(50.0, 50.0), -100.0, 1200);
//! assert!(zoomed.is_some());
//! ```
//!
//! ## Design notes
//!
//! - The engine is single-threaded and event-driven: every sample is
//!   processed synchronously to completion, so transform updates are
//!   totally ordered by input arrival. A multi-threaded host must serialize
//!   input delivery; the `&mut self` receivers make that structural.
//! - Nothing here reads a clock. The two time-sensitive behaviors (wheel
//!   burst decay, cancel debounce) compare caller-supplied timestamps, so
//!   the engine is fully deterministic under test.
//! - There is no error taxonomy: no operation can fail, and the only
//!   "failure" mode is `None` (no-op, transform unchanged).
//! - Momentum/inertia after release and rotation gestures are out of
//!   scope.
//!
//! This crate is `no_std`; it requires one of the `std` or `libm` features
//! for float math.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("canopy_gesture requires either the `std` or the `libm` feature");

pub mod config;
mod controller;
mod gate;
pub mod modes;
pub mod pinch;
mod session;
pub mod wheel;

pub use config::{DragFilter, DragSource, GestureConfig};
pub use controller::{GestureController, GestureDebugInfo, POINTER_EXIT_MARGIN};
pub use gate::DragCancelGate;
pub use modes::{PinchResponse, WheelResponse};
pub use session::GestureSession;
pub use wheel::WheelAccumulator;
