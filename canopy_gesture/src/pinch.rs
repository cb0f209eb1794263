// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch solver: compute the transform produced by a two-finger gesture.
//!
//! The solver is a pure function over the gesture's start state (the anchor
//! transform and the two anchor touch points) and its current state (the two
//! live touch points). It never looks at intermediate history, so repeated
//! calls during a pinch cannot accumulate floating-point drift: each call
//! recomputes the full gesture effect from the anchor.

use canopy_transform::{compose, sanitize_scale};
use kurbo::{Affine, Point};

/// Computes the transform produced by a two-finger gesture.
///
/// The result scales the view around the *anchor* touch center by the ratio
/// of the current finger distance to the anchor finger distance, then slides
/// it by however far the center itself moved, all composed over
/// `anchor_transform`:
///
/// - When the current touches equal the anchor touches, the result is
///   exactly `anchor_transform`: a pinch is continuous at its start.
/// - When the anchor touches coincide (zero distance), the scale factor is
///   `1` and the result is a pure translation by the center delta; the
///   division by zero never happens.
/// - When either current touch is `None` (a finger lifted before any move
///   was seen), the result is `anchor_transform` unchanged.
pub fn solve(
    anchor_transform: Affine,
    anchor_touch1: Point,
    anchor_touch2: Point,
    current_touch1: Option<Point>,
    current_touch2: Option<Point>,
) -> Affine {
    let (Some(current_touch1), Some(current_touch2)) = (current_touch1, current_touch2) else {
        return anchor_transform;
    };

    let anchor_center = anchor_touch1.midpoint(anchor_touch2);
    let current_center = current_touch1.midpoint(current_touch2);

    let anchor_dist = anchor_touch1.distance(anchor_touch2);
    let current_dist = current_touch1.distance(current_touch2);
    let scale_factor = if anchor_dist == 0.0 {
        1.0
    } else {
        sanitize_scale(current_dist / anchor_dist)
    };

    let center_delta = current_center - anchor_center;

    compose(&[
        Affine::translate(center_delta),
        Affine::translate(anchor_center.to_vec2()),
        Affine::scale(scale_factor),
        Affine::translate(-anchor_center.to_vec2()),
        anchor_transform,
    ])
}
