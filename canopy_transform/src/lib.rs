// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Transform: affine algebra helpers for pan/zoom engines.
//!
//! This crate supplements [`kurbo::Affine`] with the handful of operations a
//! gesture-driven pan/zoom engine needs and Kurbo does not provide directly:
//!
//! - [`compose`]: right-to-left composition of a whole sequence of
//!   transforms.
//! - [`uniform_scale`]: recover the uniform scale factor of a
//!   translate+scale transform.
//! - [`scale_about`]: build a uniform scale around an arbitrary anchor
//!   point.
//! - [`sanitize_scale`]: substitute `1.0` for scale factors that would
//!   poison a transform (zero, NaN, infinite).
//!
//! Everything else (identity, translation, scaling, applying a transform to
//! a point) is Kurbo itself: `Affine::IDENTITY`, [`Affine::translate`],
//! [`Affine::scale`], and `transform * point`.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_transform::{compose, uniform_scale};
//! use kurbo::{Affine, Point};
//!
//! // "Scale by 2, then move right by 10": the left-most transform is
//! // applied last.
//! let transform = compose(&[Affine::translate((10.0, 0.0)), Affine::scale(2.0)]);
//!
//! assert_eq!(transform * Point::new(3.0, 4.0), Point::new(16.0, 8.0));
//! assert_eq!(uniform_scale(transform), 2.0);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are plain [`Affine`] values; every operation returns a new
//!   value and nothing is mutated in place.
//! - The helpers assume the translate+uniform-scale subset of affine
//!   transforms (no shear or rotation); [`uniform_scale`] documents the
//!   consequences when that assumption is violated.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Vec2};

/// Composes a sequence of transforms right-to-left.
///
/// The right-most transform is applied to a point first and the left-most
/// last, matching the usual matrix-product reading: `compose(&[t, s])` means
/// "apply `s`, then `t`".
///
/// An empty slice composes to the identity, and a single-element slice
/// composes to that element unchanged. Composition is associative but not
/// commutative.
///
/// ```rust
/// use canopy_transform::compose;
/// use kurbo::Affine;
///
/// assert_eq!(compose(&[]), Affine::IDENTITY);
///
/// let t = Affine::translate((5.0, -3.0));
/// assert_eq!(compose(&[t]), t);
/// ```
#[must_use]
pub fn compose(transforms: &[Affine]) -> Affine {
    transforms
        .iter()
        .fold(Affine::IDENTITY, |acc, transform| acc * *transform)
}

/// Returns the uniform scale factor carried by a transform.
///
/// For the translate+uniform-scale transforms produced by gesture engines
/// this is exactly the zoom factor. It is computed as the length of the
/// transformed X basis vector (`hypot(a, b)` over the coefficients), so for
/// transforms carrying shear or non-uniform scale it reports only the X-axis
/// magnification.
#[must_use]
pub fn uniform_scale(transform: Affine) -> f64 {
    let coeffs = transform.as_coeffs();
    Vec2::new(coeffs[0], coeffs[1]).hypot()
}

/// Builds a uniform scale around an anchor point.
///
/// The anchor maps to itself; distances from it are multiplied by `factor`.
/// The factor is passed through [`sanitize_scale`], so a degenerate factor
/// yields the identity rather than a collapsed or non-finite transform.
#[must_use]
pub fn scale_about(factor: f64, anchor: Point) -> Affine {
    Affine::translate(anchor.to_vec2())
        * Affine::scale(sanitize_scale(factor))
        * Affine::translate(-anchor.to_vec2())
}

/// Substitutes `1.0` for scale factors that would poison a transform.
///
/// Zero and non-finite factors are mapped to `1.0` ("no scaling"); every
/// other value passes through unchanged. Callers building scale transforms
/// from measured input (pinch distances, wheel deltas) route factors through
/// here so the resulting transform always stays well-formed and invertible.
#[must_use]
pub fn sanitize_scale(factor: f64) -> f64 {
    if factor.is_finite() && factor != 0.0 {
        factor
    } else {
        1.0
    }
}
