// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// The in-progress gesture, if any.
///
/// Exactly one session value is live at a time. A session is created on
/// gesture-start input, has its `last_*` fields replaced on move samples,
/// and is replaced wholesale (with [`GestureSession::Idle`] or with a fresh
/// session) on gesture-end input, cancellation, or a finger-count
/// transition. Holding the gesture's frame of reference in an explicit
/// value (rather than in per-listener captured state) is what lets every
/// move recompute from the same anchor instead of accumulating deltas.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A one-pointer pan.
    Drag {
        /// The transform that was committed when the drag started. Every
        /// move composes its full delta over this snapshot.
        anchor_transform: Affine,
        /// Pointer position captured at drag start.
        anchor_point: Point,
    },
    /// A two-finger pinch-zoom.
    Pinch {
        /// The transform that was committed when the pinch started.
        anchor_transform: Affine,
        /// First touch position captured at pinch start.
        anchor_touch1: Point,
        /// Second touch position captured at pinch start.
        anchor_touch2: Point,
        /// Most recent (possibly smoothed) first touch position, if any
        /// move has been seen.
        last_touch1: Option<Point>,
        /// Most recent (possibly smoothed) second touch position.
        last_touch2: Option<Point>,
    },
}

impl GestureSession {
    /// Returns `true` while no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Drag { .. })
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinch(&self) -> bool {
        matches!(self, Self::Pinch { .. })
    }

    /// The transform captured when this session started, if one is live.
    #[must_use]
    pub fn anchor_transform(&self) -> Option<Affine> {
        match self {
            Self::Idle => None,
            Self::Drag {
                anchor_transform, ..
            }
            | Self::Pinch {
                anchor_transform, ..
            } => Some(*anchor_transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point};

    use super::GestureSession;

    #[test]
    fn default_session_is_idle() {
        let session = GestureSession::default();
        assert!(session.is_idle());
        assert!(!session.is_drag());
        assert!(!session.is_pinch());
        assert_eq!(session.anchor_transform(), None);
    }

    #[test]
    fn anchor_transform_reports_the_snapshot() {
        let anchor = Affine::translate((3.0, 4.0));
        let drag = GestureSession::Drag {
            anchor_transform: anchor,
            anchor_point: Point::new(1.0, 2.0),
        };
        assert!(drag.is_drag());
        assert_eq!(drag.anchor_transform(), Some(anchor));

        let pinch = GestureSession::Pinch {
            anchor_transform: anchor,
            anchor_touch1: Point::ZERO,
            anchor_touch2: Point::new(10.0, 0.0),
            last_touch1: None,
            last_touch2: None,
        };
        assert!(pinch.is_pinch());
        assert_eq!(pinch.anchor_transform(), Some(anchor));
    }
}
