// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a discrete zoom step, as issued by zoom buttons.
///
/// This enum is consulted by [`crate::Viewport::zoom_step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Magnify: multiply the scale by `1 + step`.
    In,
    /// Shrink: multiply the scale by `1 - step`.
    Out,
}

impl ZoomDirection {
    /// Multiplicative zoom factor for a relative `step` in `(0, 1)`.
    #[must_use]
    pub fn factor(self, step: f64) -> f64 {
        match self {
            Self::In => 1.0 + step,
            Self::Out => 1.0 - step,
        }
    }

    /// Direction implied by a wheel delta: scrolling down (positive delta)
    /// zooms out. Returns `None` for zero or non-finite deltas.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            Some(Self::In)
        }
    }
}
