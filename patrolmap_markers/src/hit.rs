// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker hit testing.
//!
//! Markers are discs of radius [`HitParams::radius`] around their map-local
//! center. A query point hits a marker when its distance to the center is at
//! most `radius + tolerance`. When several markers overlap the point, the one
//! with the nearest center wins, and among equally near ones the topmost
//! (last drawn) wins.

use kurbo::Point;

use crate::project::{MARKER_RADIUS, Marker};

/// Parameters for [`hit_test`], in map-local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Marker disc radius.
    pub radius: f64,
    /// Extra slack around the disc.
    ///
    /// Hosts that want a fixed on-screen slack divide their pixel tolerance by
    /// the current scale before calling.
    pub tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            radius: MARKER_RADIUS,
            tolerance: 0.0,
        }
    }
}

/// A marker under the query point.
#[derive(Clone, Copy, Debug)]
pub struct MarkerHit<'a> {
    /// The marker that was hit.
    pub marker: &'a Marker,
    /// Index of the marker in the slice passed to [`hit_test`].
    pub index: usize,
    /// Distance from the query point to the marker center.
    pub distance: f64,
}

/// Returns the marker under `local`, if any.
#[must_use]
pub fn hit_test<'a>(markers: &'a [Marker], local: Point, params: &HitParams) -> Option<MarkerHit<'a>> {
    if !local.is_finite() {
        return None;
    }
    let limit = params.radius.max(0.0) + params.tolerance.max(0.0);
    let mut best: Option<MarkerHit<'a>> = None;
    // Walk top to bottom so ties keep the topmost marker.
    for (index, marker) in markers.iter().enumerate().rev() {
        let distance = marker.local.distance(local);
        if distance > limit {
            continue;
        }
        if best.is_none_or(|hit| distance < hit.distance) {
            best = Some(MarkerHit {
                marker,
                index,
                distance,
            });
        }
    }
    best
}
