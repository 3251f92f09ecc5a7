// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use patrolmap_markers::{Marker, StatusClass};

/// One row of the status panel's robot list.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotSummary {
    /// Entity id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// World position.
    pub position: Point,
    /// Heading in degrees.
    pub heading: f64,
    /// Status bucket.
    pub status: StatusClass,
    /// Chess-style grid cell of the position.
    pub cell: Option<String>,
}

/// Numbers shown in the map's info panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusReadout {
    /// `true` once the container has been laid out.
    pub ready: bool,
    /// Zoom as a whole percentage.
    pub zoom_percent: i64,
    /// Raw zoom factor.
    pub scale: f64,
    /// World point under the container center.
    pub center: Point,
    /// Grid cell under the container center.
    pub cell: Option<String>,
    /// Rendered robots, in draw order.
    pub robots: Vec<RobotSummary>,
}

impl StatusReadout {
    /// Number of robots in each status bucket: active, idle, fault, unknown.
    #[must_use]
    pub fn counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for robot in &self.robots {
            let slot = match robot.status {
                StatusClass::Active => 0,
                StatusClass::Idle => 1,
                StatusClass::Fault => 2,
                StatusClass::Unknown => 3,
            };
            counts[slot] += 1;
        }
        counts
    }
}

/// Zoom factor as a rounded percentage.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "Scales are clamped to a small positive range"
)]
pub fn zoom_percent(scale: f64) -> i64 {
    (scale * 100.0).round() as i64
}

pub(crate) fn summarize(marker: &Marker, cell: Option<String>) -> RobotSummary {
    RobotSummary {
        id: marker.id.clone(),
        label: marker.label().to_owned(),
        position: marker.world,
        heading: marker.heading,
        status: marker.status,
        cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds() {
        assert_eq!(zoom_percent(1.0), 100);
        assert_eq!(zoom_percent(0.5333), 53);
        assert_eq!(zoom_percent(1.728), 173);
    }
}
