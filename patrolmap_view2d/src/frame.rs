// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Robot-native coordinate frame over a square map.
///
/// World coordinates follow the ROS convention: the origin sits at the center
/// of the map, `+x` points right and `+y` points **up**. Map-local coordinates
/// are the unscaled pixel space of the map layer: the origin is the top-left
/// corner and `+y` points down.
///
/// For a map of side `size`:
///
/// ```text
/// local.x = world.x + size / 2
/// local.y = size / 2 - world.y
/// ```
///
/// The two mappings are exact inverses of each other.
///
/// ```rust
/// use kurbo::Point;
/// use patrolmap_view2d::RosFrame;
///
/// let frame = RosFrame::new(1500.0);
/// assert_eq!(frame.world_to_local(Point::ORIGIN), Point::new(750.0, 750.0));
/// assert_eq!(frame.world_to_local(Point::new(100.0, 200.0)), Point::new(850.0, 550.0));
/// assert_eq!(frame.local_to_world(Point::new(850.0, 550.0)), Point::new(100.0, 200.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RosFrame {
    size: f64,
}

impl RosFrame {
    /// Creates a frame for a square map with side length `size` world units.
    #[must_use]
    pub const fn new(size: f64) -> Self {
        Self { size }
    }

    /// Side length of the map in world units.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Half the side length; the distance from the world origin to any edge.
    #[must_use]
    pub fn half_size(&self) -> f64 {
        self.size * 0.5
    }

    /// Converts a world-space point into map-local coordinates.
    #[must_use]
    pub fn world_to_local(&self, world: Point) -> Point {
        let half = self.half_size();
        Point::new(world.x + half, half - world.y)
    }

    /// Converts a map-local point into world coordinates.
    #[must_use]
    pub fn local_to_world(&self, local: Point) -> Point {
        let half = self.half_size();
        Point::new(local.x - half, half - local.y)
    }

    /// The world → map-local mapping as an affine transform.
    ///
    /// Useful when a renderer wants to compose the frame with the viewport
    /// transform into a single matrix.
    #[must_use]
    pub fn world_to_local_affine(&self) -> Affine {
        let half = self.half_size();
        Affine::translate(Vec2::new(half, half)) * Affine::FLIP_Y
    }

    /// World-space bounds of the map: `[-size/2, size/2]` on both axes.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        let half = self.half_size();
        Rect::new(-half, -half, half, half)
    }

    /// Map-local bounds of the map: `[0, size]` on both axes.
    #[must_use]
    pub fn local_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size, self.size)
    }

    /// Returns `true` if `world` lies inside the map, edges included.
    #[must_use]
    pub fn contains_world(&self, world: Point) -> bool {
        let half = self.half_size();
        (-half..=half).contains(&world.x) && (-half..=half).contains(&world.y)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::RosFrame;

    #[test]
    fn origin_maps_to_map_center() {
        let frame = RosFrame::new(8000.0);
        assert_eq!(frame.world_to_local(Point::ORIGIN), Point::new(4000.0, 4000.0));
        assert_eq!(frame.local_to_world(Point::new(4000.0, 4000.0)), Point::ORIGIN);
    }

    #[test]
    fn y_axis_points_up_in_world_space() {
        let frame = RosFrame::new(1500.0);
        let above = frame.world_to_local(Point::new(0.0, 100.0));
        let below = frame.world_to_local(Point::new(0.0, -100.0));
        assert!(above.y < below.y, "positive world y should be higher on screen");
    }

    #[test]
    fn roundtrip_is_exact_within_epsilon() {
        let frame = RosFrame::new(1500.0);
        for &(x, y) in &[
            (0.0, 0.0),
            (123.456, -789.012),
            (-750.0, 750.0),
            (1e6, -1e6),
            (0.1, 0.2),
        ] {
            let local = frame.world_to_local(Point::new(x, y));
            let again = frame.world_to_local(frame.local_to_world(local));
            assert!((again.x - local.x).abs() < 1e-6, "x drifted for ({x}, {y})");
            assert!((again.y - local.y).abs() < 1e-6, "y drifted for ({x}, {y})");
        }
    }

    #[test]
    fn affine_agrees_with_point_mapping() {
        let frame = RosFrame::new(1500.0);
        let world = Point::new(-321.5, 42.25);
        let by_fn = frame.world_to_local(world);
        let by_affine = frame.world_to_local_affine() * world;
        assert!((by_fn.x - by_affine.x).abs() < 1e-9, "affine x mismatch");
        assert!((by_fn.y - by_affine.y).abs() < 1e-9, "affine y mismatch");
    }

    #[test]
    fn contains_world_includes_edges() {
        let frame = RosFrame::new(1500.0);
        assert!(frame.contains_world(Point::new(750.0, -750.0)));
        assert!(!frame.contains_world(Point::new(750.1, 0.0)));
        assert!(!frame.contains_world(Point::new(0.0, f64::NAN)));
    }
}
