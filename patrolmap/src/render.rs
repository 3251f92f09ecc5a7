// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use patrolmap_grid::{GridLabel, GridLayer, GridLine};
use patrolmap_markers::Marker;
use patrolmap_view2d::ViewportState;

/// Pointer cursor the host should show over the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Idle over empty map: draggable.
    #[default]
    Grab,
    /// A pan is in progress.
    Grabbing,
    /// Over a clickable marker.
    Pointer,
}

impl CursorHint {
    /// CSS cursor keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Pointer => "pointer",
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// The grid and markers are in unscaled map-local space; `transform` maps
/// that space to container pixels and is applied once to the whole layer.
#[derive(Clone, Copy, Debug)]
pub struct RenderModel<'a> {
    /// Map-local to container transform.
    pub transform: Affine,
    /// Committed viewport state.
    pub state: ViewportState,
    /// Map-local rectangle visible through the container, once laid out.
    pub visible: Option<Rect>,
    /// Grid lines and labels.
    pub grid: &'a GridLayer,
    /// Markers in draw order (last on top).
    pub markers: &'a [Marker],
    /// Cursor to show.
    pub cursor: CursorHint,
    /// Extra rotation applied to every marker, in degrees.
    pub spin_degrees: f64,
    /// Id of the marker under the pointer.
    pub hovered: Option<&'a str>,
}

/// Assembles a render model. Pure: the output depends only on the inputs.
#[must_use]
pub fn project<'a>(
    state: ViewportState,
    visible: Option<Rect>,
    grid: &'a GridLayer,
    markers: &'a [Marker],
    cursor: CursorHint,
    spin_degrees: f64,
    hovered: Option<&'a str>,
) -> RenderModel<'a> {
    RenderModel {
        transform: state.transform(),
        state,
        visible,
        grid,
        markers,
        cursor,
        spin_degrees,
        hovered,
    }
}

impl<'a> RenderModel<'a> {
    /// Grid lines that intersect the visible area (all of them before layout).
    pub fn visible_grid_lines(&self) -> impl Iterator<Item = &'a GridLine> + 'a {
        let size = self.grid.spec().size;
        let visible = self
            .visible
            .unwrap_or_else(|| Rect::new(0.0, 0.0, size, size));
        self.grid.visible_lines(visible)
    }

    /// Axis labels.
    #[must_use]
    pub fn labels(&self) -> &'a [GridLabel] {
        self.grid.labels()
    }

    /// Marker center in container pixels.
    #[must_use]
    pub fn marker_position(&self, marker: &Marker) -> Point {
        self.transform * marker.local
    }

    /// Total on-screen rotation of a marker, in degrees `[0, 360)`.
    #[must_use]
    pub fn marker_rotation(&self, marker: &Marker) -> f64 {
        (marker.heading + self.spin_degrees).rem_euclid(360.0)
    }

    /// Full transform for drawing a marker glyph authored around the origin,
    /// pointing up, at its on-screen size.
    #[must_use]
    pub fn marker_transform(&self, marker: &Marker) -> Affine {
        Affine::translate(self.marker_position(marker).to_vec2())
            * Affine::rotate(self.marker_rotation(marker).to_radians())
    }

    /// Returns `true` if `marker` is the one under the pointer.
    #[must_use]
    pub fn is_hovered(&self, marker: &Marker) -> bool {
        self.hovered == Some(marker.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use patrolmap_grid::GridSpec;
    use patrolmap_markers::{Entity, project_markers};
    use patrolmap_view2d::RosFrame;

    #[test]
    fn marker_placement_follows_transform() {
        let grid = GridLayer::build(&GridSpec {
            size: 1500.0,
            grid_size: 100.0,
            major_interval: 5,
        });
        let markers = project_markers(
            &RosFrame::new(1500.0),
            &[Entity::new("a", Point::new(100.0, 50.0), 350.0)],
        );
        let state = ViewportState {
            scale: 2.0,
            translate: Vec2::new(-100.0, -200.0),
            ..ViewportState::default()
        };
        let model = project(state, None, &grid, &markers, CursorHint::Grab, 20.0, None);
        let pos = model.marker_position(&markers[0]);
        assert!((pos - Point::new(1600.0, 1200.0)).hypot() < 1e-9);
        assert_eq!(model.marker_rotation(&markers[0]), 10.0);
        assert_eq!(model.visible_grid_lines().count(), grid.lines().len());
        assert!(!model.is_hovered(&markers[0]));
    }
}
