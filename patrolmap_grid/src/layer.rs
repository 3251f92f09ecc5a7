// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point, Rect};
use patrolmap_view2d::{MapConfig, RosFrame};

/// Distance in map-local units between a label and the line it annotates.
pub const LABEL_INSET: f64 = 8.0;

/// The key a [`GridLayer`] is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Side length of the square world.
    pub size: f64,
    /// Spacing between minor lines.
    pub grid_size: f64,
    /// Minor steps between major lines.
    pub major_interval: u32,
}

impl GridSpec {
    /// Number of whole grid cells along one side of the map.
    #[must_use]
    pub fn cells_per_side(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Grid cell counts are small; validated configs keep the ratio finite and positive"
        )]
        {
            (self.size / self.grid_size).floor() as u32
        }
    }
}

impl From<&MapConfig> for GridSpec {
    fn from(config: &MapConfig) -> Self {
        Self {
            size: config.size,
            grid_size: config.grid_size,
            major_interval: config.major_grid_interval,
        }
    }
}

/// Orientation of a grid line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridAxis {
    /// A line of constant map-local `x`, running top to bottom.
    Vertical,
    /// A line of constant map-local `y`, running left to right.
    Horizontal,
}

/// Visual class of a grid line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridLineKind {
    /// One of the two world axes (`x = 0` or `y = 0` in world space).
    Center,
    /// Every `major_interval`-th line; labelled.
    Major,
    /// Any other line.
    Minor,
}

/// A single grid line in map-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Orientation.
    pub axis: GridAxis,
    /// Map-local `x` (vertical lines) or `y` (horizontal lines).
    pub offset: f64,
    /// Full-length segment across the map.
    pub line: Line,
    /// Visual class.
    pub kind: GridLineKind,
}

/// A numeric axis label attached to a major line.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLabel {
    /// Orientation of the labelled line.
    pub axis: GridAxis,
    /// Top-left anchor of the label in map-local coordinates.
    pub anchor: Point,
    /// World coordinate of the line divided by the grid size, rounded.
    pub value: i64,
    /// Display text for `value`.
    pub text: String,
}

/// The complete background grid for one [`GridSpec`].
///
/// Geometry is in unscaled map-local coordinates; the viewport transform is
/// applied once to the whole layer by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayer {
    spec: GridSpec,
    lines: Vec<GridLine>,
    labels: Vec<GridLabel>,
}

impl GridLayer {
    /// Builds the grid for `spec`.
    ///
    /// Lines are placed at every multiple of `grid_size` from `0` to `size`
    /// on both axes. The world axes are always present as
    /// [`GridLineKind::Center`] lines: when a grid step coincides with them
    /// that line is promoted, otherwise an extra line is inserted at
    /// `size / 2`.
    #[must_use]
    pub fn build(spec: &GridSpec) -> Self {
        let frame = RosFrame::new(spec.size);
        let mut lines = Vec::new();
        let mut labels = Vec::new();
        for axis in [GridAxis::Vertical, GridAxis::Horizontal] {
            build_axis(spec, &frame, axis, &mut lines, &mut labels);
        }
        Self {
            spec: *spec,
            lines,
            labels,
        }
    }

    /// The spec this layer was built from.
    #[must_use]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// All lines, vertical first, each axis in increasing offset order.
    #[must_use]
    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    /// All labels.
    #[must_use]
    pub fn labels(&self) -> &[GridLabel] {
        &self.labels
    }

    /// Lines of the given kind.
    pub fn lines_of(&self, kind: GridLineKind) -> impl Iterator<Item = &GridLine> + '_ {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    /// Lines crossing the map-local rectangle `visible`.
    ///
    /// Renderers can pass [`patrolmap_view2d::Viewport::visible_local_rect`]
    /// to skip lines that are off screen.
    pub fn visible_lines(&self, visible: Rect) -> impl Iterator<Item = &GridLine> + '_ {
        self.lines.iter().filter(move |l| match l.axis {
            GridAxis::Vertical => l.offset >= visible.x0 && l.offset <= visible.x1,
            GridAxis::Horizontal => l.offset >= visible.y0 && l.offset <= visible.y1,
        })
    }
}

fn build_axis(
    spec: &GridSpec,
    frame: &RosFrame,
    axis: GridAxis,
    lines: &mut Vec<GridLine>,
    labels: &mut Vec<GridLabel>,
) {
    let size = spec.size;
    let center = frame.half_size();
    let eps = size * 1e-9;
    let major = spec.major_interval.max(1);
    let mut center_emitted = false;

    for i in 0..=spec.cells_per_side() {
        let offset = f64::from(i) * spec.grid_size;

        // Insert the world axis where it falls between two grid steps.
        if !center_emitted && offset > center + eps {
            lines.push(make_line(axis, center, size, GridLineKind::Center));
            center_emitted = true;
        }

        let kind = if (offset - center).abs() <= eps {
            center_emitted = true;
            GridLineKind::Center
        } else if i % major == 0 {
            GridLineKind::Major
        } else {
            GridLineKind::Minor
        };
        lines.push(make_line(axis, offset, size, kind));

        if kind == GridLineKind::Major {
            labels.push(make_label(spec, frame, axis, offset));
        }
    }

    if !center_emitted {
        lines.push(make_line(axis, center, size, GridLineKind::Center));
    }
}

fn make_line(axis: GridAxis, offset: f64, size: f64, kind: GridLineKind) -> GridLine {
    let line = match axis {
        GridAxis::Vertical => Line::new((offset, 0.0), (offset, size)),
        GridAxis::Horizontal => Line::new((0.0, offset), (size, offset)),
    };
    GridLine {
        axis,
        offset,
        line,
        kind,
    }
}

fn make_label(spec: &GridSpec, frame: &RosFrame, axis: GridAxis, offset: f64) -> GridLabel {
    let (world, anchor) = match axis {
        GridAxis::Vertical => (
            frame.local_to_world(Point::new(offset, 0.0)).x,
            Point::new(offset + LABEL_INSET, LABEL_INSET),
        ),
        GridAxis::Horizontal => (
            frame.local_to_world(Point::new(0.0, offset)).y,
            Point::new(LABEL_INSET, offset + LABEL_INSET),
        ),
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Label values are bounded by size / grid_size"
    )]
    let value = (world / spec.grid_size).round() as i64;
    GridLabel {
        axis,
        anchor,
        value,
        text: value.to_string(),
    }
}

/// Memoizes a [`GridLayer`] on its [`GridSpec`].
///
/// The layer is rebuilt only when a different spec is requested.
#[derive(Clone, Debug, Default)]
pub struct GridCache {
    layer: Option<GridLayer>,
    generation: u64,
}

impl GridCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layer: None,
            generation: 0,
        }
    }

    /// Returns the layer for `spec`, building it if the cached one differs.
    pub fn get(&mut self, spec: &GridSpec) -> &GridLayer {
        if self.layer.as_ref().is_none_or(|layer| layer.spec != *spec) {
            self.layer = None;
            self.generation = self.generation.wrapping_add(1);
        }
        self.layer.get_or_insert_with(|| GridLayer::build(spec))
    }

    /// The most recently built layer, if any.
    #[must_use]
    pub fn cached(&self) -> Option<&GridLayer> {
        self.layer.as_ref()
    }

    /// Number of times a layer has been built.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_1500() -> GridSpec {
        GridSpec::from(&MapConfig::default())
    }

    #[test]
    fn line_counts_include_inserted_center() {
        let layer = GridLayer::build(&spec_1500());
        // 16 steps per axis (0..=1500 by 100) plus one inserted world axis.
        assert_eq!(layer.lines().len(), 2 * 17);
        assert_eq!(layer.lines_of(GridLineKind::Center).count(), 2);
    }

    #[test]
    fn center_is_inserted_in_offset_order() {
        let layer = GridLayer::build(&spec_1500());
        let vertical: Vec<f64> = layer
            .lines()
            .iter()
            .filter(|l| l.axis == GridAxis::Vertical)
            .map(|l| l.offset)
            .collect();
        assert!(vertical.windows(2).all(|w| w[0] < w[1]), "offsets not sorted");
        let center = layer
            .lines_of(GridLineKind::Center)
            .find(|l| l.axis == GridAxis::Vertical)
            .unwrap();
        assert_eq!(center.offset, 750.0);
    }

    #[test]
    fn coinciding_center_line_is_promoted() {
        let spec = GridSpec::from(&MapConfig::legacy());
        let layer = GridLayer::build(&spec);
        // 81 steps per axis, the one at 4000 becomes the center line.
        assert_eq!(layer.lines().len(), 2 * 81);
        let centers: Vec<&GridLine> = layer.lines_of(GridLineKind::Center).collect();
        assert_eq!(centers.len(), 2);
        assert!(centers.iter().all(|l| l.offset == 4000.0));
    }

    #[test]
    fn major_lines_follow_interval() {
        let layer = GridLayer::build(&spec_1500());
        let majors: Vec<f64> = layer
            .lines_of(GridLineKind::Major)
            .filter(|l| l.axis == GridAxis::Vertical)
            .map(|l| l.offset)
            .collect();
        assert_eq!(majors, [0.0, 500.0, 1000.0, 1500.0]);
    }

    #[test]
    fn labels_use_world_coordinates() {
        let spec = GridSpec::from(&MapConfig::legacy());
        let layer = GridLayer::build(&spec);
        let vertical: Vec<i64> = layer
            .labels()
            .iter()
            .filter(|l| l.axis == GridAxis::Vertical)
            .map(|l| l.value)
            .collect();
        // Majors every 500 local units, center (4000) unlabelled.
        assert_eq!(vertical.first(), Some(&-40));
        assert_eq!(vertical.last(), Some(&40));
        assert!(!vertical.contains(&0), "center line must not be labelled");

        let top = layer
            .labels()
            .iter()
            .find(|l| l.axis == GridAxis::Horizontal)
            .unwrap();
        // Local y = 0 is the top edge: world y = +4000.
        assert_eq!(top.value, 40);
        assert_eq!(top.text, "40");
        assert_eq!(top.anchor, Point::new(LABEL_INSET, LABEL_INSET));
    }

    #[test]
    fn visible_lines_are_culled() {
        let layer = GridLayer::build(&spec_1500());
        let visible = Rect::new(250.0, 250.0, 450.0, 450.0);
        let count = layer.visible_lines(visible).count();
        // 300 and 400 on each axis.
        assert_eq!(count, 4);
    }

    #[test]
    fn cache_rebuilds_only_on_spec_change() {
        let mut cache = GridCache::new();
        let spec = spec_1500();
        let first_len = cache.get(&spec).lines().len();
        assert_eq!(cache.generation(), 1);
        assert_eq!(cache.get(&spec).lines().len(), first_len);
        assert_eq!(cache.generation(), 1);

        let legacy = GridSpec::from(&MapConfig::legacy());
        cache.get(&legacy);
        assert_eq!(cache.generation(), 2);
        assert_eq!(cache.cached().unwrap().spec(), &legacy);
    }
}
