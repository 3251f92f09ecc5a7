// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::MapConfig;
use crate::frame::RosFrame;
use crate::modes::ZoomDirection;

/// Committed pan/zoom state of a map viewport.
///
/// The viewport transform maps map-local coordinates into container pixels:
///
/// ```text
/// view = local * scale + translate
/// ```
///
/// Values of this type are produced by [`Viewport`] and are always consistent
/// with its zoom and pan constraints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Offset of the map-local origin in container pixels.
    pub translate: Vec2,
    /// `true` between `begin_drag` and `end_drag`.
    pub is_dragging: bool,
    /// Pointer position minus `translate` for the active drag.
    ///
    /// Captured by `begin_drag` and rebased whenever another gesture commits
    /// a new translation mid-drag.
    pub drag_start: Point,
}

impl ViewportState {
    /// Map-local → container transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Converts a map-local point into container pixels.
    #[must_use]
    pub fn local_to_view(&self, local: Point) -> Point {
        Point::new(
            local.x * self.scale + self.translate.x,
            local.y * self.scale + self.translate.y,
        )
    }

    /// Converts a container pixel position into map-local coordinates.
    #[must_use]
    pub fn view_to_local(&self, view: Point) -> Point {
        Point::new(
            (view.x - self.translate.x) / self.scale,
            (view.y - self.translate.y) / self.scale,
        )
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            is_dragging: false,
            drag_start: Point::ORIGIN,
        }
    }
}

/// Pan/zoom state manager for one rendered map.
///
/// `Viewport` owns a [`ViewportState`] and enforces two invariants on every
/// mutation:
///
/// - The scale stays within `[min_zoom, max_zoom]`, where `min_zoom` is the
///   larger of the configured floor and the scale at which the world covers
///   the container in both dimensions.
/// - Along each axis, a world larger than the container may not be panned to
///   reveal anything outside it; a world smaller than the container is
///   centered on that axis.
///
/// All gestures route through [`Viewport::update_transform`], the only write
/// path for scale and translation.
///
/// Until a valid container size has been observed via
/// [`Viewport::set_container_size`], every operation is a no-op.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use patrolmap_view2d::{MapConfig, Viewport};
///
/// let mut vp = Viewport::new(&MapConfig::default());
/// vp.set_container_size(Size::new(800.0, 600.0));
///
/// // The world origin starts in the middle of the container.
/// let center = vp.world_center().unwrap();
/// assert!(center.x.abs() < 1e-9 && center.y.abs() < 1e-9);
///
/// // Zoom in around the cursor; the world point under it stays put.
/// let cursor = Point::new(200.0, 150.0);
/// let before = vp.state().view_to_local(cursor);
/// vp.zoom_at(1.2, cursor);
/// let after = vp.state().view_to_local(cursor);
/// assert!((before - after).hypot() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Viewport {
    frame: RosFrame,
    min_zoom_floor: f64,
    max_zoom: f64,
    default_scale: f64,
    zoom_step: f64,
    wheel_sensitivity: f64,
    container: Option<Size>,
    min_zoom: f64,
    drag_pointer: Point,
    state: ViewportState,
}

impl Viewport {
    /// Creates a viewport for the map described by `config`.
    ///
    /// The configuration is expected to have passed [`MapConfig::validate`].
    #[must_use]
    pub fn new(config: &MapConfig) -> Self {
        Self {
            frame: RosFrame::new(config.size),
            min_zoom_floor: config.min_zoom,
            max_zoom: config.max_zoom,
            default_scale: config.default_scale,
            zoom_step: config.zoom_step,
            wheel_sensitivity: config.wheel_sensitivity,
            container: None,
            min_zoom: config.min_zoom,
            drag_pointer: Point::ORIGIN,
            state: ViewportState {
                scale: config.default_scale,
                ..ViewportState::default()
            },
        }
    }

    /// Coordinate frame of the map shown through this viewport.
    #[must_use]
    pub fn frame(&self) -> RosFrame {
        self.frame
    }

    /// Snapshot of the committed state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current uniform zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Current lower zoom bound.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Current upper zoom bound.
    ///
    /// This is the configured maximum, unless the container is so large that
    /// the fill rule pushes `min_zoom` above it; the fill rule wins.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom.max(self.min_zoom)
    }

    /// Last valid container size, if one has been observed.
    #[must_use]
    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    /// Returns `true` once a valid container size is known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.container.is_some()
    }

    /// Scale at which the world covers a container of the given size,
    /// floored at the configured minimum zoom.
    #[must_use]
    pub fn compute_min_zoom(&self, container: Size) -> f64 {
        let size = self.frame.size();
        (container.width / size)
            .max(container.height / size)
            .max(self.min_zoom_floor)
    }

    /// Records a new container size, re-deriving `min_zoom` and re-clamping
    /// the current state.
    ///
    /// The first valid size also centers the world at the default scale.
    /// Zero, negative or non-finite sizes are ignored. Returns `true` if the
    /// size was accepted and differs from the previous one.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        let valid = size.width.is_finite()
            && size.height.is_finite()
            && size.width > 0.0
            && size.height > 0.0;
        if !valid || self.container == Some(size) {
            return false;
        }
        let first = self.container.is_none();
        self.container = Some(size);
        self.min_zoom = self.compute_min_zoom(size);
        if first {
            self.reset_view();
        } else {
            self.update_transform(self.state.scale, self.state.translate);
        }
        true
    }

    /// Applies the panning envelope for `scale` to a candidate translation.
    ///
    /// Without a known container the translation is returned unchanged.
    #[must_use]
    pub fn constrain_pan(&self, translate: Vec2, scale: f64) -> Vec2 {
        let Some(container) = self.container else {
            return translate;
        };
        let scaled = self.frame.size() * scale;
        Vec2::new(
            constrain_axis(translate.x, container.width, scaled),
            constrain_axis(translate.y, container.height, scaled),
        )
    }

    /// Clamps `scale` into `[min_zoom, max_zoom]`, constrains `translate`
    /// for that scale, and commits both.
    ///
    /// This is the only write path for scale and translation. Non-finite
    /// inputs and calls made before a container size is known are ignored.
    /// Returns `true` if the committed state changed.
    ///
    /// A commit made during a drag rebases the drag anchor on the last drag
    /// pointer, so the next [`Viewport::drag_to`] continues from this state.
    pub fn update_transform(&mut self, scale: f64, translate: Vec2) -> bool {
        let changed = self.commit(scale, translate);
        if changed && self.state.is_dragging {
            self.state.drag_start = self.drag_pointer - self.state.translate;
        }
        changed
    }

    fn commit(&mut self, scale: f64, translate: Vec2) -> bool {
        if self.container.is_none() || !scale.is_finite() || !translate.is_finite() {
            return false;
        }
        let scale = scale.clamp(self.min_zoom, self.max_zoom());
        let translate = self.constrain_pan(translate, scale);
        if scale == self.state.scale && translate == self.state.translate {
            return false;
        }
        self.state.scale = scale;
        self.state.translate = translate;
        true
    }

    /// Zooms by `factor` while keeping the map point under `anchor` fixed.
    ///
    /// `anchor` is in container pixels. The new scale is clamped before the
    /// translation is solved for, so the anchor stays fixed whenever the pan
    /// constraint allows it.
    pub fn zoom_at(&mut self, factor: f64, anchor: Point) -> bool {
        if self.container.is_none() || !factor.is_finite() || factor <= 0.0 || !anchor.is_finite()
        {
            return false;
        }
        let local = self.state.view_to_local(anchor);
        let new_scale = (self.state.scale * factor).clamp(self.min_zoom, self.max_zoom());
        let translate = anchor.to_vec2() - local.to_vec2() * new_scale;
        self.update_transform(new_scale, translate)
    }

    /// Applies one zoom-button step around the container center.
    pub fn zoom_step(&mut self, direction: ZoomDirection) -> bool {
        let Some(container) = self.container else {
            return false;
        };
        let center = Point::new(container.width * 0.5, container.height * 0.5);
        self.zoom_at(direction.factor(self.zoom_step), center)
    }

    /// Applies one wheel tick at `anchor`; positive `delta_y` zooms out.
    pub fn zoom_wheel(&mut self, delta_y: f64, anchor: Point) -> bool {
        match ZoomDirection::from_wheel_delta(delta_y) {
            Some(direction) => self.zoom_at(direction.factor(self.wheel_sensitivity), anchor),
            None => false,
        }
    }

    /// Starts a pan gesture with the pointer at `pointer` (container pixels).
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.container.is_none() || !pointer.is_finite() {
            return false;
        }
        self.drag_pointer = pointer;
        self.state.drag_start = pointer - self.state.translate;
        self.state.is_dragging = true;
        true
    }

    /// Moves an active pan gesture so the map follows `pointer`.
    ///
    /// The anchor is not rebased here: a pan held against the envelope
    /// resumes only once the pointer comes back past the edge.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        if !self.state.is_dragging || !pointer.is_finite() {
            return false;
        }
        self.drag_pointer = pointer;
        let translate = pointer - self.state.drag_start;
        self.commit(self.state.scale, translate)
    }

    /// Ends the pan gesture. Safe to call when no drag is active.
    pub fn end_drag(&mut self) -> bool {
        let was = self.state.is_dragging;
        self.state.is_dragging = false;
        was
    }

    /// Restores the default scale with the world centered in the container.
    pub fn reset_view(&mut self) -> bool {
        let Some(container) = self.container else {
            return false;
        };
        let scale = self.default_scale.clamp(self.min_zoom, self.max_zoom());
        let half_world = self.frame.half_size() * scale;
        let translate = Vec2::new(
            container.width * 0.5 - half_world,
            container.height * 0.5 - half_world,
        );
        self.update_transform(scale, translate)
    }

    /// Zooms out to `min_zoom` with the world centered in the container.
    pub fn fit_to_screen(&mut self) -> bool {
        let Some(container) = self.container else {
            return false;
        };
        let scale = self.min_zoom;
        let scaled = self.frame.size() * scale;
        let translate = Vec2::new(
            (container.width - scaled) * 0.5,
            (container.height - scaled) * 0.5,
        );
        self.update_transform(scale, translate)
    }

    /// Map-local rectangle currently visible through the container.
    #[must_use]
    pub fn visible_local_rect(&self) -> Option<Rect> {
        let container = self.container?;
        let min = self.state.view_to_local(Point::ORIGIN);
        let max = self
            .state
            .view_to_local(Point::new(container.width, container.height));
        Some(Rect::from_points(min, max))
    }

    /// World-space point under the center of the container.
    #[must_use]
    pub fn world_center(&self) -> Option<Point> {
        let container = self.container?;
        let center = Point::new(container.width * 0.5, container.height * 0.5);
        Some(self.frame.local_to_world(self.state.view_to_local(center)))
    }
}

fn constrain_axis(translate: f64, container: f64, scaled: f64) -> f64 {
    if scaled > container {
        translate.clamp(container - scaled, 0.0)
    } else {
        (container - scaled) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::Viewport;
    use crate::config::MapConfig;
    use crate::modes::ZoomDirection;

    fn ready(width: f64, height: f64) -> Viewport {
        let mut vp = Viewport::new(&MapConfig::default());
        assert!(vp.set_container_size(Size::new(width, height)), "size rejected");
        vp
    }

    #[test]
    fn operations_before_layout_are_ignored() {
        let mut vp = Viewport::new(&MapConfig::default());
        let before = vp.state();
        assert!(!vp.update_transform(2.0, Vec2::new(10.0, 10.0)));
        assert!(!vp.zoom_at(2.0, Point::new(10.0, 10.0)));
        assert!(!vp.begin_drag(Point::new(1.0, 1.0)));
        assert!(!vp.drag_to(Point::new(50.0, 50.0)));
        assert!(!vp.reset_view());
        assert!(!vp.zoom_step(ZoomDirection::In));
        assert_eq!(vp.state(), before);
        assert!(vp.world_center().is_none());
    }

    #[test]
    fn degenerate_container_sizes_are_ignored() {
        let mut vp = Viewport::new(&MapConfig::default());
        assert!(!vp.set_container_size(Size::new(0.0, 600.0)));
        assert!(!vp.set_container_size(Size::new(800.0, -1.0)));
        assert!(!vp.set_container_size(Size::new(f64::NAN, 600.0)));
        assert!(!vp.is_ready());
    }

    #[test]
    fn min_zoom_covers_container() {
        let vp = ready(800.0, 600.0);
        let expected = 800.0 / 1500.0;
        assert!((vp.min_zoom() - expected).abs() < 1e-12);

        let small = ready(100.0, 50.0);
        assert!((small.min_zoom() - 0.1).abs() < 1e-12, "floor should win");
    }

    #[test]
    fn first_layout_centers_the_world() {
        let vp = ready(800.0, 600.0);
        let state = vp.state();
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.translate, Vec2::new(400.0 - 750.0, 300.0 - 750.0));
    }

    #[test]
    fn resize_reclamps_current_state() {
        let mut vp = ready(800.0, 600.0);
        vp.update_transform(vp.min_zoom(), Vec2::ZERO);
        // Growing the container raises min_zoom above the current scale.
        assert!(vp.set_container_size(Size::new(1200.0, 600.0)));
        assert!((vp.scale() - 1200.0 / 1500.0).abs() < 1e-12);
        let t = vp.state().translate;
        let scaled = 1500.0 * vp.scale();
        assert!(t.x <= 0.0 && t.x >= 1200.0 - scaled);
    }

    #[test]
    fn huge_container_lets_fill_rule_win_over_max_zoom() {
        let vp = ready(6000.0, 3000.0);
        assert!((vp.min_zoom() - 4.0).abs() < 1e-12);
        assert_eq!(vp.max_zoom(), vp.min_zoom());
        assert_eq!(vp.scale(), 4.0);
    }

    #[test]
    fn smaller_world_is_centered_on_that_axis() {
        let mut vp = ready(800.0, 600.0);
        // Force a scale below the cover scale by constraining directly.
        let t = vp.constrain_pan(Vec2::new(-999.0, -999.0), 0.2);
        assert_eq!(t, Vec2::new((800.0 - 300.0) / 2.0, (600.0 - 300.0) / 2.0));
        // Through the write path the scale is clamped first.
        vp.update_transform(0.2, Vec2::new(-999.0, -999.0));
        assert!((vp.scale() - vp.min_zoom()).abs() < 1e-12);
    }

    #[test]
    fn drag_follows_pointer_from_anchor() {
        let mut vp = ready(800.0, 600.0);
        let t0 = vp.state().translate;
        assert!(vp.begin_drag(Point::new(100.0, 100.0)));
        assert!(vp.state().is_dragging);
        assert!(vp.drag_to(Point::new(130.0, 80.0)));
        assert_eq!(vp.state().translate, t0 + Vec2::new(30.0, -20.0));
        assert!(vp.end_drag());
        assert!(!vp.end_drag(), "second end_drag should be a no-op");
        assert!(!vp.drag_to(Point::new(500.0, 500.0)));
    }

    #[test]
    fn zoom_mid_drag_rebases_anchor() {
        let mut vp = ready(800.0, 600.0);
        vp.begin_drag(Point::new(400.0, 300.0));
        vp.drag_to(Point::new(410.0, 300.0));
        assert!(vp.zoom_wheel(-1.0, Point::new(410.0, 300.0)));
        let zoomed = vp.state();
        assert!((zoomed.translate - Vec2::new(-415.0, -525.0)).hypot() < 1e-9);
        assert!((zoomed.drag_start - Point::new(825.0, 825.0)).hypot() < 1e-9);

        assert!(vp.drag_to(Point::new(411.0, 300.0)));
        let moved = vp.state().translate;
        assert!(
            (moved - Vec2::new(-414.0, -525.0)).hypot() < 1e-9,
            "drag after zoom jumped to {moved:?}"
        );
    }

    #[test]
    fn zoom_step_scales_by_configured_step() {
        let mut vp = ready(800.0, 600.0);
        vp.zoom_step(ZoomDirection::In);
        assert!((vp.scale() - 1.2).abs() < 1e-12);
        vp.zoom_step(ZoomDirection::Out);
        assert!((vp.scale() - 0.96).abs() < 1e-12);
    }

    #[test]
    fn wheel_direction_and_zero_delta() {
        let mut vp = ready(800.0, 600.0);
        let cursor = Point::new(400.0, 300.0);
        assert!(!vp.zoom_wheel(0.0, cursor));
        assert!(vp.zoom_wheel(-120.0, cursor));
        assert!((vp.scale() - 1.1).abs() < 1e-12);
        assert!(vp.zoom_wheel(120.0, cursor));
        assert!((vp.scale() - 0.99).abs() < 1e-12);
    }

    #[test]
    fn fit_to_screen_uses_min_zoom() {
        let mut vp = ready(800.0, 600.0);
        vp.fit_to_screen();
        assert!((vp.scale() - vp.min_zoom()).abs() < 1e-12);
        let visible = vp.visible_local_rect().unwrap();
        assert!(visible.x0.abs() < 1e-9 && (visible.x1 - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn reset_view_recenters_after_panning() {
        let mut vp = ready(800.0, 600.0);
        vp.zoom_at(2.0, Point::new(10.0, 10.0));
        vp.reset_view();
        let center = vp.world_center().unwrap();
        assert!(center.x.abs() < 1e-9 && center.y.abs() < 1e-9);
        assert_eq!(vp.scale(), 1.0);
    }
}
