// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use patrolmap_event_state::click::{ClickResult, ClickTracker};
use patrolmap_event_state::drag::{CaptureChange, DragSession};
use patrolmap_grid::{GridCache, GridSpec, cell_reference};
use patrolmap_markers::{Entity, HitParams, Marker, hit_test, project_markers, same_entities};
use patrolmap_view2d::{Viewport, ViewportState, ZoomDirection};

use crate::animation::HeadingAnimation;
use crate::config::{EngineConfig, EngineConfigError};
use crate::input::{InputOutcome, MapEvent, MapInput, PointerButton};
use crate::render::{CursorHint, RenderModel, project};
use crate::status::{StatusReadout, summarize, zoom_percent};

/// The interactive grid map, minus any actual drawing.
///
/// One engine owns one viewport. Hosts report the container size, forward
/// pointer and wheel input, push entity lists as they arrive, and draw the
/// [`RenderModel`] returned by [`MapEngine::render`].
#[derive(Debug)]
pub struct MapEngine {
    config: EngineConfig,
    viewport: Viewport,
    grid_spec: GridSpec,
    grid: GridCache,
    drag: DragSession,
    clicks: ClickTracker,
    entities: Vec<Entity>,
    markers: Vec<Marker>,
    hovered: Option<String>,
    animation: HeadingAnimation,
    torn_down: bool,
}

impl MapEngine {
    /// Creates an engine.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(config: EngineConfig) -> Result<Self, EngineConfigError> {
        config.validate()?;
        let grid_spec = GridSpec::from(&config.map);
        let mut grid = GridCache::new();
        let lines = grid.get(&grid_spec).lines().len();
        tracing::debug!(
            size = config.map.size,
            grid_size = config.map.grid_size,
            lines,
            "map engine created"
        );
        Ok(Self {
            viewport: Viewport::new(&config.map),
            grid_spec,
            grid,
            drag: DragSession::default(),
            clicks: ClickTracker::new(config.click_slop),
            entities: Vec::new(),
            markers: Vec::new(),
            hovered: None,
            animation: HeadingAnimation::new(
                config.animation.interval_ms,
                config.animation.degrees_per_tick,
            ),
            torn_down: false,
            config,
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The viewport, for read-outs and coordinate conversion.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Committed viewport state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.viewport.state()
    }

    /// Last entity list received.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Markers projected from the last entity list.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Id of the marker under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Returns `true` while a pan gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Records the container size. Returns `true` if the view changed.
    ///
    /// Invalid sizes are ignored; until a valid one arrives every gesture
    /// and command is a no-op.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        if !(size.is_finite() && size.width > 0.0 && size.height > 0.0) {
            tracing::debug!(width = size.width, height = size.height, "ignoring container size");
            return false;
        }
        let changed = self.viewport.set_container_size(size);
        if changed {
            tracing::trace!(
                width = size.width,
                height = size.height,
                min_zoom = self.viewport.min_zoom(),
                "container resized"
            );
        }
        changed
    }

    /// Replaces the entity list and re-projects markers.
    ///
    /// Returns `false` when the list is identical to the previous one,
    /// including any malformed entries it carries.
    pub fn set_entities(&mut self, entities: &[Entity]) -> bool {
        if same_entities(&self.entities, entities) {
            return false;
        }
        self.entities = entities.to_vec();
        self.markers = project_markers(&self.viewport.frame(), &self.entities);
        if let Some(id) = self.hovered.as_deref()
            && !self.markers.iter().any(|m| m.id == id)
        {
            self.hovered = None;
        }
        true
    }

    /// Feeds one input event through the gesture state machine.
    pub fn handle_input(&mut self, input: MapInput) -> InputOutcome {
        match input {
            MapInput::PointerDown { pos, button } => self.pointer_down(pos, button),
            MapInput::PointerMove { pos } => self.pointer_move(pos),
            MapInput::PointerUp { pos } => self.pointer_up(pos),
            MapInput::PointerLeave => self.pointer_leave(),
            MapInput::Wheel { pos, delta_y } => {
                InputOutcome::redraw(self.viewport.zoom_wheel(delta_y, pos))
            }
            MapInput::ActivateMarker(id) => self.activate(id),
        }
    }

    /// Advances the heading animation to the host time `now_ms`.
    ///
    /// The first call starts the animation. Returns `true` if a redraw is due.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.config.animation.enabled || self.torn_down {
            return false;
        }
        if !self.animation.is_running() {
            self.animation.start(now_ms);
            return false;
        }
        self.animation.tick(now_ms)
    }

    /// Zoom-in button.
    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_step(ZoomDirection::In)
    }

    /// Zoom-out button.
    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_step(ZoomDirection::Out)
    }

    /// Reset button: default scale, world centered.
    pub fn reset_view(&mut self) -> bool {
        self.viewport.reset_view()
    }

    /// Fit button: smallest scale that still fills the container.
    pub fn fit_to_screen(&mut self) -> bool {
        self.viewport.fit_to_screen()
    }

    /// The marker under the container point `view`, if any.
    #[must_use]
    pub fn marker_at(&self, view: Point) -> Option<&Marker> {
        if !self.viewport.is_ready() {
            return None;
        }
        let state = self.viewport.state();
        let params = HitParams {
            radius: self.config.marker_radius,
            tolerance: self.config.hit_tolerance / state.scale,
        };
        hit_test(&self.markers, state.view_to_local(view), &params).map(|hit| hit.marker)
    }

    /// Cursor the host should show.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.drag.is_active() {
            CursorHint::Grabbing
        } else if self.hovered.is_some() {
            CursorHint::Pointer
        } else {
            CursorHint::Grab
        }
    }

    /// Info panel read-out.
    #[must_use]
    pub fn status(&self) -> StatusReadout {
        let state = self.viewport.state();
        let center = self.viewport.world_center();
        StatusReadout {
            ready: self.viewport.is_ready(),
            zoom_percent: zoom_percent(state.scale),
            scale: state.scale,
            center: center.unwrap_or(Point::ZERO),
            cell: center.and_then(|c| cell_reference(c, &self.grid_spec)),
            robots: self
                .markers
                .iter()
                .map(|m| summarize(m, cell_reference(m.world, &self.grid_spec)))
                .collect(),
        }
    }

    /// Everything needed to draw the current frame.
    pub fn render(&mut self) -> RenderModel<'_> {
        let cursor = self.cursor();
        let grid = self.grid.get(&self.grid_spec);
        project(
            self.viewport.state(),
            self.viewport.visible_local_rect(),
            grid,
            &self.markers,
            cursor,
            self.animation.spin_degrees(),
            self.hovered.as_deref(),
        )
    }

    /// Stops the animation and abandons any gesture.
    ///
    /// Returns [`CaptureChange::Release`] if the host still holds global
    /// pointer listeners. Safe to call more than once.
    pub fn teardown(&mut self) -> Option<CaptureChange> {
        self.torn_down = true;
        self.animation.stop();
        self.viewport.end_drag();
        self.clicks.cancel();
        self.hovered = None;
        self.drag.end()
    }

    fn pointer_down(&mut self, pos: Point, button: PointerButton) -> InputOutcome {
        if button != PointerButton::Primary || !self.viewport.begin_drag(pos) {
            return InputOutcome::none();
        }
        self.clicks.on_down(pos);
        InputOutcome {
            event: None,
            capture: self.drag.begin(pos),
            redraw: true,
        }
    }

    fn pointer_move(&mut self, pos: Point) -> InputOutcome {
        if self.drag.is_active() {
            self.drag.update(pos);
            // Inside the click slop the map stays put.
            let panned = self.clicks.on_move(pos) && self.viewport.drag_to(pos);
            return InputOutcome::redraw(panned);
        }
        InputOutcome::redraw(self.update_hover(Some(pos)))
    }

    fn pointer_up(&mut self, pos: Point) -> InputOutcome {
        if !self.drag.is_active() {
            return InputOutcome::none();
        }
        let event = match self.clicks.on_up(pos) {
            ClickResult::Click(at) => self
                .marker_at(at)
                .map(|m| MapEvent::EntitySelected(m.id.clone())),
            ClickResult::Drag => {
                self.viewport.drag_to(pos);
                None
            }
            ClickResult::None => None,
        };
        self.viewport.end_drag();
        let capture = self.drag.end();
        if let Some(MapEvent::EntitySelected(id)) = &event {
            tracing::debug!(id = %id, "entity clicked");
        }
        self.update_hover(Some(pos));
        InputOutcome {
            event,
            capture,
            redraw: true,
        }
    }

    fn pointer_leave(&mut self) -> InputOutcome {
        let ended = self.viewport.end_drag();
        self.clicks.cancel();
        let capture = self.drag.end();
        let hover = self.update_hover(None);
        InputOutcome {
            event: None,
            capture,
            redraw: ended || hover,
        }
    }

    fn activate(&mut self, id: String) -> InputOutcome {
        if !self.markers.iter().any(|m| m.id == id) {
            tracing::debug!(id = %id, "activation of unknown marker ignored");
            return InputOutcome::none();
        }
        InputOutcome {
            event: Some(MapEvent::EntitySelected(id)),
            ..InputOutcome::default()
        }
    }

    fn update_hover(&mut self, pos: Option<Point>) -> bool {
        let hovered = pos
            .and_then(|p| self.marker_at(p))
            .map(|m| m.id.clone());
        if hovered == self.hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }
}

impl Drop for MapEngine {
    fn drop(&mut self) {
        if self.teardown().is_some() {
            tracing::warn!("map engine dropped while holding pointer capture");
        }
    }
}
