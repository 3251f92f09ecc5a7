// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patrol Map: a headless pan/zoom engine for a robot fleet grid map.
//!
//! [`MapEngine`] ties the lower-level crates together:
//!
//! - a [`Viewport`](patrolmap_view2d::Viewport) that owns scale and
//!   translation and enforces the zoom and pan limits,
//! - the memoized background grid from `patrolmap_grid`,
//! - robot markers projected by `patrolmap_markers`,
//! - drag and click tracking from `patrolmap_event_state`,
//! - a host-clocked [`HeadingAnimation`].
//!
//! The engine never touches a window or a GPU. Hosts:
//!
//! 1. report the container size with [`MapEngine::set_container_size`];
//! 2. forward input as [`MapInput`] and act on the returned [`InputOutcome`]
//!    (attach/detach global pointer listeners on
//!    [`CaptureChange`], update the page selection on
//!    [`MapEvent::EntitySelected`], redraw when asked);
//! 3. push entity lists with [`MapEngine::set_entities`];
//! 4. call [`MapEngine::tick`] from their frame or timer callback;
//! 5. draw [`MapEngine::render`] and show [`MapEngine::status`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use patrolmap::{EngineConfig, Entity, MapEngine, MapEvent, MapInput};
//!
//! let mut map = MapEngine::new(EngineConfig::default()).unwrap();
//! map.set_container_size(Size::new(800.0, 600.0));
//! map.set_entities(&[Entity::new("r1", Point::new(0.0, 0.0), 45.0)]);
//!
//! // The world origin sits at the container center after the first layout.
//! map.handle_input(MapInput::down((400.0, 300.0)));
//! let outcome = map.handle_input(MapInput::up((401.0, 300.0)));
//! assert_eq!(outcome.event, Some(MapEvent::EntitySelected("r1".into())));
//!
//! assert_eq!(map.status().zoom_percent, 100);
//! ```

mod animation;
mod config;
mod engine;
mod input;
mod render;
mod status;

pub use animation::{HeadingAnimation, RepeatingTimer};
pub use config::{AnimationConfig, EngineConfig, EngineConfigError};
pub use engine::MapEngine;
pub use input::{InputOutcome, MapEvent, MapInput, PointerButton};
pub use render::{CursorHint, RenderModel, project};
pub use status::{RobotSummary, StatusReadout, zoom_percent};

pub use patrolmap_event_state::drag::CaptureChange;
pub use patrolmap_markers::{Entity, Fleet, Marker, StatusClass, Telemetry};
pub use patrolmap_view2d::{ConfigError, MapConfig, ViewportState};
