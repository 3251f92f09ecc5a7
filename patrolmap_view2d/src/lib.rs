// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patrol Map View 2D: viewport and coordinate primitives for the grid map.
//!
//! This crate provides a small, headless model of the patrol grid map's
//! viewport. It focuses on:
//! - Coordinate conversion between the robot-native world frame and the
//!   map-local pixel space ([`RosFrame`]).
//! - Pan + zoom state with enforced invariants ([`Viewport`],
//!   [`ViewportState`]).
//! - Zoom-to-cursor, wheel and button zoom, drag panning, reset and fit.
//! - Map geometry and zoom configuration ([`MapConfig`]).
//!
//! It does **not** own any entities, grid geometry or rendering backend.
//! Callers are expected to:
//! - Report the container size whenever it changes.
//! - Wire pointer and wheel input into viewport operations at a higher layer.
//! - Apply [`ViewportState::transform`] once to the whole map layer.
//!
//! ## Coordinate spaces
//!
//! - **World**: origin-centered, `+y` up, in world units (ROS convention).
//! - **Map-local**: origin at the top-left corner of the map layer, `+y`
//!   down, unscaled.
//! - **View**: container pixels, `view = local * scale + translate`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use patrolmap_view2d::{MapConfig, Viewport, ZoomDirection};
//!
//! let config = MapConfig::default();
//! config.validate().unwrap();
//!
//! let mut view = Viewport::new(&config);
//! view.set_container_size(Size::new(800.0, 600.0));
//!
//! view.zoom_step(ZoomDirection::In);
//!
//! // Where is a robot standing at world (100, 50) on screen?
//! let frame = view.frame();
//! let on_screen = view.state().local_to_view(frame.world_to_local(Point::new(100.0, 50.0)));
//! assert!(on_screen.x > 400.0 && on_screen.y < 300.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod config;
mod frame;
mod modes;
mod viewport;

pub use config::{ConfigError, MapConfig};
pub use frame::RosFrame;
pub use modes::ZoomDirection;
pub use viewport::{Viewport, ViewportState};
