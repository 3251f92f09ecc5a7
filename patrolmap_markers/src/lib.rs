// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patrol Map Markers: robot entities and their on-map markers.
//!
//! - [`Entity`] and [`Telemetry`] describe robots as the data layer reports
//!   them. Entities are read-only input; the map never persists them.
//! - [`project_markers`] turns a list of entities into [`Marker`]s in
//!   map-local space. Malformed entries (empty id, non-finite values, outside
//!   the world, repeated id) are skipped with a `tracing` warning so that one
//!   bad record never blanks the map.
//! - [`hit_test`] finds the marker under a map-local point.
//! - [`Fleet`] keeps a live, ordered entity list for push-style updates.
//!
//! ```rust
//! use kurbo::Point;
//! use patrolmap_markers::{Entity, HitParams, hit_test, project_markers};
//! use patrolmap_view2d::RosFrame;
//!
//! let frame = RosFrame::new(1500.0);
//! let entities = [
//!     Entity::new("r1", Point::new(0.0, 0.0), 90.0).with_status("patrol"),
//!     Entity::new("", Point::new(1.0, 1.0), 0.0),
//! ];
//! let markers = project_markers(&frame, &entities);
//! assert_eq!(markers.len(), 1);
//!
//! let hit = hit_test(&markers, Point::new(755.0, 748.0), &HitParams::default());
//! assert_eq!(hit.map(|h| h.marker.id.as_str()), Some("r1"));
//! ```

mod entity;
mod fleet;
mod hit;
pub mod palette;
mod project;
mod status;

pub use entity::{Entity, Telemetry, same_entities};
pub use fleet::Fleet;
pub use hit::{HitParams, MarkerHit, hit_test};
pub use palette::ColorSource;
pub use project::{MARKER_RADIUS, Marker, SkipReason, check_entity, project_markers};
pub use status::StatusClass;
