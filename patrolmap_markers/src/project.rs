// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;
use kurbo::Point;
use patrolmap_view2d::RosFrame;
use peniko::Color;
use thiserror::Error;

use crate::entity::Entity;
use crate::palette::{ColorSource, resolve_color};
use crate::status::StatusClass;

/// Default marker radius in map-local units.
pub const MARKER_RADIUS: f64 = 16.0;

/// Why an entity was left off the map.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    /// The id is empty.
    #[error("entity has no id")]
    MissingId,
    /// `x` or `y` is NaN or infinite.
    #[error("position is not finite")]
    NonFinitePosition,
    /// The heading is NaN or infinite.
    #[error("heading is not finite")]
    NonFiniteHeading,
    /// The position lies outside the world bounds.
    #[error("position is outside the map")]
    OutOfBounds,
    /// An earlier entity in the same list has this id.
    #[error("duplicate id")]
    DuplicateId,
}

/// A renderable robot marker.
///
/// Markers are produced fresh by [`project_markers`] and never mutated by the
/// map. `local` is in unscaled map-local space; the layer transform is applied
/// once by the renderer.
#[derive(Clone, Debug)]
pub struct Marker {
    /// Entity id.
    pub id: String,
    /// Index of the entity in the input list.
    pub source_index: usize,
    /// World-space position.
    pub world: Point,
    /// Map-local position.
    pub local: Point,
    /// Heading in degrees, normalized to `[0, 360)`.
    pub heading: f64,
    /// Display name, if the entity has one.
    ///
    /// Renderers draw a name chip only when this is set.
    pub name: Option<String>,
    /// Fill color.
    pub color: Color,
    /// Whether `color` came from the entity or was derived from the id.
    pub color_source: ColorSource,
    /// Coarse status bucket.
    pub status: StatusClass,
}

impl Marker {
    /// Display name if set, otherwise the id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Checks a single entity against the frame, ignoring duplicates.
///
/// # Errors
///
/// Returns the first reason the entity cannot be placed.
pub fn check_entity(frame: &RosFrame, entity: &Entity) -> Result<(), SkipReason> {
    if entity.id.trim().is_empty() {
        return Err(SkipReason::MissingId);
    }
    if !entity.position.is_finite() {
        return Err(SkipReason::NonFinitePosition);
    }
    if !entity.heading.is_finite() {
        return Err(SkipReason::NonFiniteHeading);
    }
    if !frame.contains_world(entity.position) {
        return Err(SkipReason::OutOfBounds);
    }
    Ok(())
}

/// Projects entities into markers, in input order.
///
/// Malformed entities are skipped with a warning instead of failing the whole
/// list. For duplicate ids the first occurrence wins. The result depends only
/// on the arguments.
#[must_use]
pub fn project_markers(frame: &RosFrame, entities: &[Entity]) -> Vec<Marker> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entities.len());
    let mut markers = Vec::with_capacity(entities.len());
    for (index, entity) in entities.iter().enumerate() {
        let checked = check_entity(frame, entity).and_then(|()| {
            if seen.insert(entity.id.as_str()) {
                Ok(())
            } else {
                Err(SkipReason::DuplicateId)
            }
        });
        if let Err(reason) = checked {
            tracing::warn!(index, id = %entity.id, %reason, "skipping entity");
            continue;
        }
        let (color, color_source) = resolve_color(entity.color.as_deref(), &entity.id);
        markers.push(Marker {
            id: entity.id.clone(),
            source_index: index,
            world: entity.position,
            local: frame.world_to_local(entity.position),
            heading: entity.heading.rem_euclid(360.0),
            name: entity.display_name.clone(),
            color,
            color_source,
            status: StatusClass::classify(entity.status.as_deref()),
        });
    }
    tracing::trace!(
        total = entities.len(),
        rendered = markers.len(),
        "projected markers"
    );
    markers
}
