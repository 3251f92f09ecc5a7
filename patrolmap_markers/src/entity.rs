// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Live telemetry reported by a robot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Telemetry {
    /// Battery charge in percent.
    pub battery: Option<f64>,
    /// Ground speed in world units per second.
    pub speed: Option<f64>,
    /// Link quality in percent.
    pub signal: Option<f64>,
    /// Time of the last report, in milliseconds since the Unix epoch.
    pub last_update_ms: Option<u64>,
}

impl Telemetry {
    /// Field-by-field equality that treats identical NaN readings as equal.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        same_opt(self.battery, other.battery)
            && same_opt(self.speed, other.speed)
            && same_opt(self.signal, other.signal)
            && self.last_update_ms == other.last_update_ms
    }
}

/// A robot as supplied by the data layer.
///
/// Entities are owned by whoever fetches them; the map only reads them. An
/// empty `id` marks an entity as malformed and it will not be rendered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Entity {
    /// Unique identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    /// Position in world space (origin-centered, `+y` up).
    #[cfg_attr(feature = "serde", serde(alias = "location"))]
    pub position: Point,
    /// Heading in degrees, clockwise on screen.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heading: f64,
    /// Optional label shown under the marker.
    #[cfg_attr(feature = "serde", serde(default, alias = "name"))]
    pub display_name: Option<String>,
    /// Optional CSS color overriding the generated one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
    /// Free-form status reported by the robot (`"patrol"`, `"idle"`, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    /// Optional telemetry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub telemetry: Option<Telemetry>,
}

impl Entity {
    /// Creates an entity with only the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, position: Point, heading: f64) -> Self {
        Self {
            id: id.into(),
            position,
            heading,
            display_name: None,
            color: None,
            status: None,
            telemetry: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets an explicit CSS color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the reported status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Attaches telemetry.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Display name if set, otherwise the id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }

    /// Returns `true` if `other` carries exactly the same data.
    ///
    /// Unlike `==`, a malformed entity with a NaN coordinate is the same as
    /// an unchanged copy of itself, so re-sending it is not a change.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && same(self.position.x, other.position.x)
            && same(self.position.y, other.position.y)
            && same(self.heading, other.heading)
            && self.display_name == other.display_name
            && self.color == other.color
            && self.status == other.status
            && match (&self.telemetry, &other.telemetry) {
                (Some(a), Some(b)) => a.same_as(b),
                (None, None) => true,
                _ => false,
            }
    }
}

/// Element-wise [`Entity::same_as`] over two lists.
#[must_use]
pub fn same_entities(a: &[Entity], b: &[Entity]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.same_as(b))
}

fn same(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

fn same_opt(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same(a, b),
        (None, None) => true,
        _ => false,
    }
}
