// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use patrolmap_event_state::click::DEFAULT_CLICK_SLOP;
use patrolmap_markers::MARKER_RADIUS;
use patrolmap_view2d::{ConfigError, MapConfig};
use thiserror::Error;

/// Settings for the marker heading animation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Whether the animation runs at all.
    pub enabled: bool,
    /// Time between ticks, in milliseconds.
    pub interval_ms: u64,
    /// Rotation added per tick, in degrees.
    pub degrees_per_tick: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 100,
            degrees_per_tick: 1.0,
        }
    }
}

/// Full configuration of a [`MapEngine`](crate::MapEngine).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Map geometry and zoom limits.
    pub map: MapConfig,
    /// Pointer travel, in pixels, below which a press/release is a click.
    pub click_slop: f64,
    /// Marker disc radius in map-local units.
    pub marker_radius: f64,
    /// Extra hit slack around markers, in container pixels.
    pub hit_tolerance: f64,
    /// Heading animation.
    pub animation: AnimationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            click_slop: DEFAULT_CLICK_SLOP,
            marker_radius: MARKER_RADIUS,
            hit_tolerance: 2.0,
            animation: AnimationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Configuration for the legacy 8000x8000 map.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            map: MapConfig::legacy(),
            ..Self::default()
        }
    }

    /// Checks the map configuration and the engine's own settings.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        self.map.validate()?;
        if !(self.click_slop.is_finite() && self.click_slop >= 0.0) {
            return Err(EngineConfigError::InvalidClickSlop(self.click_slop));
        }
        for (name, value) in [
            ("marker_radius", self.marker_radius),
            ("hit_tolerance", self.hit_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(EngineConfigError::InvalidHitArea { name, value });
            }
        }
        let anim = &self.animation;
        if anim.interval_ms == 0 || !anim.degrees_per_tick.is_finite() {
            return Err(EngineConfigError::InvalidAnimation {
                interval_ms: anim.interval_ms,
                degrees_per_tick: anim.degrees_per_tick,
            });
        }
        Ok(())
    }
}

/// Error returned by [`EngineConfig::validate`] and [`MapEngine::new`](crate::MapEngine::new).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum EngineConfigError {
    /// The map configuration is invalid.
    #[error(transparent)]
    Map(#[from] ConfigError),
    /// The click slop is negative or not finite.
    #[error("click slop must be a non-negative finite number of pixels, got {0}")]
    InvalidClickSlop(f64),
    /// A marker hit-area parameter is negative or not finite.
    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidHitArea {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The animation interval is zero or the step is not finite.
    #[error("animation needs a non-zero interval and a finite step, got {interval_ms} ms and {degrees_per_tick} degrees")]
    InvalidAnimation {
        /// Configured interval.
        interval_ms: u64,
        /// Configured step.
        degrees_per_tick: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
        assert_eq!(EngineConfig::legacy().validate(), Ok(()));
        assert_eq!(EngineConfig::legacy().map.size, 8000.0);
    }

    #[test]
    fn map_errors_pass_through() {
        let mut config = EngineConfig::default();
        config.map.size = -1.0;
        assert_eq!(
            config.validate(),
            Err(EngineConfigError::Map(ConfigError::NonPositiveSize(-1.0)))
        );
    }

    #[test]
    fn engine_fields_are_checked() {
        let config = EngineConfig {
            click_slop: f64::NAN,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineConfigError::InvalidClickSlop(_))
        ));

        let config = EngineConfig {
            marker_radius: -4.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineConfigError::InvalidHitArea {
                name: "marker_radius",
                ..
            })
        ));

        let mut config = EngineConfig::default();
        config.animation.interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineConfigError::InvalidAnimation { .. })
        ));
    }
}
