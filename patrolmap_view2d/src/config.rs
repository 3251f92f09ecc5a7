// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Geometry and zoom configuration of a grid map.
///
/// The defaults match the dashboard's patrol map: a 1500x1500 world with a
/// minor grid line every 100 units and a labelled major line every 5 minor
/// lines.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Side length of the square world, in world units.
    pub size: f64,
    /// Spacing between minor grid lines, in world units.
    pub grid_size: f64,
    /// Number of minor grid steps between major (labelled) lines.
    pub major_grid_interval: u32,
    /// Lower bound for the zoom factor, before the fill-the-container rule.
    pub min_zoom: f64,
    /// Upper bound for the zoom factor.
    pub max_zoom: f64,
    /// Zoom factor restored by `reset_view`.
    pub default_scale: f64,
    /// Relative change applied by a single zoom button press.
    pub zoom_step: f64,
    /// Relative change applied by a single wheel tick.
    pub wheel_sensitivity: f64,
}

impl MapConfig {
    /// Configuration of the legacy 8000x8000 map.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            size: 8000.0,
            ..Self::default()
        }
    }

    /// Checks that every field is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::NonPositiveSize(self.size));
        }
        if !(self.grid_size.is_finite() && self.grid_size > 0.0 && self.grid_size <= self.size) {
            return Err(ConfigError::InvalidGridSize {
                grid_size: self.grid_size,
                size: self.size,
            });
        }
        if self.major_grid_interval == 0 {
            return Err(ConfigError::InvalidMajorInterval);
        }
        let zoom_ok = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom;
        if !zoom_ok {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.default_scale.is_finite() && self.default_scale > 0.0) {
            return Err(ConfigError::InvalidStep {
                name: "default_scale",
                value: self.default_scale,
            });
        }
        for (name, value) in [
            ("zoom_step", self.zoom_step),
            ("wheel_sensitivity", self.wheel_sensitivity),
        ] {
            if !(value.is_finite() && value > 0.0 && value < 1.0) {
                return Err(ConfigError::InvalidStep { name, value });
            }
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size: 1500.0,
            grid_size: 100.0,
            major_grid_interval: 5,
            min_zoom: 0.1,
            max_zoom: 3.0,
            default_scale: 1.0,
            zoom_step: 0.2,
            wheel_sensitivity: 0.1,
        }
    }
}

/// Error returned by [`MapConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The world size is zero, negative or not finite.
    #[error("map size must be a positive finite number, got {0}")]
    NonPositiveSize(f64),
    /// The grid spacing is not positive or exceeds the map size.
    #[error("grid size {grid_size} must be positive and at most the map size {size}")]
    InvalidGridSize {
        /// Configured grid spacing.
        grid_size: f64,
        /// Configured map size.
        size: f64,
    },
    /// The major grid interval is zero.
    #[error("major grid interval must be at least 1")]
    InvalidMajorInterval,
    /// The zoom limits are not positive or are reversed.
    #[error("zoom range [{min}, {max}] must be positive and ordered")]
    InvalidZoomRange {
        /// Configured minimum zoom.
        min: f64,
        /// Configured maximum zoom.
        max: f64,
    },
    /// A scale or step parameter is outside its allowed range.
    #[error("{name} is out of range: {value}")]
    InvalidStep {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, MapConfig};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MapConfig::default().validate(), Ok(()));
        assert_eq!(MapConfig::legacy().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let cfg = MapConfig {
            size: 0.0,
            ..MapConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveSize(0.0)));

        let cfg = MapConfig {
            grid_size: 2000.0,
            ..MapConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidGridSize { .. })
        ));

        let cfg = MapConfig {
            major_grid_interval: 0,
            ..MapConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidMajorInterval));
    }

    #[test]
    fn rejects_reversed_zoom_and_bad_steps() {
        let cfg = MapConfig {
            min_zoom: 4.0,
            max_zoom: 3.0,
            ..MapConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidZoomRange { .. })
        ));

        let cfg = MapConfig {
            wheel_sensitivity: 1.5,
            ..MapConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidStep {
                name: "wheel_sensitivity",
                value: 1.5,
            })
        );
    }
}
