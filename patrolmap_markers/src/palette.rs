// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker colors.
//!
//! An entity either carries an explicit CSS color or gets one derived from its
//! id. Derived colors are stable across sessions and spread around the hue
//! wheel by the golden angle, so neighbouring ids stay distinguishable.

use peniko::Color;
use peniko::color::{AlphaColor, Hsl, Srgb, parse_color};

/// Hue rotation between consecutive hash buckets, in degrees.
pub const GOLDEN_ANGLE: f32 = 137.5;

/// Saturation of derived colors, in percent.
pub const DERIVED_SATURATION: f32 = 70.0;

/// Lightness of derived colors, in percent.
pub const DERIVED_LIGHTNESS: f32 = 50.0;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Where a marker's color came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSource {
    /// Parsed from the entity's `color` field.
    Explicit,
    /// Derived from the entity id.
    Derived,
}

/// 64-bit FNV-1a hash of `id`.
#[must_use]
pub fn id_hash(id: &str) -> u64 {
    id.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Hue in degrees `[0, 360)` assigned to `id`.
#[must_use]
pub fn hue_for_id(id: &str) -> f32 {
    let bucket = f32::from(u16::try_from(id_hash(id) % 360).unwrap_or_default());
    (bucket * GOLDEN_ANGLE) % 360.0
}

/// The color derived from `id` alone.
#[must_use]
pub fn derived_color(id: &str) -> Color {
    AlphaColor::<Hsl>::new([
        hue_for_id(id),
        DERIVED_SATURATION,
        DERIVED_LIGHTNESS,
        1.0,
    ])
    .convert::<Srgb>()
}

/// Resolves the fill color of a marker.
///
/// A parseable `explicit` CSS color wins. Anything else falls back to the
/// color derived from `id`; an unparseable string is reported once per call.
#[must_use]
pub fn resolve_color(explicit: Option<&str>, id: &str) -> (Color, ColorSource) {
    if let Some(css) = explicit.map(str::trim).filter(|css| !css.is_empty()) {
        match parse_color(css) {
            Ok(color) => return (color.to_alpha_color::<Srgb>(), ColorSource::Explicit),
            Err(err) => {
                tracing::warn!(id, color = css, error = %err, "unparseable marker color");
            }
        }
    }
    (derived_color(id), ColorSource::Derived)
}
