// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patrol Map Grid: background grid geometry for the patrol map.
//!
//! The grid is a pure function of `(size, grid_size, major_interval)`:
//!
//! - [`GridLayer::build`] produces every grid line and axis label in unscaled
//!   map-local coordinates. Renderers apply the viewport transform once to the
//!   whole layer rather than per line.
//! - [`GridCache`] memoizes the layer on its [`GridSpec`], so a host can ask
//!   for it every frame without rebuilding.
//! - [`cell_reference`] names the chess-style cell (`H8`, `A15`, ...) under a
//!   world-space point, for status read-outs.
//!
//! Lines come in three kinds: the two world axes ([`GridLineKind::Center`]),
//! every `major_interval`-th line ([`GridLineKind::Major`], labelled with its
//! world coordinate in grid units), and the rest ([`GridLineKind::Minor`]).
//!
//! ```rust
//! use patrolmap_grid::{GridCache, GridLineKind, GridSpec};
//!
//! let spec = GridSpec { size: 1500.0, grid_size: 100.0, major_interval: 5 };
//! let mut cache = GridCache::new();
//! let layer = cache.get(&spec);
//! assert_eq!(layer.lines_of(GridLineKind::Center).count(), 2);
//! assert!(!layer.labels().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod cell;
mod layer;

pub use cell::{cell_reference, column_name};
pub use layer::{
    GridAxis, GridCache, GridLabel, GridLayer, GridLine, GridLineKind, GridSpec, LABEL_INSET,
};
