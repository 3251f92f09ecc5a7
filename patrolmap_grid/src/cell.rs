// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chess-style grid cell names.
//!
//! Columns are lettered from the left edge (`A`, `B`, ..., `Z`, `AA`, ...),
//! rows are numbered from the bottom edge starting at `1`, so the top-left
//! cell of a 15x15 map is `A15` and the bottom-right one is `O1`.

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::layer::GridSpec;

/// Names the grid cell containing the world-space point `world`.
///
/// Cells are counted symmetrically around the world origin. Returns `None`
/// for points outside the grid or with non-finite coordinates.
///
/// ```rust
/// use kurbo::Point;
/// use patrolmap_grid::{GridSpec, cell_reference};
///
/// let spec = GridSpec { size: 1500.0, grid_size: 100.0, major_interval: 5 };
/// assert_eq!(cell_reference(Point::new(0.0, 0.0), &spec).as_deref(), Some("H8"));
/// assert_eq!(cell_reference(Point::new(-740.0, 740.0), &spec).as_deref(), Some("A15"));
/// assert_eq!(cell_reference(Point::new(900.0, 0.0), &spec), None);
/// ```
#[must_use]
pub fn cell_reference(world: Point, spec: &GridSpec) -> Option<String> {
    if !world.is_finite() {
        return None;
    }
    let cells = spec.cells_per_side();
    let half = f64::from(cells) * 0.5;
    let col = (world.x / spec.grid_size + half).floor();
    let row = (-world.y / spec.grid_size + half).floor();
    let limit = f64::from(cells);
    if !(0.0..limit).contains(&col) || !(0.0..limit).contains(&row) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Both indices were range-checked against the cell count"
    )]
    let (col, row) = (col as u32, row as u32);
    Some(format!("{}{}", column_name(col), cells - row))
}

/// Spreadsheet-style column name for a zero-based index: `A`..`Z`, `AA`, ...
#[must_use]
pub fn column_name(index: u32) -> String {
    let mut n = u64::from(index) + 1;
    let mut letters = [0_u8; 8];
    let mut len = 0;
    while n > 0 {
        let rem = (n - 1) % 26;
        #[expect(clippy::cast_possible_truncation, reason = "rem < 26")]
        {
            letters[len] = b'A' + rem as u8;
        }
        len += 1;
        n = (n - 1) / 26;
    }
    letters[..len].iter().rev().map(|&b| char::from(b)).collect()
}
