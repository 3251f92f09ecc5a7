// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: movement deltas plus pointer-capture bookkeeping.
//!
//! While a map is being panned the host usually listens for pointer events on
//! the whole document (or captures the pointer) so the drag keeps working when
//! the cursor leaves the map. [`DragSession`] tells the host exactly when to
//! attach and detach those listeners:
//!
//! 1) [`DragSession::begin`] returns [`CaptureChange::Acquire`] the first time
//!    a drag starts; starting again while captured returns `None`.
//! 2) [`DragSession::update`] returns the movement delta since the last update.
//! 3) [`DragSession::end`] returns [`CaptureChange::Release`] once; repeated
//!    calls, or calls without a matching `begin`, return `None`.
//!
//! Every `Acquire` is therefore paired with exactly one `Release`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use patrolmap_event_state::drag::{CaptureChange, DragSession};
//!
//! let mut drag = DragSession::default();
//!
//! assert_eq!(drag.begin(Point::new(10.0, 20.0)), Some(CaptureChange::Acquire));
//! assert!(drag.is_active());
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! assert_eq!(drag.end(), Some(CaptureChange::Release));
//! assert_eq!(drag.end(), None);
//! ```

use kurbo::{Point, Vec2};

/// Instruction for the host's global pointer listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptureChange {
    /// Attach document-level move/up listeners (or capture the pointer).
    Acquire,
    /// Detach them again.
    Release,
}

/// Tracks one pan gesture and whether pointer capture is held for it.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragSession {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    captured: bool,
}

impl DragSession {
    /// Starts tracking a drag from `pos`.
    ///
    /// Returns [`CaptureChange::Acquire`] unless capture is already held, in
    /// which case the previous drag is simply restarted from `pos`.
    pub fn begin(&mut self, pos: Point) -> Option<CaptureChange> {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        if self.captured {
            None
        } else {
            self.captured = true;
            Some(CaptureChange::Acquire)
        }
    }

    /// Records a pointer move, returning the delta since the previous one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `current` from the position the drag began at.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current - start)
    }

    /// Position the active drag began at.
    #[must_use]
    pub fn start_pos(&self) -> Option<Point> {
        self.start_pos
    }

    /// Ends the drag, returning [`CaptureChange::Release`] if capture was held.
    pub fn end(&mut self) -> Option<CaptureChange> {
        self.start_pos = None;
        self.last_pos = None;
        if self.captured {
            self.captured = false;
            Some(CaptureChange::Release)
        } else {
            None
        }
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` while the host should keep its global listeners attached.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}
