// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition on a draggable surface.
//!
//! On a pannable map every press starts a potential drag, so a release has to
//! be classified after the fact: if the pointer never strayed further than a
//! small slop radius from where it went down, the gesture was a click;
//! otherwise it was a drag. Once the slop is exceeded the gesture stays a drag
//! even if the pointer returns to its starting point.
//!
//! ```
//! use kurbo::Point;
//! use patrolmap_event_state::click::{ClickResult, ClickTracker};
//!
//! let mut clicks = ClickTracker::new(3.0);
//!
//! clicks.on_down(Point::new(100.0, 100.0));
//! clicks.on_move(Point::new(101.0, 101.0));
//! assert_eq!(clicks.on_up(Point::new(101.0, 101.0)), ClickResult::Click(Point::new(101.0, 101.0)));
//!
//! clicks.on_down(Point::new(100.0, 100.0));
//! clicks.on_move(Point::new(140.0, 100.0));
//! clicks.on_move(Point::new(100.0, 100.0));
//! assert_eq!(clicks.on_up(Point::new(100.0, 100.0)), ClickResult::Drag);
//! ```

use kurbo::Point;

/// Default slop radius in pixels.
pub const DEFAULT_CLICK_SLOP: f64 = 3.0;

/// Classification of a completed press/release pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickResult {
    /// The pointer stayed within the slop radius; carries the release position.
    Click(Point),
    /// The pointer moved beyond the slop radius at some point.
    Drag,
    /// No press was being tracked (release without press, or after cancel).
    None,
}

/// Distinguishes clicks from drags using a movement threshold.
#[derive(Clone, Copy, Debug)]
pub struct ClickTracker {
    slop: f64,
    down_pos: Option<Point>,
    exceeded: bool,
}

impl ClickTracker {
    /// Creates a tracker with the given slop radius in pixels.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            down_pos: None,
            exceeded: false,
        }
    }

    /// Slop radius in pixels.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Starts tracking a press at `pos`, discarding any previous press.
    pub fn on_down(&mut self, pos: Point) {
        self.down_pos = Some(pos);
        self.exceeded = false;
    }

    /// Records pointer movement; returns `true` once the slop has been exceeded.
    pub fn on_move(&mut self, pos: Point) -> bool {
        if let Some(down) = self.down_pos
            && !self.exceeded
            && (pos - down).hypot2() > self.slop * self.slop
        {
            self.exceeded = true;
        }
        self.exceeded
    }

    /// Classifies the gesture ending at `pos` and stops tracking.
    pub fn on_up(&mut self, pos: Point) -> ClickResult {
        // The release itself may be the first event past the slop.
        self.on_move(pos);
        let result = match self.down_pos {
            None => ClickResult::None,
            Some(_) if self.exceeded => ClickResult::Drag,
            Some(_) => ClickResult::Click(pos),
        };
        self.cancel();
        result
    }

    /// Forgets the current press without producing a result.
    pub fn cancel(&mut self) {
        self.down_pos = None;
        self.exceeded = false;
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.down_pos.is_some()
    }

    /// Returns `true` once the current press has turned into a drag.
    #[must_use]
    pub fn is_drag(&self) -> bool {
        self.exceeded
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_SLOP)
    }
}
