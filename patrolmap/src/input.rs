// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use patrolmap_event_state::drag::CaptureChange;

/// Mouse button of a pointer press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button, pen contact or touch.
    #[default]
    Primary,
    /// Right button.
    Secondary,
    /// Middle button.
    Auxiliary,
}

/// Input delivered by the host, in container pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum MapInput {
    /// A button went down over the map.
    PointerDown {
        /// Pointer position.
        pos: Point,
        /// Which button.
        button: PointerButton,
    },
    /// The pointer moved, over the map or, while captured, anywhere.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// A button was released.
    PointerUp {
        /// Pointer position.
        pos: Point,
    },
    /// The pointer left the tracked area or the gesture was cancelled.
    PointerLeave,
    /// A wheel or trackpad scroll.
    Wheel {
        /// Pointer position.
        pos: Point,
        /// Vertical delta; positive scrolls down.
        delta_y: f64,
    },
    /// A marker was activated from the keyboard.
    ActivateMarker(String),
}

impl MapInput {
    /// Primary-button press at `pos`.
    #[must_use]
    pub fn down(pos: impl Into<Point>) -> Self {
        Self::PointerDown {
            pos: pos.into(),
            button: PointerButton::Primary,
        }
    }

    /// Pointer move to `pos`.
    #[must_use]
    pub fn moved(pos: impl Into<Point>) -> Self {
        Self::PointerMove { pos: pos.into() }
    }

    /// Release at `pos`.
    #[must_use]
    pub fn up(pos: impl Into<Point>) -> Self {
        Self::PointerUp { pos: pos.into() }
    }

    /// Wheel tick at `pos`.
    #[must_use]
    pub fn wheel(pos: impl Into<Point>, delta_y: f64) -> Self {
        Self::Wheel {
            pos: pos.into(),
            delta_y,
        }
    }
}

/// Event emitted to the surrounding page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapEvent {
    /// The user clicked or activated the marker with this entity id.
    EntitySelected(String),
}

/// What happened as a result of one [`MapInput`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputOutcome {
    /// Event for the page, if any.
    pub event: Option<MapEvent>,
    /// Change to the host's global pointer listeners, if any.
    pub capture: Option<CaptureChange>,
    /// Whether the host should render a new frame.
    pub redraw: bool,
}

impl InputOutcome {
    /// Nothing happened.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Only a redraw, if `redraw` is set.
    #[must_use]
    pub fn redraw(redraw: bool) -> Self {
        Self {
            redraw,
            ..Self::default()
        }
    }

    /// Returns `true` if the outcome carries nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event.is_none() && self.capture.is_none() && !self.redraw
    }
}
