// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven repeating timers.
//!
//! Nothing here sleeps or spawns. The host passes its own clock (milliseconds
//! from any monotonic origin) to [`RepeatingTimer::poll`] and gets back the
//! number of intervals that elapsed since the last poll.

/// A cancellable fixed-interval timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatingTimer {
    interval_ms: u64,
    next_due: Option<u64>,
}

impl RepeatingTimer {
    /// Creates a stopped timer. An interval of zero is treated as one.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due: None,
        }
    }

    /// Interval between ticks.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns `true` while the timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arms the timer so the first tick falls one interval after `now_ms`.
    ///
    /// Restarting a running timer re-phases it.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Disarms the timer. Returns `true` if it was running.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Number of ticks that fell due at or before `now_ms`.
    ///
    /// A stopped timer, or a clock that went backwards, yields zero.
    pub fn poll(&mut self, now_ms: u64) -> u64 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now_ms < due {
            return 0;
        }
        let ticks = (now_ms - due) / self.interval_ms + 1;
        self.next_due = Some(due.saturating_add(ticks.saturating_mul(self.interval_ms)));
        ticks
    }
}

/// The slow marker spin shown while the map is live.
///
/// The phase is kept apart from entity headings so marker projection stays a
/// pure function of the entity list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadingAnimation {
    timer: RepeatingTimer,
    degrees_per_tick: f64,
    phase: f64,
}

impl HeadingAnimation {
    /// Creates a stopped animation.
    #[must_use]
    pub fn new(interval_ms: u64, degrees_per_tick: f64) -> Self {
        Self {
            timer: RepeatingTimer::new(interval_ms),
            degrees_per_tick,
            phase: 0.0,
        }
    }

    /// Current extra rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub fn spin_degrees(&self) -> f64 {
        self.phase
    }

    /// Returns `true` while the animation is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Starts (or re-phases) the animation at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.timer.start(now_ms);
    }

    /// Stops the animation, keeping the current phase.
    pub fn stop(&mut self) -> bool {
        self.timer.stop()
    }

    /// Advances by however many ticks fell due. Returns `true` if the phase moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let ticks = self.timer.poll(now_ms);
        if ticks == 0 {
            return false;
        }
        let advance = ticks as f64 * self.degrees_per_tick;
        self.phase = (self.phase + advance).rem_euclid(360.0);
        true
    }
}
