// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patrol Map Event State: pointer gesture state for a pannable map.
//!
//! This crate provides two small state machines that together implement the
//! map's per-gesture behavior:
//!
//! - [`drag`]: Track a pan gesture's movement and tell the host when to attach
//!   and detach its global pointer listeners.
//! - [`click`]: Decide, on release, whether a press was a click (select the
//!   marker under the cursor) or a drag (never selects anything).
//!
//! The gesture lifecycle is:
//!
//! ```text
//! Idle --down--> Dragging --move*--> Dragging --up--> Idle
//!                                    \--leave--> Idle (cancelled, no click)
//! ```
//!
//! Neither type knows about viewports or markers; the map engine composes
//! them with its viewport and hit testing.
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
