// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patrol Map Selection: which robot the page is looking at.
//!
//! The map itself never owns the selection. It reports clicks as
//! `EntitySelected(id)` events and the surrounding page decides what to do.
//! This crate provides the page-side bookkeeping:
//!
//! - [`SelectedEntity`] holds at most one selected entity id plus a
//!   **revision** counter that bumps only when the selection actually changes.
//! - [`SelectedEntity::from_query`] and [`SelectedEntity::to_query`] round-trip
//!   the selection through the `robotId` URL query parameter so a selection
//!   survives reloads and can be shared as a link. Other parameters are left
//!   untouched and keep their order.
//!
//! ## Minimal example
//!
//! ```rust
//! use patrolmap_selection::SelectedEntity;
//!
//! let mut selected = SelectedEntity::from_query("?tab=map&robotId=r-7");
//! assert_eq!(selected.id(), Some("r-7"));
//!
//! // A click on another robot.
//! assert!(selected.select("r-9"));
//! assert_eq!(selected.to_query("tab=map&robotId=r-7"), "tab=map&robotId=r-9");
//!
//! // Clicking the same robot again is not a change.
//! assert!(!selected.select("r-9"));
//!
//! selected.clear();
//! assert_eq!(selected.to_query("tab=map&robotId=r-9"), "tab=map");
//! ```

mod query;

pub use query::{QUERY_KEY, query_value};

/// The currently selected entity, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedEntity {
    id: Option<String>,
    revision: u64,
}

impl SelectedEntity {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            id: None,
            revision: 0,
        }
    }

    /// Reads the selection from a query string (with or without a leading `?`).
    ///
    /// A missing or empty `robotId` yields an empty selection.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self {
            id: query_value(query, QUERY_KEY).filter(|id| !id.is_empty()),
            revision: 0,
        }
    }

    /// Writes the selection into `query`, returning the new query string.
    ///
    /// An existing `robotId` is replaced in place, or removed when nothing is
    /// selected; otherwise the parameter is appended. The result has no
    /// leading `?`.
    #[must_use]
    pub fn to_query(&self, query: &str) -> String {
        query::with_value(query, QUERY_KEY, self.id.as_deref())
    }

    /// The selected id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns `true` if `id` is the selected entity.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    /// Monotonic change counter.
    ///
    /// No-op calls, like selecting the already selected entity, leave it
    /// unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects `id`, replacing any previous selection.
    ///
    /// Returns `true` if the selection changed. An empty id clears.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id.is_empty() {
            return self.clear();
        }
        if self.is_selected(&id) {
            return false;
        }
        self.id = Some(id);
        self.bump_revision();
        true
    }

    /// Selects `id`, or clears if it is already selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.clear()
        } else {
            self.select(id)
        }
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        if self.id.take().is_none() {
            return false;
        }
        self.bump_revision();
        true
    }

    /// Drops the selection if `present` says the entity is gone.
    pub fn retain(&mut self, present: impl FnOnce(&str) -> bool) -> bool {
        match self.id.as_deref() {
            Some(id) if !present(id) => self.clear(),
            _ => false,
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
