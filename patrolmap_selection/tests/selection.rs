// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `patrolmap_selection` crate.
//!
//! These exercise how the selected id, the revision counter and the query
//! string interact.

use patrolmap_selection::SelectedEntity;

#[test]
fn empty_selection_basics() {
    let sel = SelectedEntity::new();
    assert!(sel.is_empty());
    assert_eq!(sel.id(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_bumps_revision_only_on_change() {
    let mut sel = SelectedEntity::new();
    assert!(sel.select("a"));
    assert_eq!(sel.revision(), 1);

    // No-op: selecting the same robot again.
    assert!(!sel.select("a"));
    assert_eq!(sel.revision(), 1);

    assert!(sel.select("b"));
    assert!(sel.is_selected("b"));
    assert!(!sel.is_selected("a"));
    assert_eq!(sel.revision(), 2);
}

#[test]
fn clear_and_toggle() {
    let mut sel = SelectedEntity::new();
    assert!(!sel.clear());
    assert_eq!(sel.revision(), 0);

    sel.toggle("a");
    assert_eq!(sel.id(), Some("a"));
    sel.toggle("a");
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);

    // An empty id is treated as a clear.
    sel.select("a");
    assert!(sel.select(""));
    assert!(sel.is_empty());
}

#[test]
fn retain_drops_vanished_entity() {
    let mut sel = SelectedEntity::new();
    sel.select("a");
    assert!(!sel.retain(|id| id == "a"));
    assert!(sel.retain(|_| false));
    assert!(sel.is_empty());
    assert!(!sel.retain(|_| false));
}

#[test]
fn query_round_trip_preserves_other_parameters() {
    let query = "?view=fleet&robotId=r%2F1&zoom=2";
    let mut sel = SelectedEntity::from_query(query);
    assert_eq!(sel.id(), Some("r/1"));
    assert_eq!(sel.revision(), 0);

    assert_eq!(sel.to_query(query), "view=fleet&robotId=r%2F1&zoom=2");

    sel.select("r-2");
    let written = sel.to_query(query);
    assert_eq!(written, "view=fleet&robotId=r-2&zoom=2");
    assert_eq!(SelectedEntity::from_query(&written).id(), Some("r-2"));

    sel.clear();
    assert_eq!(sel.to_query(query), "view=fleet&zoom=2");
}

#[test]
fn empty_query_value_is_no_selection() {
    assert!(SelectedEntity::from_query("robotId=").is_empty());
    assert!(SelectedEntity::from_query("").is_empty());

    let mut sel = SelectedEntity::new();
    sel.select("x");
    assert_eq!(sel.to_query(""), "robotId=x");
}
