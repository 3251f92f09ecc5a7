// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live fleet updates.
//!
//! Simulates a push subscription: each message carries one robot update,
//! which is merged into a `Fleet`. The engine only re-projects when the
//! fleet revision changes.
//!
//! Run:
//! - `cargo run -p patrolmap_demos --example fleet_stream`

use std::error::Error;

use kurbo::Size;
use patrolmap::{EngineConfig, Entity, Fleet, MapEngine};
use tracing_subscriber::EnvFilter;

const MESSAGES: &[&str] = &[
    r#"{ "id": "lite3-01", "position": { "x": 0, "y": 0 }, "heading": 0, "status": "patrol" }"#,
    r#"{ "id": "lite3-02", "position": { "x": 100, "y": 250 }, "heading": 45, "status": "idle" }"#,
    r#"{ "id": "lite3-01", "position": { "x": 20, "y": 5 }, "heading": 10, "status": "patrol" }"#,
    r#"{ "id": "lite3-01", "position": { "x": 20, "y": 5 }, "heading": 10, "status": "patrol" }"#,
    r#"{ "id": "lite3-03", "position": { "x": "bad" } }"#,
    r#"{ "id": "lite3-02", "position": { "x": 140, "y": 260 }, "heading": 60, "status": "error" }"#,
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut map = MapEngine::new(EngineConfig::default())?;
    map.set_container_size(Size::new(800.0, 600.0));

    let mut fleet = Fleet::new();
    let mut seen_revision = fleet.revision();

    for (n, message) in MESSAGES.iter().enumerate() {
        let update: Entity = match serde_json::from_str(message) {
            Ok(update) => update,
            Err(err) => {
                tracing::warn!(message = n, error = %err, "dropping malformed update");
                continue;
            }
        };
        fleet.upsert(update);
        if fleet.revision() == seen_revision {
            println!("#{n}: no change");
            continue;
        }
        seen_revision = fleet.revision();
        map.set_entities(fleet.entities());
        let order: Vec<&str> = map.markers().iter().map(|m| m.id.as_str()).collect();
        println!("#{n}: revision {seen_revision}, draw order {order:?}");
    }

    let status = map.status();
    let [active, idle, fault, unknown] = status.counts();
    println!("active {active}, idle {idle}, fault {fault}, unknown {unknown}");
    Ok(())
}
