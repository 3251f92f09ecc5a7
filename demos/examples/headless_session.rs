// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless map session.
//!
//! Loads an engine configuration and a fleet snapshot from JSON, then plays a
//! short scripted session: layout, hover, a click on a robot, a pan, a few
//! wheel ticks, the zoom buttons and some animation ticks. The page-side
//! selection is kept in the `robotId` query parameter.
//!
//! Run:
//! - `cargo run -p patrolmap_demos --example headless_session`
//! - `cargo run -p patrolmap_demos --example headless_session -- path/to/fleet.json`
//!
//! Set `RUST_LOG=debug` to see the engine's diagnostics.

use std::error::Error;

use kurbo::{Point, Size};
use patrolmap::{
    CaptureChange, EngineConfig, Entity, InputOutcome, MapEngine, MapEvent, MapInput,
};
use patrolmap_selection::SelectedEntity;
use tracing_subscriber::EnvFilter;

const ENGINE_JSON: &str = include_str!("../data/engine.json");
const FLEET_JSON: &str = include_str!("../data/fleet.json");

struct Page {
    query: String,
    selection: SelectedEntity,
    listeners_attached: bool,
}

impl Page {
    fn new(query: &str) -> Self {
        Self {
            query: query.trim_start_matches('?').to_owned(),
            selection: SelectedEntity::from_query(query),
            listeners_attached: false,
        }
    }

    fn apply(&mut self, outcome: &InputOutcome) {
        match outcome.capture {
            Some(CaptureChange::Acquire) => self.listeners_attached = true,
            Some(CaptureChange::Release) => self.listeners_attached = false,
            None => {}
        }
        if let Some(MapEvent::EntitySelected(id)) = &outcome.event
            && self.selection.select(id.as_str())
        {
            self.query = self.selection.to_query(&self.query);
            println!("  selected {id}: ?{}", self.query);
        }
    }
}

fn load_fleet() -> Result<Vec<Entity>, Box<dyn Error>> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => FLEET_JSON.to_owned(),
    };
    Ok(serde_json::from_str(&json)?)
}

fn print_status(map: &MapEngine) {
    let status = map.status();
    println!(
        "  zoom {}%  center ({:.1}, {:.1})  cell {}",
        status.zoom_percent,
        status.center.x,
        status.center.y,
        status.cell.as_deref().unwrap_or("-"),
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config: EngineConfig = serde_json::from_str(ENGINE_JSON)?;
    let mut map = MapEngine::new(config)?;
    let mut page = Page::new("?view=map&robotId=lite3-02");
    println!("initial selection: {:?}", page.selection.id());

    let fleet = load_fleet()?;
    map.set_container_size(Size::new(960.0, 640.0));
    map.set_entities(&fleet);
    println!(
        "{} entities received, {} on the map",
        fleet.len(),
        map.markers().len()
    );
    print_status(&map);

    // Stale selections are dropped once the fleet is known.
    page.selection.retain(|id| map.markers().iter().any(|m| m.id == id));

    println!("hover and click the robot at the world origin");
    let origin = map.state().local_to_view(map.viewport().frame().world_to_local(Point::ZERO));
    page.apply(&map.handle_input(MapInput::moved(origin)));
    println!("  cursor: {}", map.cursor().as_css());
    page.apply(&map.handle_input(MapInput::down(origin)));
    page.apply(&map.handle_input(MapInput::up(origin + (1.0, 1.0))));
    assert!(!page.listeners_attached);

    println!("pan by dragging");
    let start = Point::new(200.0, 200.0);
    page.apply(&map.handle_input(MapInput::down(start)));
    println!("  listeners attached: {}", page.listeners_attached);
    for step in 1..=5 {
        let pos = start + (f64::from(step) * 30.0, f64::from(step) * 12.0);
        page.apply(&map.handle_input(MapInput::moved(pos)));
    }
    page.apply(&map.handle_input(MapInput::up(start + (150.0, 60.0))));
    print_status(&map);

    println!("wheel zoom at the cursor");
    let cursor = Point::new(700.0, 200.0);
    for _ in 0..4 {
        page.apply(&map.handle_input(MapInput::wheel(cursor, -120.0)));
    }
    print_status(&map);

    println!("buttons");
    map.zoom_out();
    print_status(&map);
    map.fit_to_screen();
    print_status(&map);
    map.reset_view();
    print_status(&map);

    println!("keyboard activation");
    page.apply(&map.handle_input(MapInput::ActivateMarker("x30-01".into())));

    for now in (0..=1_000).step_by(250) {
        map.tick(now);
    }
    let frame = map.render();
    println!(
        "render: {} visible grid lines, {} labels, spin {:.0} deg",
        frame.visible_grid_lines().count(),
        frame.labels().len(),
        frame.spin_degrees
    );
    for marker in frame.markers {
        let pos = frame.marker_position(marker);
        let rgba = marker.color.to_rgba8();
        println!(
            "  {:<10} {:<18} at ({:>6.1}, {:>6.1}) rot {:>5.1} color #{:02x}{:02x}{:02x} {}",
            marker.id,
            marker.name.as_deref().unwrap_or("-"),
            pos.x,
            pos.y,
            frame.marker_rotation(marker),
            rgba.r,
            rgba.g,
            rgba.b,
            marker.status.as_str(),
        );
    }

    for robot in map.status().robots {
        println!(
            "  {} in {} ({})",
            robot.label,
            robot.cell.as_deref().unwrap_or("-"),
            robot.status.as_str()
        );
    }

    if let Some(release) = map.teardown() {
        page.apply(&InputOutcome {
            capture: Some(release),
            ..InputOutcome::default()
        });
    }
    println!("final query: ?{}", page.query);
    Ok(())
}
