// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for viewport gestures and a full engine frame.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use patrolmap::{EngineConfig, Entity, MapEngine, MapInput};
use patrolmap_view2d::{MapConfig, Viewport};

fn laid_out() -> Viewport {
    let mut view = Viewport::new(&MapConfig::default());
    view.set_container_size(Size::new(1280.0, 720.0));
    view
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");

    group.bench_function("wheel_zoom_in_out", |b| {
        b.iter_batched(
            laid_out,
            |mut view| {
                for i in 0..32 {
                    let anchor = Point::new(40.0 * f64::from(i), 20.0 * f64::from(i));
                    view.zoom_wheel(if i % 2 == 0 { -1.0 } else { 1.0 }, anchor);
                }
                black_box(view.state());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("drag_100_moves", |b| {
        b.iter_batched(
            laid_out,
            |mut view| {
                view.begin_drag(Point::new(640.0, 360.0));
                for i in 0..100 {
                    let t = f64::from(i);
                    view.drag_to(Point::new(640.0 + t * 7.0, 360.0 - t * 3.0));
                }
                view.end_drag();
                black_box(view.state());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_engine_frame(c: &mut Criterion) {
    let mut map = MapEngine::new(EngineConfig::default()).unwrap();
    map.set_container_size(Size::new(1280.0, 720.0));
    let entities: Vec<Entity> = (0..64)
        .map(|i| {
            let t = f64::from(i);
            Entity::new(format!("r{i}"), Point::new(t * 10.0 - 320.0, 300.0 - t * 9.0), t * 5.0)
        })
        .collect();
    map.set_entities(&entities);

    c.bench_function("engine/hover_and_render", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 13.0) % 1280.0;
            map.handle_input(MapInput::moved((x, 360.0)));
            let frame = map.render();
            black_box(frame.visible_grid_lines().count() + frame.markers.len());
        });
    });
}

criterion_group!(benches, bench_gestures, bench_engine_frame);
criterion_main!(benches);
