// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for marker projection, hit testing and grid generation.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use patrolmap_grid::{GridLayer, GridSpec};
use patrolmap_markers::{Entity, HitParams, hit_test, project_markers};
use patrolmap_view2d::{MapConfig, RosFrame};

fn fleet(len: usize, size: f64) -> Vec<Entity> {
    let half = size * 0.5;
    // Deterministic scatter over the world.
    let mut seed = 0x2545_f491_u64;
    (0..len)
        .map(|i| {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let x = (seed >> 11) as f64 / (1_u64 << 53) as f64 * size - half;
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let y = (seed >> 11) as f64 / (1_u64 << 53) as f64 * size - half;
            let mut entity = Entity::new(format!("robot-{i}"), Point::new(x, y), (i * 37) as f64);
            if i % 3 == 0 {
                entity = entity.with_color("#33cc99");
            }
            entity
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("markers/project");
    let config = MapConfig::default();
    let frame = RosFrame::new(config.size);
    for len in [16_usize, 128, 1_024] {
        let entities = fleet(len, config.size);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &entities, |b, entities| {
            b.iter(|| black_box(project_markers(&frame, black_box(entities))));
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("markers/hit_test");
    let config = MapConfig::default();
    let frame = RosFrame::new(config.size);
    let params = HitParams::default();
    for len in [16_usize, 128, 1_024] {
        let markers = project_markers(&frame, &fleet(len, config.size));
        let probe = markers[len / 2].local + (3.0, -2.0);
        group.bench_with_input(BenchmarkId::from_parameter(len), &markers, |b, markers| {
            b.iter(|| black_box(hit_test(markers, black_box(probe), &params).map(|h| h.index)));
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/build");
    for config in [MapConfig::default(), MapConfig::legacy()] {
        let spec = GridSpec::from(&config);
        group.bench_with_input(
            BenchmarkId::from_parameter(config.size),
            &spec,
            |b, spec| b.iter(|| black_box(GridLayer::build(spec))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_project, bench_hit_test, bench_grid);
criterion_main!(benches);
