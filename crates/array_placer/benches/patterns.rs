mod common;

use std::hint::black_box;

use array_placer::instancing::{InstanceSettings, JitterSettings};
use array_placer::pattern::{CircularPattern, GridPattern, LinearPattern, PatternGenerator};
use array_placer::placement::plan::PlacementRequest;
use array_placer::placement::runner::PlacementRunner;
use array_placer::random::SeededStream;
use array_placer::surface::{ConformanceMode, ConformanceSettings, PlaneSurface};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

const SIDES: [usize; 3] = [10, 100, 300];

fn patterns_generate_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns/generate");

    for &side in &SIDES {
        let count = side * side;
        group.throughput(common::elements_throughput(count));

        let grid = GridPattern::new(side, side, 1.5, 1.5).with_alternate_rows(true);
        group.bench_with_input(BenchmarkId::new("grid", count), &grid, |b, p| {
            b.iter(|| black_box(p.generate(&mut SeededStream::new(0)).len()));
        });

        let linear = LinearPattern::new(count, Vec3::new(0.5, 0.0, 0.25));
        group.bench_with_input(BenchmarkId::new("linear", count), &linear, |b, p| {
            b.iter(|| black_box(p.generate(&mut SeededStream::new(0)).len()));
        });

        let circular = CircularPattern::full_circle(count, 50.0).with_face_center(true);
        group.bench_with_input(BenchmarkId::new("circular", count), &circular, |b, p| {
            b.iter(|| black_box(p.generate(&mut SeededStream::new(0)).len()));
        });
    }

    group.finish();
}

fn patterns_runner_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns/runner");
    let ground = PlaneSurface::new("slope", Vec3::ZERO, Vec3::new(0.2, 1.0, 0.0));
    let runner = PlacementRunner::with_surface(&ground);

    for &side in &SIDES {
        let grid = GridPattern::new(side, side, 1.0, 1.0);
        let request = PlacementRequest::new(grid, common::prototypes())
            .with_seed(side as u64)
            .with_conformance(ConformanceSettings::new(ConformanceMode::AlignToSlope {
                max_angle_deg: 45.0,
            }))
            .with_instancing(
                InstanceSettings::default().with_jitter(
                    JitterSettings::default()
                        .with_rotation_deg(Vec3::new(0.0, 180.0, 0.0))
                        .with_scale(0.8, 1.2),
                ),
            );

        group.throughput(common::elements_throughput(side * side));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &request, |b, r| {
            b.iter(|| {
                let result = runner.run(r).expect("valid request");
                black_box(result.delivered());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = patterns_generate_benches, patterns_runner_benches
}
criterion_main!(benches);
