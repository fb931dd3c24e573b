mod common;

use std::hint::black_box;

use array_placer::random::SeededStream;
use array_placer::sampling::{
    DiskDistribution, DiskSampling, PoissonDiskSampling, Polyline, UniformDiskSampling,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

const RADIUS: f32 = 64.0;
const MIN_DISTANCES: [f32; 4] = [8.0, 4.0, 2.0, 1.0];
const COUNTS: [usize; 3] = [100, 1_000, 10_000];

fn sampling_poisson_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/poisson_disk");

    for &min_distance in &MIN_DISTANCES {
        let sampler = PoissonDiskSampling::new(min_distance);
        let count = 4_000;
        let expected = sampler
            .generate(RADIUS, count, &mut SeededStream::new(0xBEEF))
            .len();
        group.throughput(common::elements_throughput(expected));

        let mut rng = SeededStream::new(0xC0FFEE ^ min_distance.to_bits() as u64);
        group.bench_with_input(
            BenchmarkId::from_parameter(min_distance),
            &min_distance,
            |b, _| {
                b.iter(|| {
                    let pts = sampler.generate(RADIUS, count, &mut rng);
                    black_box(pts.len());
                });
            },
        );
    }

    group.finish();
}

fn sampling_uniform_disk_benches(c: &mut Criterion) {
    for distribution in [DiskDistribution::PolarUniform, DiskDistribution::AreaUniform] {
        let mut group = c.benchmark_group(format!("sampling/uniform_disk/{distribution:?}"));
        let sampler = UniformDiskSampling::new(distribution);

        for &count in &COUNTS {
            group.throughput(common::elements_throughput(count));
            let mut rng = SeededStream::new(0xA11CE ^ count as u64);
            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
                b.iter(|| {
                    let pts = sampler.generate(RADIUS, n, &mut rng);
                    black_box(pts.len());
                });
            });
        }

        group.finish();
    }
}

fn sampling_path_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/path_resample");

    // Zig-zag with many short segments so the arc-length lookup dominates.
    let points: Vec<Vec3> = (0..512)
        .map(|i| Vec3::new(i as f32, 0.0, if i % 2 == 0 { 0.0 } else { 3.0 }))
        .collect();
    let path = Polyline::new(points).with_loop(true);

    for spacing in [4.0_f32, 1.0, 0.25] {
        let expected = path.resample(spacing, true).len();
        group.throughput(common::elements_throughput(expected));
        group.bench_with_input(BenchmarkId::from_parameter(spacing), &spacing, |b, &s| {
            b.iter(|| {
                let samples = path.resample(s, true);
                black_box(samples.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_poisson_benches, sampling_uniform_disk_benches, sampling_path_benches
}
criterion_main!(benches);
