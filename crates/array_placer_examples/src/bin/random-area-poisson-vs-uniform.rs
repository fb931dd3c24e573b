use array_placer::prelude::*;
use array_placer_examples::{
    init_tracing, render_descriptors_to_png, PrototypeStyle, RenderConfig,
};
use glam::{Vec2, Vec3};

const RADIUS: f32 = 18.0;
const COUNT: usize = 400;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let runner = PlacementRunner::new();
    let rock = || vec![Prototype::new("rock", "Rock")];

    // Same seed and count; only the separation rule differs.
    let poisson = PlacementRequest::new(
        RandomAreaPattern::new(RADIUS, COUNT)
            .with_center(Vec3::new(-20.0, 0.0, 0.0))
            .with_min_distance(1.6),
        rock(),
    )
    .with_seed(42);

    let uniform = PlacementRequest::new(
        RandomAreaPattern::new(RADIUS, COUNT).with_center(Vec3::new(20.0, 0.0, 0.0)),
        rock(),
    )
    .with_seed(42);

    let area_uniform = PlacementRequest::new(
        RandomAreaPattern::new(RADIUS, COUNT)
            .with_center(Vec3::new(0.0, 0.0, 40.0))
            .with_distribution(DiskDistribution::AreaUniform),
        rock(),
    )
    .with_seed(42);

    let mut sink = VecSink::only(&[PlacementEventKind::UnderDelivered]);
    let poisson = runner.run_with_events(&poisson, &mut sink)?;
    for event in sink.as_slice() {
        if let PlacementEvent::UnderDelivered {
            requested,
            delivered,
        } = event
        {
            tracing::info!(
                "Poisson disk fit {} of {} requested rocks.",
                delivered,
                requested
            );
        }
    }

    let mut descriptors = poisson.descriptors;
    descriptors.extend(runner.run(&uniform)?.descriptors);
    descriptors.extend(runner.run(&area_uniform)?.descriptors);

    let mut config = RenderConfig::new((1000, 1000), Vec2::new(84.0, 84.0))
        .with_center(Vec2::new(0.0, 18.0))
        .with_background([245, 240, 230]);
    config.set_prototype_style(
        "rock",
        PrototypeStyle::Circle {
            color: [90, 90, 90],
            radius: 3,
        },
    );

    render_descriptors_to_png(&descriptors, &config, "random-area-poisson-vs-uniform.png")
}
