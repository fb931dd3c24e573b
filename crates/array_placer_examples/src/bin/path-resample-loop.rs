use array_placer::prelude::*;
use array_placer_examples::{
    init_tracing, render_descriptors_to_png, PrototypeStyle, RenderConfig,
};
use glam::{Vec2, Vec3};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A rounded racetrack outline.
    let track: Vec<Vec3> = (0..24)
        .map(|i| {
            let a = i as f32 / 24.0 * std::f32::consts::TAU;
            Vec3::new(a.cos() * 16.0, 0.0, a.sin() * 9.0)
        })
        .collect();

    let request = PlacementRequest::new(
        PathPattern::new(track, 2.0)
            .with_loop(true)
            .with_align_to_path(true),
        vec![Prototype::new("cone", "Cone")],
    )
    .with_seed(7)
    .with_instancing(
        InstanceSettings::default()
            .with_name_template("{name}.{index}")
            .with_scale_curve(ScaleCurve::new(vec![(0.0, 0.6), (0.5, 1.6), (1.0, 0.6)])),
    );

    let mut names = Vec::new();
    let mut sink = FnSink::new(|event| {
        if let PlacementEvent::InstanceCreated { descriptor } = event {
            names.push(descriptor.name);
        }
    });
    let result = PlacementRunner::new().run_with_events(&request, &mut sink)?;
    tracing::info!(
        "Placed {} cones along the loop ({} .. {}).",
        result.delivered(),
        names.first().map_or("-", String::as_str),
        names.last().map_or("-", String::as_str)
    );

    let mut config =
        RenderConfig::new((900, 600), Vec2::new(40.0, 26.0)).with_background([250, 250, 250]);
    config.set_prototype_style(
        "cone",
        PrototypeStyle::Heading {
            color: [230, 120, 20],
            radius: 4,
            length: 16,
        },
    );

    render_descriptors_to_png(&result.descriptors, &config, "path-resample-loop.png")
}
