use array_placer::prelude::*;
use array_placer_examples::{
    init_tracing, render_descriptors_to_png, PrototypeStyle, RenderConfig,
};
use glam::{Quat, Vec2, Vec3};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let runner = PlacementRunner::new();

    let fence = PlacementRequest::new(
        LinearPattern::new(12, Vec3::new(2.0, 0.0, 0.0))
            .with_origin(Vec3::new(-12.0, 0.0, -16.0))
            .with_local_axes(Quat::from_rotation_y(-0.2)),
        vec![Prototype::new("post", "FencePost")],
    );

    let ring = PlacementRequest::new(
        CircularPattern::full_circle(16, 8.0)
            .with_center(Vec3::new(-8.0, 0.0, 6.0))
            .with_face_center(true),
        vec![Prototype::new("bench", "Bench")],
    );

    let orchard = PlacementRequest::new(
        GridPattern::new(6, 5, 2.5, 2.5)
            .with_origin(Vec3::new(6.0, 0.0, 0.0))
            .with_alternate_rows(true),
        vec![Prototype::new("tree", "AppleTree"), Prototype::new("bush", "Bush")],
    );

    let mut descriptors = Vec::new();
    for request in [&fence, &ring, &orchard] {
        let result = runner.run(request)?;
        descriptors.extend(result.descriptors);
    }

    render(&descriptors)?;
    Ok(())
}

fn render(descriptors: &[InstanceDescriptor]) -> anyhow::Result<()> {
    let mut config =
        RenderConfig::new((800, 800), Vec2::new(40.0, 40.0)).with_background([235, 235, 225]);
    config
        .set_prototype_style(
            "post",
            PrototypeStyle::Circle {
                color: [110, 80, 50],
                radius: 4,
            },
        )
        .set_prototype_style(
            "bench",
            PrototypeStyle::Heading {
                color: [60, 60, 160],
                radius: 5,
                length: 14,
            },
        )
        .set_prototype_style(
            "tree",
            PrototypeStyle::Circle {
                color: [40, 130, 40],
                radius: 8,
            },
        )
        .set_prototype_style(
            "bush",
            PrototypeStyle::Circle {
                color: [120, 180, 80],
                radius: 5,
            },
        );

    render_descriptors_to_png(descriptors, &config, "patterns-linear-circular-grid.png")
}
