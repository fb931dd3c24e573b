use array_placer::prelude::*;
use array_placer_examples::{
    init_tracing, render_descriptors_to_png, PrototypeStyle, RenderConfig,
};
use glam::{Vec2, Vec3};

/// Rolling hills; steep toward +X.
fn height(x: f32, z: f32) -> f32 {
    (x * 0.15).sin() * 3.0 + (z * 0.1).cos() * 2.0 + (x.max(0.0) * 0.12).powi(2)
}

fn normal(x: f32, z: f32) -> Vec3 {
    let e = 0.05;
    let dx = (height(x + e, z) - height(x - e, z)) / (2.0 * e);
    let dz = (height(x, z + e) - height(x, z - e)) / (2.0 * e);
    Vec3::new(-dx, 1.0, -dz).normalize()
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Ray-march stand-in for the host's raycast; the terrain has a hole near the origin.
    let terrain = FnSurface::new(|origin: Vec3, direction: Vec3, max: f32, _f: &SurfaceFilter| {
        if origin.x.hypot(origin.z) < 3.0 {
            return None;
        }
        let mut t = 0.0;
        while t <= max {
            let p = origin + direction * t;
            if p.y <= height(p.x, p.z) {
                let point = Vec3::new(p.x, height(p.x, p.z), p.z);
                return Some(SurfaceHit::new(point, normal(p.x, p.z)));
            }
            t += 0.25;
        }
        None
    });

    let request = PlacementRequest::new(
        RandomAreaPattern::new(24.0, 300).with_min_distance(2.0),
        vec![Prototype::new("pine", "Pine"), Prototype::new("fir", "Fir")],
    )
    .with_seed(2024)
    .with_conformance(
        ConformanceSettings::new(ConformanceMode::AlignToSlope {
            max_angle_deg: 35.0,
        })
        .with_probe_range(50.0, 50.0),
    )
    .with_instancing(
        InstanceSettings::default()
            .with_selection(PrototypeSelection::Random)
            .with_jitter(
                JitterSettings::default()
                    .with_rotation_deg(Vec3::new(0.0, 180.0, 0.0))
                    .with_scale(0.8, 1.3),
            ),
    );

    let result = PlacementRunner::with_surface(&terrain).run(&request)?;
    let steep = result
        .poses
        .iter()
        .filter(|p| (p.orientation * Vec3::Y).angle_between(Vec3::Y) > 1e-3)
        .count();
    tracing::info!(
        "Placed {} trees: {} tilted to the slope, {} probe misses.",
        result.delivered(),
        steep,
        result.surface_misses
    );

    let mut config =
        RenderConfig::new((800, 800), Vec2::new(52.0, 52.0)).with_background([215, 230, 200]);
    config
        .set_prototype_style(
            "pine",
            PrototypeStyle::Circle {
                color: [20, 90, 40],
                radius: 5,
            },
        )
        .set_prototype_style(
            "fir",
            PrototypeStyle::Circle {
                color: [50, 120, 70],
                radius: 5,
            },
        );

    render_descriptors_to_png(&result.descriptors, &config, "surface-slope-conformance.png")
}
