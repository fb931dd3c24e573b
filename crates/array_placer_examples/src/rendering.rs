use std::collections::HashMap;
use std::path::Path;

use array_placer::instancing::InstanceDescriptor;
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How instances of one prototype are drawn.
#[derive(Debug, Clone, Copy)]
pub enum PrototypeStyle {
    /// Filled disk whose radius grows with the instance's horizontal scale.
    Circle { color: [u8; 3], radius: u32 },
    /// Disk plus a tick along the projected forward axis.
    Heading {
        color: [u8; 3],
        radius: u32,
        length: u32,
    },
}

impl Default for PrototypeStyle {
    fn default() -> Self {
        PrototypeStyle::Circle {
            color: [40, 40, 40],
            radius: 4,
        }
    }
}

/// Top-down (XZ) render settings. The view is centered on `center`.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub view_extent: Vec2,
    pub center: Vec2,
    pub background: [u8; 3],
    styles: HashMap<String, PrototypeStyle>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view_extent: Vec2) -> Self {
        Self {
            image_size,
            view_extent,
            center: Vec2::ZERO,
            background: [255, 255, 255],
            styles: HashMap::new(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn set_prototype_style(
        &mut self,
        prototype_id: impl Into<String>,
        style: PrototypeStyle,
    ) -> &mut Self {
        self.styles.insert(prototype_id.into(), style);
        self
    }

    fn style_for(&self, prototype_id: &str) -> PrototypeStyle {
        self.styles.get(prototype_id).copied().unwrap_or_default()
    }

    fn to_pixel(&self, world: Vec2) -> Vec2 {
        let (w, h) = self.image_size;
        let rel = (world - self.center) / self.view_extent + Vec2::splat(0.5);
        Vec2::new(rel.x * w as f32, rel.y * h as f32)
    }
}

/// Render `descriptors` to a PNG at `out`.
pub fn render_descriptors_to_png(
    descriptors: &[InstanceDescriptor],
    config: &RenderConfig,
    out: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for d in descriptors {
        let center = config.to_pixel(Vec2::new(d.position.x, d.position.z));
        let scale = d.scale.x.max(d.scale.z).max(0.1);
        match config.style_for(&d.source_prototype_id) {
            PrototypeStyle::Circle { color, radius } => {
                fill_circle(&mut img, center, radius as f32 * scale, color);
            }
            PrototypeStyle::Heading {
                color,
                radius,
                length,
            } => {
                fill_circle(&mut img, center, radius as f32 * scale, color);
                let forward = d.orientation * Vec3::Z;
                if let Some(dir) = Vec2::new(forward.x, forward.z).try_normalize() {
                    draw_line(&mut img, center, center + dir * length as f32, color);
                }
            }
        }
    }

    img.save(out.as_ref())?;
    tracing::info!(
        "Rendered {} instances to {}.",
        descriptors.len(),
        out.as_ref().display()
    );
    Ok(())
}

fn fill_circle(img: &mut RgbImage, center: Vec2, radius: f32, color: [u8; 3]) {
    let r = radius.max(1.0);
    let (w, h) = img.dimensions();
    let min_x = (center.x - r).floor().max(0.0) as u32;
    let min_y = (center.y - r).floor().max(0.0) as u32;
    let max_x = ((center.x + r).ceil().max(0.0) as u32).min(w);
    let max_y = ((center.y + r).ceil().max(0.0) as u32).min(h);
    for y in min_y..max_y {
        for x in min_x..max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= r * r {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
}

fn draw_line(img: &mut RgbImage, from: Vec2, to: Vec2, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    let steps = from.distance(to).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let p = from.lerp(to, i as f32 / steps as f32);
        if p.x >= 0.0 && p.y >= 0.0 && (p.x as u32) < w && (p.y as u32) < h {
            img.put_pixel(p.x as u32, p.y as u32, Rgb(color));
        }
    }
}
