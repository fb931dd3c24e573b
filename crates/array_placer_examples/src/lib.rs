#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_descriptors_to_png, PrototypeStyle, RenderConfig};
