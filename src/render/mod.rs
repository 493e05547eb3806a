//! Scene rasterization, PNG encoding and the end-to-end engine.

/// Request-to-PNG pipeline.
pub mod engine;
/// RGBA frame buffer.
pub mod frame;
/// PNG encoding.
pub mod png;
/// Scene rasterizers.
pub mod raster;

pub use engine::WallpaperEngine;
pub use frame::FrameRGBA;
pub use png::encode_png;
pub use raster::{Rasterizer, ResvgRasterizer};
