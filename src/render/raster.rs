use std::sync::Arc;

use usvg::fontdb;

use super::frame::FrameRGBA;
use crate::fonts::{FontSet, font_resolver};
use crate::foundation::error::{ChronosError, ChronosResult};
use crate::scene::Scene;

/// Turns a [`Scene`] into pixels.
pub trait Rasterizer: Send + Sync {
    /// Rasterize `scene` at its own resolution.
    fn rasterize(&self, scene: &Scene) -> ChronosResult<FrameRGBA>;
}

/// usvg/resvg rasterizer sharing one font database across renders.
#[derive(Clone)]
pub struct ResvgRasterizer {
    fontdb: Arc<fontdb::Database>,
    family: String,
}

impl std::fmt::Debug for ResvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResvgRasterizer")
            .field("family", &self.family)
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl ResvgRasterizer {
    /// Rasterizer using the faces of `fonts`.
    pub fn new(fonts: &FontSet) -> Self {
        Self {
            fontdb: fonts.database(),
            family: fonts.family().to_owned(),
        }
    }

    /// Rasterizer with an empty font database; text runs render nothing.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(fontdb::Database::new()),
            family: "sans-serif".to_owned(),
        }
    }

    /// Parse an SVG document with this rasterizer's fonts.
    pub fn parse(&self, svg: &str) -> ChronosResult<usvg::Tree> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: font_resolver(self.family.clone()),
            ..Default::default()
        };
        usvg::Tree::from_str(svg, &opts).map_err(|e| ChronosError::render(format!("parse svg: {e}")))
    }
}

impl Rasterizer for ResvgRasterizer {
    #[tracing::instrument(level = "debug", skip_all, fields(width = scene.width, height = scene.height, items = scene.items.len()))]
    fn rasterize(&self, scene: &Scene) -> ChronosResult<FrameRGBA> {
        let tree = self.parse(&scene.to_svg(&self.family))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(scene.width, scene.height).ok_or_else(|| {
            ChronosError::render(format!(
                "failed to allocate {}x{} pixmap",
                scene.width, scene.height
            ))
        })?;

        let sx = scene.width as f32 / tree.size().width();
        let sy = scene.height as f32 / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width: scene.width,
            height: scene.height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
