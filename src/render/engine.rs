use std::sync::Arc;

use super::frame::FrameRGBA;
use super::png::encode_png;
use super::raster::{Rasterizer, ResvgRasterizer};
use crate::fonts::FontSet;
use crate::foundation::error::ChronosResult;
use crate::quotes::QuoteCache;
use crate::request::model::RenderRequest;
use crate::scene::{Scene, calendar_scene, progress_scene};
use crate::text::metrics::{ParleyMeasure, TextMeasure};

/// Request-to-PNG pipeline.
///
/// Holds only shared read-only state plus the quote cache, so one instance serves concurrent
/// renders behind an `Arc`. Every call builds its own text shaper.
pub struct WallpaperEngine {
    fonts: FontSet,
    rasterizer: Box<dyn Rasterizer>,
    quotes: Arc<QuoteCache>,
}

impl std::fmt::Debug for WallpaperEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallpaperEngine")
            .field("fonts", &self.fonts)
            .field("quotes", &self.quotes)
            .finish_non_exhaustive()
    }
}

impl WallpaperEngine {
    /// Engine rasterizing with resvg over `fonts`.
    pub fn new(fonts: FontSet, quotes: Arc<QuoteCache>) -> Self {
        let rasterizer = Box::new(ResvgRasterizer::new(&fonts));
        Self::with_rasterizer(fonts, rasterizer, quotes)
    }

    /// Engine with a custom rasterizer.
    pub fn with_rasterizer(
        fonts: FontSet,
        rasterizer: Box<dyn Rasterizer>,
        quotes: Arc<QuoteCache>,
    ) -> Self {
        Self {
            fonts,
            rasterizer,
            quotes,
        }
    }

    /// Fonts used for measurement and rasterization.
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Shared quote cache.
    pub fn quotes(&self) -> &QuoteCache {
        &self.quotes
    }

    /// Scene for `req`, measured with a fresh Parley shaper.
    pub fn build_scene(&self, req: &RenderRequest) -> ChronosResult<Scene> {
        let mut measure = ParleyMeasure::new(&self.fonts)?;
        Ok(self.build_scene_with(req, &mut measure))
    }

    /// Scene for `req` using the given measurer.
    pub fn build_scene_with(&self, req: &RenderRequest, measure: &mut dyn TextMeasure) -> Scene {
        match req {
            RenderRequest::Calendar(req) => calendar_scene(req, measure),
            RenderRequest::Progress(req) => {
                let quote = self.quotes.quote_for_day(req.day_of_year);
                progress_scene(req, &quote, measure)
            }
        }
    }

    /// Standalone SVG document for `req`.
    pub fn generate_svg(&self, req: &RenderRequest) -> ChronosResult<String> {
        Ok(self.build_scene(req)?.to_svg(self.fonts.family()))
    }

    /// Rasterized frame for `req`.
    pub fn render(&self, req: &RenderRequest) -> ChronosResult<FrameRGBA> {
        let scene = self.build_scene(req)?;
        self.rasterizer.rasterize(&scene)
    }

    /// PNG bytes for `req` at its fixed resolution.
    #[tracing::instrument(level = "info", skip_all, fields(file = %req.file_name()))]
    pub fn generate(&self, req: &RenderRequest) -> ChronosResult<Vec<u8>> {
        let started = std::time::Instant::now();
        let png = encode_png(self.render(req)?)?;
        tracing::info!(
            bytes = png.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "wallpaper generated"
        );
        Ok(png)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/engine.rs"]
mod tests;
