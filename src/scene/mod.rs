//! Resolution-independent display lists and their SVG serialisation.
//!
//! Builders combine layout geometry, palettes and measured text into a [`Scene`]; the scene is
//! the only thing the rasterizer sees.

/// Month-calendar scene builder.
pub mod calendar;
/// Primitive and scene types.
pub mod model;
/// Year-progress scene builder.
pub mod progress;
/// SVG serialisation.
pub mod svg;

pub use calendar::calendar_scene;
pub use model::{GlowFilter, Primitive, Scene, Stroke, TextRun};
pub use progress::progress_scene;
pub use svg::escape_xml;
