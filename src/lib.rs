//! Chronos renders calendar and year-progress wallpapers.
//!
//! Two layout families share one pipeline:
//!
//! - month calendars: twelve month panels with optional completed-day markers
//! - year progress: a 53x7 (or 7x53) day matrix with a themed date panel and a daily quote
//!
//! A validated [`RenderRequest`] is turned into a [`Scene`] (ordered vector primitives with
//! pre-measured text), serialised to SVG, rasterized with resvg and encoded as PNG by the
//! [`WallpaperEngine`]. The [`server`] module exposes the engine over HTTP.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Gregorian calendar arithmetic.
pub mod calendar;
/// Service configuration.
pub mod config;
/// Font discovery shared by measurement and rasterization.
pub mod fonts;
/// Layout geometry.
pub mod layout;
/// Daily quotes.
pub mod quotes;
/// Rasterization, PNG encoding and the render engine.
pub mod render;
/// Render requests and query parsing.
pub mod request;
/// Display lists and SVG output.
pub mod scene;
/// HTTP service.
pub mod server;
/// Colours and palettes.
pub mod style;
/// Text measurement and wrapping.
pub mod text;

pub use crate::config::ServiceConfig;
pub use crate::fonts::FontSet;
pub use crate::foundation::core::{Canvas, Point, Rect, Size};
pub use crate::foundation::error::{ChronosError, ChronosResult};
pub use crate::quotes::{Quote, QuoteBook, QuoteCache};
pub use crate::render::{FrameRGBA, Rasterizer, ResvgRasterizer, WallpaperEngine, encode_png};
pub use crate::request::model::{
    CalendarDevice, CalendarRequest, CompletedDays, ProgressDevice, ProgressRequest,
    RenderRequest, Shape,
};
pub use crate::scene::{Primitive, Scene};
pub use crate::style::theme::Theme;
