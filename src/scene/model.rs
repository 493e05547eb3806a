use serde::Serialize;

use crate::foundation::core::{Canvas, Point, Rect};
use crate::request::model::Shape;
use crate::style::color::Color;
use crate::text::metrics::FontWeight;

/// Gaussian glow referenced by highlighted shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlowFilter {
    /// Blur standard deviation in pixels.
    pub std_dev: f64,
}

/// Outline paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    /// Stroke colour.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

/// A single text run positioned by its left edge and baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// Left edge, anchoring already resolved.
    pub x: f64,
    /// Baseline y.
    pub baseline_y: f64,
    /// Content.
    pub text: String,
    /// Font size in pixels.
    pub size: f64,
    /// Font weight.
    pub weight: FontWeight,
    /// Fill colour.
    pub fill: Color,
    /// Extra opacity in `[0, 1]`.
    pub opacity: f64,
}

/// One drawing command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Axis-aligned rectangle, rounded when `rx > 0`.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        rx: f64,
        /// Fill colour.
        fill: Color,
        /// Optional outline.
        stroke: Option<Stroke>,
        /// Extra opacity in `[0, 1]`.
        opacity: f64,
        /// Whether the scene glow filter applies.
        glow: bool,
    },
    /// Circle.
    Circle {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill colour.
        fill: Color,
        /// Optional outline.
        stroke: Option<Stroke>,
        /// Whether the scene glow filter applies.
        glow: bool,
    },
    /// Text run.
    Text(TextRun),
}

impl Primitive {
    /// Opaque filled rectangle.
    pub fn fill_rect(rect: Rect, fill: Color) -> Self {
        Self::Rect {
            rect,
            rx: 0.0,
            fill,
            stroke: None,
            opacity: 1.0,
            glow: false,
        }
    }

    /// Pill: rectangle whose corner radius is half its height.
    pub fn pill(rect: Rect, fill: Color) -> Self {
        Self::Rect {
            rect,
            rx: rect.height() / 2.0,
            fill,
            stroke: None,
            opacity: 1.0,
            glow: false,
        }
    }

    /// Day marker filling `cell` in the given shape.
    ///
    /// `rounding` is the corner radius as a fraction of the cell's shorter side, used by
    /// [`Shape::Rounded`] only.
    pub fn cell(shape: Shape, cell: Rect, rounding: f64, fill: Color, stroke: Option<Stroke>) -> Self {
        let min_side = cell.width().min(cell.height());
        match shape {
            Shape::Circle => Self::Circle {
                center: cell.center(),
                radius: min_side / 2.0,
                fill,
                stroke,
                glow: false,
            },
            Shape::Square | Shape::Rounded => Self::Rect {
                rect: cell,
                rx: if shape == Shape::Rounded {
                    min_side * rounding
                } else {
                    0.0
                },
                fill,
                stroke,
                opacity: 1.0,
                glow: false,
            },
        }
    }

    /// Same primitive with the glow filter enabled.
    pub fn with_glow(mut self) -> Self {
        match &mut self {
            Self::Rect { glow, .. } | Self::Circle { glow, .. } => *glow = true,
            Self::Text(_) => {}
        }
        self
    }

    /// Whether the glow filter applies.
    pub fn glows(&self) -> bool {
        matches!(self, Self::Rect { glow: true, .. } | Self::Circle { glow: true, .. })
    }

    /// Fill colour.
    pub fn fill(&self) -> Color {
        match self {
            Self::Rect { fill, .. } | Self::Circle { fill, .. } => *fill,
            Self::Text(run) => run.fill,
        }
    }

    /// The text run, if this is text.
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Self::Text(run) => Some(run),
            _ => None,
        }
    }
}

/// Ordered display list for one wallpaper; later items paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Filter definition shared by every glowing primitive.
    pub glow: Option<GlowFilter>,
    /// Primitives in paint order.
    pub items: Vec<Primitive>,
}

impl Scene {
    /// Empty scene painted with `background`.
    pub fn new(canvas: Canvas, background: Color) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            glow: None,
            items: vec![Primitive::fill_rect(canvas.bounds(), background)],
        }
    }

    /// Canvas of this scene.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Append one primitive.
    pub fn push(&mut self, item: Primitive) {
        self.items.push(item);
    }

    /// Append a text run.
    pub fn push_text(&mut self, run: TextRun) {
        self.items.push(Primitive::Text(run));
    }

    /// Text runs in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.items.iter().filter_map(Primitive::as_text)
    }
}
