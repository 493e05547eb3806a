use std::borrow::Cow;

use serde::Serialize;

use crate::fonts::FontSet;
use crate::foundation::error::{ChronosError, ChronosResult};

/// Weight of a text run. Only the two faces the layouts use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FontWeight {
    /// 400.
    #[default]
    Regular,
    /// 700.
    Bold,
}

impl FontWeight {
    /// CSS numeric weight.
    pub const fn css_value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Bold => 700,
        }
    }
}

/// Horizontal anchoring of a text run relative to its reference x.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Anchor {
    /// Reference x is the left edge.
    #[default]
    Start,
    /// Reference x is the centre.
    Middle,
    /// Reference x is the right edge.
    End,
}

/// Advance-width oracle for a fixed font family.
pub trait TextMeasure {
    /// Advance width of `text` set at `font_size` pixels.
    fn measure(&mut self, text: &str, font_size: f64, weight: FontWeight) -> f64;
}

/// Left edge that places `text` at `x` under `anchor`.
pub fn anchored_x(
    measure: &mut dyn TextMeasure,
    text: &str,
    x: f64,
    font_size: f64,
    weight: FontWeight,
    anchor: Anchor,
) -> f64 {
    match anchor {
        Anchor::Start => x,
        Anchor::Middle => x - measure.measure(text, font_size, weight) / 2.0,
        Anchor::End => x - measure.measure(text, font_size, weight),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MeasureBrush;

/// Parley shaping contexts bound to one [`FontSet`].
///
/// Holds mutable shaping caches, so each render builds its own instance.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
    family: String,
}

impl ParleyMeasure {
    /// Register every face of `fonts` with a fresh Parley font context.
    pub fn new(fonts: &FontSet) -> ChronosResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut family = None;
        for face in fonts.faces() {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(face.to_vec()), None);
            if family.is_none() {
                family = families
                    .first()
                    .and_then(|(id, _)| font_ctx.collection.family_name(*id))
                    .map(str::to_owned);
            }
        }
        let family = family
            .ok_or_else(|| ChronosError::resource_missing("no font families registered"))?;

        tracing::debug!(family = %family, faces = fonts.faces().len(), "text measure ready");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    /// Family name Parley resolved for the registered faces.
    pub fn family(&self) -> &str {
        &self.family
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure(&mut self, text: &str, font_size: f64, weight: FontWeight) -> f64 {
        if text.is_empty() || !font_size.is_finite() || font_size <= 0.0 {
            return 0.0;
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size as f32));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(weight.css_value())),
        ));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
            .lines()
            .map(|line| f64::from(line.metrics().advance))
            .fold(0.0, f64::max)
    }
}

/// Deterministic stand-in: every char advances `em * font_size`, bold 10% wider.
#[cfg(test)]
pub(crate) struct FixedAdvance {
    pub(crate) em: f64,
}

#[cfg(test)]
impl FixedAdvance {
    pub(crate) fn new() -> Self {
        Self { em: 0.5 }
    }
}

#[cfg(test)]
impl TextMeasure for FixedAdvance {
    fn measure(&mut self, text: &str, font_size: f64, weight: FontWeight) -> f64 {
        let scale = match weight {
            FontWeight::Regular => 1.0,
            FontWeight::Bold => 1.1,
        };
        text.chars().count() as f64 * self.em * font_size * scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
