use std::fmt::{self, Write as _};

use super::model::{Primitive, Scene, Stroke, TextRun};
use crate::style::color::Color;

/// Id of the shared glow filter in `<defs>`.
pub const GLOW_FILTER_ID: &str = "glow";

impl Scene {
    /// Serialise to a standalone SVG 1.1 document.
    ///
    /// Text runs are emitted with `font-family` set to `font_family` and no `text-anchor`, since
    /// every run already carries its resolved left edge.
    pub fn to_svg(&self, font_family: &str) -> String {
        let mut out = String::with_capacity(64 * self.items.len() + 256);
        match self.write_svg(&mut out, font_family) {
            Ok(()) => out,
            // Writing into a String cannot fail.
            Err(fmt::Error) => String::new(),
        }
    }

    fn write_svg(&self, out: &mut String, font_family: &str) -> fmt::Result {
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        )?;

        if let Some(glow) = self.glow {
            write!(
                out,
                r#"<defs><filter id="{GLOW_FILTER_ID}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter></defs>"#,
                num(glow.std_dev)
            )?;
        }

        let family = escape_xml(font_family);
        for item in &self.items {
            match item {
                Primitive::Rect {
                    rect,
                    rx,
                    fill,
                    stroke,
                    opacity,
                    glow,
                } => {
                    write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        num(rect.x0),
                        num(rect.y0),
                        num(rect.width()),
                        num(rect.height())
                    )?;
                    if *rx > 0.0 {
                        write!(out, r#" rx="{}""#, num(*rx))?;
                    }
                    write_paint(out, *fill, *stroke, *opacity)?;
                    self.write_glow(out, *glow)?;
                    out.push_str("/>");
                }
                Primitive::Circle {
                    center,
                    radius,
                    fill,
                    stroke,
                    glow,
                } => {
                    write!(
                        out,
                        r#"<circle cx="{}" cy="{}" r="{}""#,
                        num(center.x),
                        num(center.y),
                        num(*radius)
                    )?;
                    write_paint(out, *fill, *stroke, 1.0)?;
                    self.write_glow(out, *glow)?;
                    out.push_str("/>");
                }
                Primitive::Text(run) => write_text(out, run, &family)?,
            }
        }

        out.push_str("</svg>");
        Ok(())
    }

    fn write_glow(&self, out: &mut String, glow: bool) -> fmt::Result {
        if glow && self.glow.is_some() {
            write!(out, r#" filter="url(#{GLOW_FILTER_ID})""#)?;
        }
        Ok(())
    }
}

fn write_paint(out: &mut String, fill: Color, stroke: Option<Stroke>, opacity: f64) -> fmt::Result {
    write!(out, r#" fill="{}""#, fill.to_svg_hex())?;
    if fill.a < 255 {
        write!(out, r#" fill-opacity="{}""#, num(fill.opacity()))?;
    }
    if let Some(stroke) = stroke {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_svg_hex(),
            num(stroke.width)
        )?;
    }
    if opacity < 1.0 {
        write!(out, r#" opacity="{}""#, num(opacity.max(0.0)))?;
    }
    Ok(())
}

fn write_text(out: &mut String, run: &TextRun, family: &str) -> fmt::Result {
    write!(
        out,
        r#"<text x="{}" y="{}" font-family="{family}" font-size="{}" font-weight="{}""#,
        num(run.x),
        num(run.baseline_y),
        num(run.size),
        run.weight.css_value()
    )?;
    write_paint(out, run.fill, None, run.opacity)?;
    write!(out, r#" xml:space="preserve">{}</text>"#, escape_xml(&run.text))
}

/// Fixed two-decimal form with trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

/// Escape the five XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
