use std::fmt;

use serde::Serialize;

/// Straight-alpha RGBA8 colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Opaque colour from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque colour from a packed `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// `#rrggbb` form used for SVG `fill`/`stroke` attributes. Alpha is emitted separately.
    pub fn to_svg_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a `[0, 1]` opacity.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            f.write_str(&self.to_svg_hex())
        } else {
            write!(f, "{}{:02x}", self.to_svg_hex(), self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
