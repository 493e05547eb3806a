pub use kurbo::{Point, Rect, Size};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// 4K landscape (desktop / laptop wallpapers).
    pub const LANDSCAPE_4K: Self = Self::new(3840, 2160);
    /// 4K portrait (phone home-screen wallpapers).
    pub const PORTRAIT_4K: Self = Self::new(2160, 3840);
    /// iPhone 15/16 Pro Max lock screen.
    pub const IPHONE_LOCK: Self = Self::new(1290, 2796);

    /// Construct a canvas from pixel dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as `f64` for layout arithmetic.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64` for layout arithmetic.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Full-canvas rectangle anchored at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
