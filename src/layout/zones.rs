use serde::Serialize;

use crate::foundation::core::{Canvas, Rect};
use crate::request::model::ProgressDevice;

/// Rectangle expressed in fractions (`0..=1`) of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    /// Left edge fraction.
    pub left: f64,
    /// Top edge fraction.
    pub top: f64,
    /// Width fraction.
    pub width: f64,
    /// Height fraction.
    pub height: f64,
}

impl Zone {
    /// Construct a zone from fractions.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge fraction.
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge fraction.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Absolute pixel rectangle on `canvas`.
    pub fn to_rect(self, canvas: Canvas) -> Rect {
        let x0 = canvas.w() * self.left;
        let y0 = canvas.h() * self.top;
        Rect::new(
            x0,
            y0,
            x0 + canvas.w() * self.width,
            y0 + canvas.h() * self.height,
        )
    }

    /// `true` when the two zones share interior area. Touching edges do not count.
    pub fn overlaps(self, other: Self) -> bool {
        const EPS: f64 = 1e-9;
        self.left + EPS < other.right()
            && other.left + EPS < self.right()
            && self.top + EPS < other.bottom()
            && other.top + EPS < self.bottom()
    }

    /// `true` when the zone lies inside the unit square.
    pub fn within_canvas(self) -> bool {
        const EPS: f64 = 1e-9;
        self.left >= 0.0
            && self.top >= 0.0
            && self.width > 0.0
            && self.height > 0.0
            && self.right() <= 1.0 + EPS
            && self.bottom() <= 1.0 + EPS
    }
}

/// The two zones of a progress layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneSet {
    /// Header: date, progress bar, statistics, quote (caption band on the lock screen).
    pub date: Zone,
    /// Day matrix including its weekday labels.
    pub grid: Zone,
}

impl ZoneSet {
    /// Zones for `device`.
    pub const fn for_device(device: ProgressDevice) -> Self {
        match device {
            ProgressDevice::Desktop => Self {
                date: Zone::new(0.05, 0.05, 0.30, 0.90),
                grid: Zone::new(0.40, 0.05, 0.55, 0.90),
            },
            ProgressDevice::Mobile => Self {
                date: Zone::new(0.05, 0.05, 0.90, 0.22),
                grid: Zone::new(0.05, 0.29, 0.90, 0.66),
            },
            // Top 30% stays clear for the system clock; the bottom 15% carries the caption.
            ProgressDevice::IphoneLock => Self {
                date: Zone::new(0.05, 0.85, 0.90, 0.15),
                grid: Zone::new(0.05, 0.30, 0.90, 0.55),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/zones.rs"]
mod tests;
