use serde::{Deserialize, Serialize};

use crate::foundation::keyword::keyword_enum;
use crate::style::color::Color;

/// Five-colour palette used by the year-progress layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Display name.
    pub name: &'static str,
    /// Canvas background.
    pub bg: Color,
    /// Primary text.
    pub text: Color,
    /// Highlight (today, progress fill, month name).
    pub accent: Color,
    /// Secondary text and elapsed days.
    pub secondary: Color,
    /// Progress track and future days.
    pub muted: Color,
}

/// Named palettes selectable per request. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Neon lime on void black.
    #[default]
    Cyber,
    /// International red on white.
    Swiss,
    /// Sky blue on navy.
    Deep,
    /// Burnt orange on warm stone ("Monolith").
    Slate,
    /// Deep-space variant with a cooler text white.
    Space,
}

impl Theme {
    /// Every theme, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Cyber,
        Self::Swiss,
        Self::Deep,
        Self::Slate,
        Self::Space,
    ];

    /// The palette for this theme.
    pub const fn palette(self) -> Palette {
        match self {
            Self::Cyber => Palette {
                name: "Cyber",
                bg: Color::hex(0x050505),
                text: Color::hex(0xffffff),
                accent: Color::hex(0xccff00),
                secondary: Color::hex(0x262626),
                muted: Color::hex(0x111111),
            },
            Self::Swiss => Palette {
                name: "Swiss",
                bg: Color::hex(0xf0f0f0),
                text: Color::hex(0x111111),
                accent: Color::hex(0xff3b30),
                secondary: Color::hex(0xd1d1d6),
                muted: Color::hex(0xe5e5ea),
            },
            Self::Deep => Palette {
                name: "Deep Space",
                bg: Color::hex(0x020617),
                text: Color::hex(0xf8fafc),
                accent: Color::hex(0x38bdf8),
                secondary: Color::hex(0x1e293b),
                muted: Color::hex(0x0f172a),
            },
            Self::Slate => Palette {
                name: "Monolith",
                bg: Color::hex(0x1c1917),
                text: Color::hex(0xe7e5e4),
                accent: Color::hex(0xea580c),
                secondary: Color::hex(0x44403c),
                muted: Color::hex(0x292524),
            },
            Self::Space => Palette {
                name: "Space",
                bg: Color::hex(0x020617),
                text: Color::hex(0xf0f9ff),
                accent: Color::hex(0x38bdf8),
                secondary: Color::hex(0x1e293b),
                muted: Color::hex(0x0f172a),
            },
        }
    }
}

keyword_enum!(Theme, "theme", {
    Cyber => "cyber",
    Swiss => "swiss",
    Deep => "deep",
    Slate => "slate",
    Space => "space",
});

/// Fixed light palette of the month-calendar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarPalette {
    /// Canvas background.
    pub background: Color,
    /// Title and day-number text.
    pub text: Color,
    /// Fill of days not yet completed.
    pub available_day: Color,
    /// Outline of days not yet completed.
    pub available_day_stroke: Color,
    /// Fill of completed days.
    pub completed_day: Color,
    /// Month name text.
    pub month_label: Color,
    /// Weekday initial text.
    pub day_label: Color,
}

impl CalendarPalette {
    /// The only month-calendar palette.
    pub const MINIMAL: Self = Self {
        background: Color::hex(0xffffff),
        text: Color::hex(0x2c3e50),
        available_day: Color::hex(0xe8e8e8),
        available_day_stroke: Color::hex(0xcccccc),
        completed_day: Color::hex(0x3498db),
        month_label: Color::hex(0x2c3e50),
        day_label: Color::hex(0x7f8c8d),
    };
}

impl Default for CalendarPalette {
    fn default() -> Self {
        Self::MINIMAL
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
