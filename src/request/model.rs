use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::math::{
    day_of_week_sunday_first, day_of_year, day_of_year_ymd, days_in_year, iso_date,
};
use crate::foundation::core::Canvas;
use crate::foundation::error::{ChronosError, ChronosResult};
use crate::foundation::keyword::keyword_enum;
use crate::style::theme::Theme;

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1900;
/// Latest accepted year.
pub const MAX_YEAR: i32 = 2100;

/// Reject years outside `[MIN_YEAR, MAX_YEAR]`.
pub fn validate_year(year: i32) -> ChronosResult<i32> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ChronosError::invalid_parameter(format!(
            "invalid year {year}; please provide a year between {MIN_YEAR} and {MAX_YEAR}"
        )));
    }
    Ok(year)
}

/// Cell outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Centred circle.
    #[default]
    Circle,
    /// Sharp-cornered rectangle.
    Square,
    /// Rectangle with rounded corners.
    Rounded,
}

keyword_enum!(Shape, "shape", {
    Circle => "circle",
    Square => "square",
    Rounded => "rounded",
});

/// Target of a month-calendar render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarDevice {
    /// 4K landscape, 4x3 month panels.
    #[default]
    Laptop,
    /// 4K portrait, 2x6 month panels.
    Mobile,
}

keyword_enum!(CalendarDevice, "device", {
    Laptop => "laptop",
    Mobile => "mobile",
});

impl CalendarDevice {
    /// Output resolution.
    pub const fn canvas(self) -> Canvas {
        match self {
            Self::Laptop => Canvas::LANDSCAPE_4K,
            Self::Mobile => Canvas::PORTRAIT_4K,
        }
    }
}

/// Target of a year-progress render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressDevice {
    /// 4K landscape: date zone left, 53x7 matrix right.
    #[default]
    Desktop,
    /// 4K portrait: date zone on top, 7x53 matrix below.
    Mobile,
    /// iPhone lock screen: clock-safe top band, 7x53 matrix, caption band.
    IphoneLock,
}

keyword_enum!(ProgressDevice, "device", {
    Desktop => "desktop",
    Mobile => "mobile",
    IphoneLock => "iphone-lock",
});

impl ProgressDevice {
    /// Output resolution.
    pub const fn canvas(self) -> Canvas {
        match self {
            Self::Desktop => Canvas::LANDSCAPE_4K,
            Self::Mobile => Canvas::PORTRAIT_4K,
            Self::IphoneLock => Canvas::IPHONE_LOCK,
        }
    }

    /// Default cell shape when the request does not name one.
    pub const fn default_shape(self) -> Shape {
        match self {
            Self::IphoneLock => Shape::Circle,
            Self::Desktop | Self::Mobile => Shape::Rounded,
        }
    }
}

/// Days marked as done, as ISO dates or 1-based day-of-year numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedDays(BTreeSet<String>);

impl CompletedDays {
    /// Collect entries, trimming whitespace and dropping empty items.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            entries
                .into_iter()
                .map(|s| s.as_ref().trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Parse a comma-separated list (`"2024-01-01,15,51"`).
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// `true` when the date matches either its ISO string or its day-of-year number.
    pub fn contains(&self, year: i32, month: u32, day: u32) -> bool {
        if self.0.contains(&iso_date(year, month, day)) {
            return true;
        }
        self.0
            .contains(&day_of_year_ymd(year, month, day).to_string())
    }

    /// Number of raw entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Month-grid calendar request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// Displayed year, `1900..=2100`.
    pub year: i32,
    /// Layout target.
    pub device: CalendarDevice,
    /// Days drawn as completed.
    pub completed: CompletedDays,
    /// Day cell outline.
    pub shape: Shape,
}

impl CalendarRequest {
    /// Build a validated request.
    pub fn new(
        year: i32,
        device: CalendarDevice,
        completed: CompletedDays,
        shape: Shape,
    ) -> ChronosResult<Self> {
        Ok(Self {
            year: validate_year(year)?,
            device,
            completed,
            shape,
        })
    }

    /// Download file name.
    pub fn file_name(&self) -> String {
        format!("calendar-{}-{}.png", self.year, self.device)
    }
}

/// Year-progress matrix request with derived progress figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRequest {
    /// Reference ("today") date.
    pub date: NaiveDate,
    /// Layout target.
    pub device: ProgressDevice,
    /// Palette.
    pub theme: Theme,
    /// Day cell outline.
    pub shape: Shape,
    /// 1-based ordinal of `date`.
    pub day_of_year: u32,
    /// 365 or 366.
    pub total_days: u32,
    /// `total_days - day_of_year`.
    pub remaining_days: u32,
    /// `day_of_year / total_days`.
    pub progress_percent: f64,
    /// Weekday of `date`, Sunday first (`0` = Sunday).
    pub current_day_of_week: u32,
}

impl ProgressRequest {
    /// Build a validated request and compute the derived fields.
    pub fn new(
        date: NaiveDate,
        device: ProgressDevice,
        theme: Theme,
        shape: Shape,
    ) -> ChronosResult<Self> {
        let year = validate_year(date.year())?;
        let day_of_year = day_of_year(date);
        let total_days = days_in_year(year);
        Ok(Self {
            date,
            device,
            theme,
            shape,
            day_of_year,
            total_days,
            remaining_days: total_days - day_of_year,
            progress_percent: f64::from(day_of_year) / f64::from(total_days),
            current_day_of_week: day_of_week_sunday_first(year, date.month0(), date.day()),
        })
    }

    /// Displayed year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Rounded whole percentage of the year elapsed.
    pub fn percent_complete(&self) -> u32 {
        (self.progress_percent * 100.0).round() as u32
    }

    /// Download file name.
    pub fn file_name(&self) -> String {
        format!("chronos-{}-{}-{}.png", self.date, self.device, self.theme)
    }
}

/// Every layout the engine renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RenderRequest {
    /// Twelve month panels.
    Calendar(CalendarRequest),
    /// Year matrix with progress header.
    Progress(ProgressRequest),
}

impl RenderRequest {
    /// Output resolution for the request.
    pub fn canvas(&self) -> Canvas {
        match self {
            Self::Calendar(r) => r.device.canvas(),
            Self::Progress(r) => r.device.canvas(),
        }
    }

    /// Download file name.
    pub fn file_name(&self) -> String {
        match self {
            Self::Calendar(r) => r.file_name(),
            Self::Progress(r) => r.file_name(),
        }
    }
}

impl From<CalendarRequest> for RenderRequest {
    fn from(value: CalendarRequest) -> Self {
        Self::Calendar(value)
    }
}

impl From<ProgressRequest> for RenderRequest {
    fn from(value: ProgressRequest) -> Self {
        Self::Progress(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/request/model.rs"]
mod tests;
