//! Day-matrix geometry for the year-progress layouts.
//!
//! Slot `i` holds the day `i - first_weekday` of the year, so day 1 sits under its Sunday-first
//! weekday. A regular matrix has 53 x 7 = 371 slots. A leap year starting on a Saturday needs
//! 372, and such years get a 54th week so Dec 31 is still drawn; all other years keep the
//! fixed 53-week grid.

use serde::Serialize;

use crate::calendar::math::{day_of_week_sunday_first, days_in_year};
use crate::foundation::core::{Canvas, Point, Rect, Size};
use crate::layout::zones::ZoneSet;
use crate::request::model::ProgressDevice;

/// Days in a week; one matrix axis.
pub const DAYS_PER_WEEK: u32 = 7;
/// Week columns (or rows) of a regular matrix.
pub const WEEKS: u32 = 53;

/// Weeks needed to show every day of `year`.
///
/// 53 for all years except leap years starting on a Saturday, whose Dec 31 spills into a 54th
/// week.
pub fn weeks_in_matrix(year: i32) -> u32 {
    let first = day_of_week_sunday_first(year, 0, 1);
    (first + days_in_year(year)).div_ceil(DAYS_PER_WEEK).max(WEEKS)
}

/// Which axis carries the weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// 53 week columns x 7 weekday rows (landscape).
    WeeksAcross,
    /// 7 weekday columns x 53 week rows (portrait).
    WeeksDown,
}

impl Orientation {
    /// `(columns, rows)` for a matrix of `weeks` weeks.
    pub const fn dims(self, weeks: u32) -> (u32, u32) {
        match self {
            Self::WeeksAcross => (weeks, DAYS_PER_WEEK),
            Self::WeeksDown => (DAYS_PER_WEEK, weeks),
        }
    }

    /// Grid position of linear slot `i`.
    ///
    /// Slots advance one weekday at a time, so `i / 7` is the week and `i % 7` the weekday in
    /// both orientations; only the axis assignment differs.
    pub const fn slot_position(self, i: u32) -> (u32, u32) {
        let week = i / DAYS_PER_WEEK;
        let weekday = i % DAYS_PER_WEEK;
        match self {
            Self::WeeksAcross => (week, weekday),
            Self::WeeksDown => (weekday, week),
        }
    }
}

/// Fill category of a day, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayState {
    /// The reference date.
    Today,
    /// Before the reference date.
    Past,
    /// After the reference date.
    Future,
}

impl DayState {
    /// Classify 0-based `day_index` against the 1-based `day_of_year`.
    pub fn classify(day_index: u32, day_of_year: u32) -> Self {
        let day_number = day_index + 1;
        if day_number == day_of_year {
            Self::Today
        } else if day_number < day_of_year {
            Self::Past
        } else {
            Self::Future
        }
    }
}

/// One drawn (non-padding) matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    /// Column in the matrix.
    pub col: u32,
    /// Row in the matrix.
    pub row: u32,
    /// Absolute pixel rectangle.
    pub rect: Rect,
    /// 0-based day of the year.
    pub day_index: u32,
}

/// Weekday initial placed beside (desktop) or above (portrait) the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayLabel {
    /// Weekday, Sunday first.
    pub weekday: u32,
    /// Horizontal centre and text baseline.
    pub anchor: Point,
    /// Font size in pixels.
    pub font_size: f64,
}

/// Resolved matrix geometry for one device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixGeometry {
    /// Axis assignment.
    pub orientation: Orientation,
    /// Number of weeks along the week axis.
    pub weeks: u32,
    /// Area covered by cells, labels excluded.
    pub grid: Rect,
    /// Cell size.
    pub cell: Size,
    /// Spacing between adjacent cells on both axes.
    pub gap: f64,
    /// Seven weekday labels, Sunday first.
    pub labels: Vec<WeekdayLabel>,
    /// Standard deviation of the today-cell glow.
    pub glow_std_dev: f64,
}

impl MatrixGeometry {
    /// Lay out the matrix for `year` inside the grid zone of `device` on `canvas`.
    pub fn new(device: ProgressDevice, canvas: Canvas, year: i32) -> Self {
        let weeks = weeks_in_matrix(year);
        let zone = ZoneSet::for_device(device).grid.to_rect(canvas);
        let week = f64::from(DAYS_PER_WEEK);

        let (orientation, grid, gap, labels, glow_std_dev) = match device {
            ProgressDevice::Desktop => {
                let band = zone.width() * 0.03;
                let grid = Rect::new(zone.x0 + band, zone.y0, zone.x1, zone.y1);
                let row_h = zone.height() / week;
                let labels = weekday_labels(|i| {
                    Point::new(
                        zone.x0 + band / 2.0,
                        zone.y0 + (i + 0.5) * row_h + band * 0.2,
                    )
                }, band * 0.5);
                let gap = grid.width().min(grid.height()) * 0.002;
                (Orientation::WeeksAcross, grid, gap, labels, 10.0)
            }
            ProgressDevice::Mobile => {
                let band = zone.height() * 0.04;
                let grid = Rect::new(zone.x0, zone.y0 + band, zone.x1, zone.y1);
                let col_w = zone.width() / week;
                let labels = weekday_labels(|i| {
                    Point::new(zone.x0 + (i + 0.5) * col_w, zone.y0 + band * 0.6)
                }, band * 0.5);
                let gap = grid.width().min(grid.height()) * 0.002;
                (Orientation::WeeksDown, grid, gap, labels, 10.0)
            }
            ProgressDevice::IphoneLock => {
                let padding = canvas.w() * 0.05;
                let band = canvas.w() * 0.04;
                let label_top = zone.y0 + padding;
                let grid = Rect::new(zone.x0, label_top + band + padding * 0.5, zone.x1, zone.y1);
                let col_w = zone.width() / week;
                let labels = weekday_labels(|i| {
                    Point::new(zone.x0 + (i + 0.5) * col_w, label_top + band * 0.6)
                }, band);
                (Orientation::WeeksDown, grid, canvas.w() * 0.005, labels, 6.0)
            }
        };

        let (cols, rows) = orientation.dims(weeks);
        let cell = Size::new(
            (grid.width() - gap * f64::from(cols - 1)) / f64::from(cols),
            (grid.height() - gap * f64::from(rows - 1)) / f64::from(rows),
        );

        Self {
            orientation,
            weeks,
            grid,
            cell,
            gap,
            labels,
            glow_std_dev,
        }
    }

    /// Pixel rectangle of the cell at `(col, row)`.
    pub fn cell_rect(&self, col: u32, row: u32) -> Rect {
        let x = self.grid.x0 + f64::from(col) * (self.cell.width + self.gap);
        let y = self.grid.y0 + f64::from(row) * (self.cell.height + self.gap);
        Rect::new(x, y, x + self.cell.width, y + self.cell.height)
    }

    /// Every cell of `year` that maps to a real day.
    ///
    /// Jan 1's Sunday-first weekday offsets the first slot in every orientation, so a date
    /// lands on the same (week, weekday) pair whichever way the matrix is drawn.
    pub fn cells(&self, year: i32, total_days: u32) -> Vec<GridCell> {
        let first_day_index = day_of_week_sunday_first(year, 0, 1);
        (0..self.weeks * DAYS_PER_WEEK)
            .filter_map(|i| {
                let day_index = i.checked_sub(first_day_index)?;
                if day_index >= total_days {
                    return None;
                }
                let (col, row) = self.orientation.slot_position(i);
                Some(GridCell {
                    col,
                    row,
                    rect: self.cell_rect(col, row),
                    day_index,
                })
            })
            .collect()
    }
}

fn weekday_labels(anchor: impl Fn(f64) -> Point, font_size: f64) -> Vec<WeekdayLabel> {
    (0..DAYS_PER_WEEK)
        .map(|weekday| WeekdayLabel {
            weekday,
            anchor: anchor(f64::from(weekday)),
            font_size,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/year_matrix.rs"]
mod tests;
