use serde::Serialize;

use crate::calendar::math::{MONTHS_PER_YEAR, day_of_week_monday_first, days_in_month};
use crate::foundation::core::{Canvas, Point, Rect, Size};
use crate::request::model::CalendarDevice;

const TITLE_HEIGHT: f64 = 150.0;
const TITLE_BASELINE: f64 = 80.0;
const PANEL_PADDING: f64 = 20.0;
const MONTH_NAME_HEIGHT: f64 = 50.0;
const WEEKDAY_LABEL_HEIGHT: f64 = 30.0;
const GRID_ROWS: u32 = 6;
const GRID_COLS: u32 = 7;

/// One day inside a month panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayCell {
    /// 1-based day of the month.
    pub day: u32,
    /// Column, Monday first.
    pub col: u32,
    /// Week row inside the panel (`0..6`).
    pub row: u32,
    /// Full grid cell.
    pub cell: Rect,
    /// Centred square of side `2 * radius` that the day shape occupies.
    pub marker: Rect,
}

impl DayCell {
    /// Centre of the cell.
    pub fn center(&self) -> Point {
        self.cell.center()
    }
}

/// One month sub-grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthPanel {
    /// 0-based month.
    pub month: u32,
    /// Panel bounds.
    pub frame: Rect,
    /// Month-name centre x and baseline.
    pub title_anchor: Point,
    /// Weekday initial centre x and baseline, Monday first.
    pub weekday_anchors: Vec<Point>,
    /// Size of one grid cell.
    pub cell: Size,
    /// Day marker radius, `min(cell) / 3`.
    pub radius: f64,
    /// Days in calendar order.
    pub days: Vec<DayCell>,
}

/// Whole-year month calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGridLayout {
    /// Target canvas.
    pub canvas: Canvas,
    /// Year-title centre x and baseline.
    pub title_anchor: Point,
    /// Panel columns.
    pub cols: u32,
    /// Panel rows.
    pub rows: u32,
    /// Twelve panels, January first.
    pub panels: Vec<MonthPanel>,
}

impl MonthGridLayout {
    /// Lay out the twelve months of `year` for `device`.
    pub fn new(year: i32, device: CalendarDevice) -> Self {
        let canvas = device.canvas();
        let (padding, cols, rows) = match device {
            CalendarDevice::Laptop => (80.0, 4, 3),
            CalendarDevice::Mobile => (60.0, 2, 6),
        };

        let avail_w = canvas.w() - 2.0 * padding;
        let avail_h = canvas.h() - 2.0 * padding - TITLE_HEIGHT;
        let panel = Size::new(avail_w / f64::from(cols), avail_h / f64::from(rows));

        let panels = (0..MONTHS_PER_YEAR)
            .map(|month| {
                let x = padding + f64::from(month % cols) * panel.width;
                let y = padding + TITLE_HEIGHT + f64::from(month / cols) * panel.height;
                month_panel(year, month, Rect::new(x, y, x + panel.width, y + panel.height))
            })
            .collect();

        Self {
            canvas,
            title_anchor: Point::new(canvas.w() / 2.0, padding + TITLE_BASELINE),
            cols,
            rows,
            panels,
        }
    }

    /// Total number of day cells across all panels.
    pub fn day_count(&self) -> usize {
        self.panels.iter().map(|p| p.days.len()).sum()
    }
}

fn month_panel(year: i32, month: u32, frame: Rect) -> MonthPanel {
    let grid_w = frame.width() - 2.0 * PANEL_PADDING;
    let grid_h =
        frame.height() - MONTH_NAME_HEIGHT - WEEKDAY_LABEL_HEIGHT - 2.0 * PANEL_PADDING;
    let cell = Size::new(grid_w / f64::from(GRID_COLS), grid_h / f64::from(GRID_ROWS));
    let radius = cell.width.min(cell.height) / 3.0;

    let grid_x = frame.x0 + PANEL_PADDING;
    let grid_y = frame.y0 + MONTH_NAME_HEIGHT + WEEKDAY_LABEL_HEIGHT + PANEL_PADDING;
    let label_baseline = frame.y0 + MONTH_NAME_HEIGHT + WEEKDAY_LABEL_HEIGHT - 5.0;

    let weekday_anchors = (0..GRID_COLS)
        .map(|col| Point::new(grid_x + (f64::from(col) + 0.5) * cell.width, label_baseline))
        .collect();

    let first = day_of_week_monday_first(year, month, 1);
    let len = days_in_month(month, year);
    let days = (1..=len)
        .map(|day| {
            let slot = first + day - 1;
            let (col, row) = (slot % GRID_COLS, slot / GRID_COLS);
            let x = grid_x + f64::from(col) * cell.width;
            let y = grid_y + f64::from(row) * cell.height;
            let cell_rect = Rect::new(x, y, x + cell.width, y + cell.height);
            let c = cell_rect.center();
            DayCell {
                day,
                col,
                row,
                cell: cell_rect,
                marker: Rect::new(c.x - radius, c.y - radius, c.x + radius, c.y + radius),
            }
        })
        .collect();

    MonthPanel {
        month,
        frame,
        title_anchor: Point::new(frame.center().x, frame.y0 + MONTH_NAME_HEIGHT),
        weekday_anchors,
        cell,
        radius,
        days,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/month_grid.rs"]
mod tests;
