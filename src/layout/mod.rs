//! Pixel geometry for every layout family.
//!
//! Everything here is a pure function of the canvas size, the device and the displayed year:
//! no colours, fonts or text. The scene builders combine these rectangles with a palette and
//! measured text.

/// Twelve month panels, each with a 6x7 day grid.
pub mod month_grid;
/// 53x7 / 7x53 day matrix and its weekday labels.
pub mod year_matrix;
/// Proportional date/grid zones per device.
pub mod zones;

pub use month_grid::{DayCell, MonthGridLayout, MonthPanel};
pub use year_matrix::{DayState, GridCell, MatrixGeometry, Orientation, WeekdayLabel};
pub use zones::{Zone, ZoneSet};
