//! Gregorian calendar arithmetic.
//!
//! Months are 0-based (`0` = January) throughout, matching the grid layouts that index month
//! panels from zero. Inputs are validated at the request boundary, so none of these functions
//! fail.

/// Leap years, month lengths, weekdays and ordinal days.
pub mod math;

pub use math::{
    MONTH_NAMES, MONTHS_PER_YEAR, WEEKDAY_INITIALS_MONDAY_FIRST, WEEKDAY_INITIALS_SUNDAY_FIRST,
    days_in_month, days_in_year, day_of_week_monday_first,
    day_of_week_sunday_first, day_of_year, day_of_year_ymd, is_leap_year, iso_date,
};
