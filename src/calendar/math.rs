use chrono::{Datelike, NaiveDate};

/// Number of months in a Gregorian year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday initials, Sunday first.
pub const WEEKDAY_INITIALS_SUNDAY_FIRST: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Weekday initials, Monday first.
pub const WEEKDAY_INITIALS_MONDAY_FIRST: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of `month` (0-based) in `year`.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    if month == 1 && is_leap_year(year) {
        return 29;
    }
    DAYS_IN_MONTH[(month % MONTHS_PER_YEAR) as usize]
}

/// 365 or 366.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Weekday with Sunday first (`0` = Sunday .. `6` = Saturday).
///
/// Sakamoto's method; valid for any proleptic Gregorian date.
pub fn day_of_week_sunday_first(year: i32, month: u32, day: u32) -> u32 {
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let m = (month % MONTHS_PER_YEAR) as usize;
    let y = if m < 2 { year - 1 } else { year };
    let dow = (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + T[m] + day as i32)
        .rem_euclid(7);
    dow as u32
}

/// Weekday with Monday first (`0` = Monday .. `6` = Sunday).
pub fn day_of_week_monday_first(year: i32, month: u32, day: u32) -> u32 {
    (day_of_week_sunday_first(year, month, day) + 6) % 7
}

/// 1-based ordinal of `day` in `month` (0-based) of `year`.
pub fn day_of_year_ymd(year: i32, month: u32, day: u32) -> u32 {
    (0..month.min(MONTHS_PER_YEAR))
        .map(|m| days_in_month(m, year))
        .sum::<u32>()
        + day
}

/// 1-based ordinal of `date` within its year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    day_of_year_ymd(date.year(), date.month0(), date.day())
}

/// `YYYY-MM-DD` for a 0-based month.
pub fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{:02}-{day:02}", month + 1)
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/math.rs"]
mod tests;
