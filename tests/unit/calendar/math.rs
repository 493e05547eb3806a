use chrono::{Datelike, NaiveDate};

use super::*;

#[test]
fn leap_year_reference_values() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(!is_leap_year(2100));
}

#[test]
fn leap_year_matches_gregorian_rule_across_supported_range() {
    for year in 1900..=2100 {
        let expected = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap_year(year), expected, "year {year}");
    }
}

#[test]
fn month_lengths_sum_to_year_length() {
    for year in 1900..=2100 {
        let total: u32 = (0..MONTHS_PER_YEAR).map(|m| days_in_month(m, year)).sum();
        assert_eq!(total, if is_leap_year(year) { 366 } else { 365 });
        assert_eq!(total, days_in_year(year));
    }
    assert_eq!(days_in_month(1, 2024), 29);
    assert_eq!(days_in_month(1, 2023), 28);
    assert_eq!(days_in_month(11, 2023), 31);
}

#[test]
fn weekdays_agree_with_chrono() {
    let mut date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
    while date <= end {
        let (y, m, d) = (date.year(), date.month0(), date.day());
        assert_eq!(
            day_of_week_sunday_first(y, m, d),
            date.weekday().num_days_from_sunday(),
            "{date}"
        );
        assert_eq!(
            day_of_week_monday_first(y, m, d),
            date.weekday().num_days_from_monday(),
            "{date}"
        );
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn known_weekdays() {
    // 2024-01-01 was a Monday.
    assert_eq!(day_of_week_monday_first(2024, 0, 1), 0);
    assert_eq!(day_of_week_sunday_first(2024, 0, 1), 1);
    // 2023-01-01 was a Sunday.
    assert_eq!(day_of_week_monday_first(2023, 0, 1), 6);
    assert_eq!(day_of_week_sunday_first(2023, 0, 1), 0);
}

#[test]
fn day_of_year_matches_ordinal() {
    for year in [1900, 2000, 2023, 2024, 2100] {
        let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        while date.year() == year {
            assert_eq!(day_of_year(date), date.ordinal());
            date = date.succ_opt().unwrap();
        }
    }
    assert_eq!(day_of_year_ymd(2024, 11, 31), 366);
    assert_eq!(day_of_year_ymd(2023, 11, 31), 365);
    assert_eq!(day_of_year_ymd(2024, 1, 19), 50);
}

#[test]
fn iso_date_is_zero_padded() {
    assert_eq!(iso_date(2024, 0, 5), "2024-01-05");
    assert_eq!(iso_date(1900, 11, 31), "1900-12-31");
}

#[test]
fn weekday_initials_agree_across_week_starts() {
    for native in 0..7usize {
        let monday_first = (native + 6) % 7;
        assert_eq!(
            WEEKDAY_INITIALS_SUNDAY_FIRST[native],
            WEEKDAY_INITIALS_MONDAY_FIRST[monday_first]
        );
    }
    assert_eq!(MONTH_NAMES[1], "February");
}
