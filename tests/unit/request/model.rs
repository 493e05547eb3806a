use chrono::NaiveDate;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn year_bounds_are_inclusive() {
    assert!(validate_year(1899).unwrap_err().is_client_error());
    assert!(validate_year(2101).unwrap_err().is_client_error());
    assert_eq!(validate_year(1900).unwrap(), 1900);
    assert_eq!(validate_year(2100).unwrap(), 2100);
}

#[test]
fn calendar_request_rejects_out_of_range_year() {
    let err = CalendarRequest::new(
        1899,
        CalendarDevice::Laptop,
        CompletedDays::default(),
        Shape::Circle,
    )
    .unwrap_err();
    assert!(matches!(err, ChronosError::InvalidParameter(_)));

    assert!(
        CalendarRequest::new(2100, CalendarDevice::Mobile, CompletedDays::default(), Shape::Circle)
            .is_ok()
    );
}

#[test]
fn completed_days_match_iso_and_ordinal_forms() {
    let done = CompletedDays::new(["2024-01-15", "50"]);
    assert!(done.contains(2024, 0, 15));
    assert!(done.contains(2024, 1, 19)); // day 50
    assert!(!done.contains(2024, 0, 16));
}

#[test]
fn completed_list_parsing_trims_and_drops_empty_items() {
    let done = CompletedDays::parse_list(" 2024-01-01 , ,15,");
    assert_eq!(done.len(), 2);
    assert!(done.contains(2024, 0, 1));
    assert!(done.contains(2024, 0, 15));
    assert!(CompletedDays::parse_list("").is_empty());
}

#[test]
fn progress_request_derives_figures() {
    let r = ProgressRequest::new(
        date(2024, 3, 1),
        ProgressDevice::Desktop,
        Theme::Cyber,
        Shape::Rounded,
    )
    .unwrap();
    assert_eq!(r.day_of_year, 61);
    assert_eq!(r.total_days, 366);
    assert_eq!(r.remaining_days, 305);
    assert!((r.progress_percent - 61.0 / 366.0).abs() < 1e-12);
    // 2024-03-01 was a Friday.
    assert_eq!(r.current_day_of_week, 5);
    assert_eq!(r.percent_complete(), 17);
}

#[test]
fn last_day_of_year_has_nothing_remaining() {
    let r = ProgressRequest::new(
        date(2023, 12, 31),
        ProgressDevice::Mobile,
        Theme::Swiss,
        Shape::Square,
    )
    .unwrap();
    assert_eq!(r.day_of_year, 365);
    assert_eq!(r.remaining_days, 0);
    assert_eq!(r.percent_complete(), 100);
}

#[test]
fn progress_request_rejects_out_of_range_year() {
    let err = ProgressRequest::new(
        date(2101, 1, 1),
        ProgressDevice::Desktop,
        Theme::Cyber,
        Shape::Rounded,
    )
    .unwrap_err();
    assert!(err.is_client_error());
}

#[test]
fn keyword_enums_parse_and_print() {
    assert_eq!("iphone-lock".parse::<ProgressDevice>().unwrap(), ProgressDevice::IphoneLock);
    assert_eq!(ProgressDevice::IphoneLock.to_string(), "iphone-lock");
    assert_eq!(" Laptop ".parse::<CalendarDevice>().unwrap(), CalendarDevice::Laptop);
    assert_eq!("ROUNDED".parse::<Shape>().unwrap(), Shape::Rounded);
    assert!("tablet".parse::<CalendarDevice>().is_err());
    assert!("hexagon".parse::<Shape>().is_err());

    let msg = "tablet".parse::<ProgressDevice>().unwrap_err().to_string();
    assert!(msg.contains("iphone-lock"), "{msg}");
}

#[test]
fn devices_map_to_fixed_resolutions() {
    assert_eq!(CalendarDevice::Laptop.canvas(), Canvas::LANDSCAPE_4K);
    assert_eq!(CalendarDevice::Mobile.canvas(), Canvas::PORTRAIT_4K);
    assert_eq!(ProgressDevice::IphoneLock.canvas(), Canvas::IPHONE_LOCK);
    assert_eq!(ProgressDevice::IphoneLock.default_shape(), Shape::Circle);
    assert_eq!(ProgressDevice::Desktop.default_shape(), Shape::Rounded);
}

#[test]
fn file_names_describe_the_render() {
    let cal = CalendarRequest::new(
        2024,
        CalendarDevice::Mobile,
        CompletedDays::default(),
        Shape::Circle,
    )
    .unwrap();
    assert_eq!(RenderRequest::from(cal).file_name(), "calendar-2024-mobile.png");
}
