use std::collections::BTreeMap;

use super::*;
use crate::calendar::math::days_in_year;

const DEVICES: [ProgressDevice; 3] = [
    ProgressDevice::Desktop,
    ProgressDevice::Mobile,
    ProgressDevice::IphoneLock,
];

fn geometry(device: ProgressDevice) -> MatrixGeometry {
    MatrixGeometry::new(device, device.canvas(), 2024)
}

fn geometry_for(device: ProgressDevice, year: i32) -> MatrixGeometry {
    MatrixGeometry::new(device, device.canvas(), year)
}

#[test]
fn every_day_is_placed_exactly_once() {
    for device in DEVICES {
        for year in [1900, 2000, 2023, 2024, 2028, 2100] {
            let total = days_in_year(year);
            let cells = geometry_for(device, year).cells(year, total);
            assert_eq!(cells.len(), total as usize, "{device} {year}");
            for (expected, cell) in cells.iter().enumerate() {
                assert_eq!(cell.day_index as usize, expected);
            }
        }
    }
}

#[test]
fn cells_stay_inside_the_grid_zone() {
    for device in DEVICES {
        let g = geometry(device);
        let zone = ZoneSet::for_device(device).grid.to_rect(device.canvas());
        for cell in g.cells(2024, 366) {
            assert!(cell.rect.x0 >= zone.x0 - 1e-6 && cell.rect.x1 <= zone.x1 + 1e-6);
            assert!(cell.rect.y0 >= zone.y0 - 1e-6 && cell.rect.y1 <= zone.y1 + 1e-6);
            assert!(cell.rect.width() > 0.0 && cell.rect.height() > 0.0);
        }
        let (cols, rows) = g.orientation.dims(g.weeks);
        let last = g.cell_rect(cols - 1, rows - 1);
        assert!((last.x1 - g.grid.x1).abs() < 1e-6, "{device}");
        assert!((last.y1 - g.grid.y1).abs() < 1e-6, "{device}");
    }
}

#[test]
fn dimensions_follow_orientation() {
    let dims = |d: ProgressDevice| {
        let g = geometry(d);
        g.orientation.dims(g.weeks)
    };
    assert_eq!(dims(ProgressDevice::Desktop), (53, 7));
    assert_eq!(dims(ProgressDevice::Mobile), (7, 53));
    assert_eq!(dims(ProgressDevice::IphoneLock), (7, 53));
}

#[test]
fn leap_years_starting_on_saturday_get_a_54th_week() {
    // 2000-01-01 and 2028-01-01 are Saturdays.
    assert_eq!(weeks_in_matrix(2000), 54);
    assert_eq!(weeks_in_matrix(2028), 54);
    assert_eq!(weeks_in_matrix(2024), 53);
    // 2022-01-01 is a Saturday but 2022 is not a leap year.
    assert_eq!(weeks_in_matrix(2022), 53);

    let g = geometry_for(ProgressDevice::Desktop, 2028);
    let last = g.cells(2028, 366).pop().unwrap();
    assert_eq!((last.col, last.row), (53, 0));
}

#[test]
fn first_day_anchors_the_grid() {
    // 2024-01-01 is a Monday: slot 1, week 0.
    let desktop = geometry(ProgressDevice::Desktop).cells(2024, 366);
    assert_eq!((desktop[0].col, desktop[0].row), (0, 1));
    let mobile = geometry(ProgressDevice::Mobile).cells(2024, 366);
    assert_eq!((mobile[0].col, mobile[0].row), (1, 0));

    // 2023-01-01 is a Sunday: no leading padding.
    let cells = geometry_for(ProgressDevice::Desktop, 2023).cells(2023, 365);
    assert_eq!((cells[0].col, cells[0].row), (0, 0));
}

#[test]
fn desktop_and_portrait_are_transposes() {
    let desktop: BTreeMap<u32, (u32, u32)> = geometry(ProgressDevice::Desktop)
        .cells(2024, 366)
        .into_iter()
        .map(|c| (c.day_index, (c.col, c.row)))
        .collect();
    for device in [ProgressDevice::Mobile, ProgressDevice::IphoneLock] {
        for cell in geometry(device).cells(2024, 366) {
            assert_eq!(desktop[&cell.day_index], (cell.row, cell.col), "{device}");
        }
    }
}

#[test]
fn gaps_are_proportional_and_positive() {
    let d = geometry(ProgressDevice::Desktop);
    assert!((d.gap - d.grid.width().min(d.grid.height()) * 0.002).abs() < 1e-9);
    let a = d.cell_rect(0, 0);
    let b = d.cell_rect(1, 0);
    assert!((b.x0 - a.x1 - d.gap).abs() < 1e-9);

    let lock = geometry(ProgressDevice::IphoneLock);
    assert!((lock.gap - 1290.0 * 0.005).abs() < 1e-9);
    assert_eq!(lock.glow_std_dev, 6.0);
}

#[test]
fn labels_sit_outside_the_cells() {
    let d = geometry(ProgressDevice::Desktop);
    assert_eq!(d.labels.len(), 7);
    for label in &d.labels {
        assert!(label.anchor.x < d.grid.x0);
    }
    let m = geometry(ProgressDevice::Mobile);
    for label in &m.labels {
        assert!(label.anchor.y < m.grid.y0);
    }
}

#[test]
fn classification_precedence() {
    assert_eq!(DayState::classify(9, 10), DayState::Today);
    assert_eq!(DayState::classify(8, 10), DayState::Past);
    assert_eq!(DayState::classify(10, 10), DayState::Future);
    assert_eq!(DayState::classify(0, 1), DayState::Today);
}
