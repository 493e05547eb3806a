use super::model::{Primitive, Scene, Stroke, TextRun};
use crate::calendar::math::{MONTH_NAMES, WEEKDAY_INITIALS_MONDAY_FIRST};
use crate::layout::month_grid::MonthGridLayout;
use crate::request::model::CalendarRequest;
use crate::style::color::Color;
use crate::style::theme::CalendarPalette;
use crate::text::metrics::{Anchor, FontWeight, TextMeasure, anchored_x};

const TITLE_SIZE: f64 = 80.0;
const MONTH_NAME_SIZE: f64 = 32.0;
const WEEKDAY_SIZE: f64 = 18.0;
const DAY_NUMBER_SIZE: f64 = 16.0;
const AVAILABLE_STROKE_WIDTH: f64 = 2.0;
/// Corner radius of rounded day markers, as a fraction of the marker side.
pub const MONTH_ROUNDING: f64 = 0.2;
/// Baseline drop that centres digits vertically on a point, as a fraction of the font size.
const DIGIT_CENTER_DROP: f64 = 0.35;

/// Build the month-calendar wallpaper for `req`.
///
/// Paint order: background, day markers, then all text.
#[tracing::instrument(level = "debug", skip_all, fields(year = req.year, device = %req.device))]
pub fn calendar_scene(req: &CalendarRequest, measure: &mut dyn TextMeasure) -> Scene {
    let palette = CalendarPalette::MINIMAL;
    let layout = MonthGridLayout::new(req.year, req.device);
    let mut scene = Scene::new(layout.canvas, palette.background);
    let mut texts = Vec::new();

    texts.push(centered(
        measure,
        &req.year.to_string(),
        layout.title_anchor.x,
        layout.title_anchor.y,
        TITLE_SIZE,
        FontWeight::Bold,
        palette.text,
    ));

    for panel in &layout.panels {
        texts.push(centered(
            measure,
            MONTH_NAMES[panel.month as usize],
            panel.title_anchor.x,
            panel.title_anchor.y,
            MONTH_NAME_SIZE,
            FontWeight::Bold,
            palette.month_label,
        ));
        for (anchor, initial) in panel.weekday_anchors.iter().zip(WEEKDAY_INITIALS_MONDAY_FIRST) {
            texts.push(centered(
                measure,
                initial,
                anchor.x,
                anchor.y,
                WEEKDAY_SIZE,
                FontWeight::Regular,
                palette.day_label,
            ));
        }

        for day in &panel.days {
            let completed = req.completed.contains(req.year, panel.month, day.day);
            let (fill, stroke, ink) = if completed {
                (palette.completed_day, None, Color::WHITE)
            } else {
                (
                    palette.available_day,
                    Some(Stroke {
                        color: palette.available_day_stroke,
                        width: AVAILABLE_STROKE_WIDTH,
                    }),
                    palette.text,
                )
            };
            scene.push(Primitive::cell(req.shape, day.marker, MONTH_ROUNDING, fill, stroke));

            let center = day.center();
            texts.push(centered(
                measure,
                &day.day.to_string(),
                center.x,
                center.y + 1.0 + DAY_NUMBER_SIZE * DIGIT_CENTER_DROP,
                DAY_NUMBER_SIZE,
                FontWeight::Regular,
                ink,
            ));
        }
    }

    for text in texts {
        scene.push_text(text);
    }
    scene
}

fn centered(
    measure: &mut dyn TextMeasure,
    text: &str,
    x: f64,
    baseline_y: f64,
    size: f64,
    weight: FontWeight,
    fill: Color,
) -> TextRun {
    TextRun {
        x: anchored_x(measure, text, x, size, weight, Anchor::Middle),
        baseline_y,
        text: text.to_owned(),
        size,
        weight,
        fill,
        opacity: 1.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/calendar.rs"]
mod tests;
