use chrono::Datelike;

use super::model::{GlowFilter, Primitive, Scene, TextRun};
use crate::calendar::math::{MONTH_NAMES, WEEKDAY_INITIALS_SUNDAY_FIRST};
use crate::foundation::core::Rect;
use crate::layout::year_matrix::{DayState, MatrixGeometry};
use crate::layout::zones::ZoneSet;
use crate::quotes::Quote;
use crate::request::model::{ProgressDevice, ProgressRequest};
use crate::style::color::Color;
use crate::style::theme::Palette;
use crate::text::metrics::{Anchor, FontWeight, TextMeasure, anchored_x};
use crate::text::wrap::wrap_greedy;

/// Corner radius of rounded matrix cells, as a fraction of the shorter cell side.
pub const MATRIX_ROUNDING: f64 = 0.3;
/// Quote line pitch as a multiple of the quote font size.
pub const QUOTE_LINE_SPACING: f64 = 1.3;

/// Build the year-progress wallpaper for `req`.
///
/// Paint order: background, matrix cells, text and bars, then the glowing today cell on top.
#[tracing::instrument(level = "debug", skip_all, fields(device = %req.device, date = %req.date))]
pub fn progress_scene(req: &ProgressRequest, quote: &Quote, measure: &mut dyn TextMeasure) -> Scene {
    let canvas = req.device.canvas();
    let palette = req.theme.palette();
    let matrix = MatrixGeometry::new(req.device, canvas, req.year());

    let mut scene = Scene::new(canvas, palette.bg);
    scene.glow = Some(GlowFilter {
        std_dev: matrix.glow_std_dev,
    });

    let (past, future) = match req.device {
        ProgressDevice::IphoneLock => (palette.text, palette.secondary),
        ProgressDevice::Desktop | ProgressDevice::Mobile => (palette.secondary, palette.muted),
    };

    let mut today = None;
    for cell in matrix.cells(req.year(), req.total_days) {
        let state = DayState::classify(cell.day_index, req.day_of_year);
        let fill = match state {
            DayState::Today => palette.accent,
            DayState::Past => past,
            DayState::Future => future,
        };
        let shape = Primitive::cell(req.shape, cell.rect, MATRIX_ROUNDING, fill, None);
        if state == DayState::Today {
            today = Some(shape.clone().with_glow());
        }
        scene.push(shape);
    }

    for label in &matrix.labels {
        let fill = if label.weekday == req.current_day_of_week {
            palette.accent
        } else {
            palette.secondary
        };
        let text = WEEKDAY_INITIALS_SUNDAY_FIRST[label.weekday as usize];
        let x = anchored_x(
            measure,
            text,
            label.anchor.x,
            label.font_size,
            FontWeight::Bold,
            Anchor::Middle,
        );
        scene.push_text(run(x, label.anchor.y, text, label.font_size, FontWeight::Bold, fill));
    }

    let date_zone = ZoneSet::for_device(req.device).date.to_rect(canvas);
    match req.device {
        ProgressDevice::Desktop => desktop_panel(&mut scene, req, quote, &palette, date_zone, measure),
        ProgressDevice::Mobile => mobile_panel(&mut scene, req, quote, &palette, date_zone, measure),
        ProgressDevice::IphoneLock => lock_caption(&mut scene, req, &palette, measure),
    }

    if let Some(today) = today {
        scene.push(today);
    }
    scene
}

/// Day number with month and year set to its right; returns the day-number size.
fn date_header(
    scene: &mut Scene,
    req: &ProgressRequest,
    palette: &Palette,
    zone: Rect,
    date_size: f64,
    measure: &mut dyn TextMeasure,
) -> f64 {
    let day_text = format!("{:02}", req.date.day());
    scene.push_text(run(
        zone.x0,
        zone.y0 + date_size * 0.85,
        &day_text,
        date_size,
        FontWeight::Bold,
        palette.text,
    ));

    let meta_size = date_size * 0.24;
    let meta_x = zone.x0 + measure.measure(&day_text, date_size, FontWeight::Bold) + date_size * 0.12;
    let meta_y = zone.y0 + date_size * 0.58;
    let month = MONTH_NAMES[req.date.month0() as usize].to_uppercase();
    scene.push_text(run(meta_x, meta_y, &month, meta_size, FontWeight::Bold, palette.accent));
    scene.push_text(run(
        meta_x,
        meta_y + meta_size * 1.25,
        &req.year().to_string(),
        meta_size,
        FontWeight::Regular,
        palette.secondary,
    ));
    meta_size
}

fn progress_bar(scene: &mut Scene, req: &ProgressRequest, palette: &Palette, bar: Rect) {
    scene.push(Primitive::pill(bar, palette.muted));
    let filled = Rect::new(
        bar.x0,
        bar.y0,
        bar.x0 + bar.width() * req.progress_percent.clamp(0.0, 1.0),
        bar.y1,
    );
    scene.push(Primitive::pill(filled, palette.accent));
}

struct QuoteBlock {
    mark_x: f64,
    mark_y: f64,
    mark_size: f64,
    text_x: f64,
    first_baseline: f64,
    size: f64,
    max_width: f64,
    text_opacity: f64,
    author_gap: f64,
}

fn quote_block(
    scene: &mut Scene,
    quote: &Quote,
    palette: &Palette,
    block: QuoteBlock,
    measure: &mut dyn TextMeasure,
) {
    let mut mark = run(
        block.mark_x,
        block.mark_y,
        "\"",
        block.mark_size,
        FontWeight::Bold,
        palette.muted,
    );
    mark.opacity = 0.25;
    scene.push_text(mark);

    let lines = wrap_greedy(measure, &quote.text, block.max_width, block.size, FontWeight::Regular);
    let pitch = block.size * QUOTE_LINE_SPACING;
    for (i, line) in lines.iter().enumerate() {
        let mut text = run(
            block.text_x,
            block.first_baseline + i as f64 * pitch,
            line,
            block.size,
            FontWeight::Regular,
            palette.text,
        );
        text.opacity = block.text_opacity;
        scene.push_text(text);
    }

    let author_y = block.first_baseline + lines.len() as f64 * pitch + block.size * block.author_gap;
    let mut author = run(
        block.text_x,
        author_y,
        &format!("\u{2014} {}", quote.author),
        block.size * 0.85,
        FontWeight::Regular,
        palette.secondary,
    );
    author.opacity = 0.8;
    scene.push_text(author);
}

fn desktop_panel(
    scene: &mut Scene,
    req: &ProgressRequest,
    quote: &Quote,
    palette: &Palette,
    zone: Rect,
    measure: &mut dyn TextMeasure,
) {
    let date_size = zone.width() * 0.45;
    date_header(scene, req, palette, zone, date_size, measure);

    let bar_w = zone.width();
    let bar_h = bar_w * 0.06;
    let bar_y = zone.y0 + date_size + zone.height() * 0.08;
    progress_bar(scene, req, palette, Rect::new(zone.x0, bar_y, zone.x1, bar_y + bar_h));

    let stats_y = bar_y + bar_h + bar_w * 0.08;
    let num_size = bar_w * 0.12;
    let label_size = bar_w * 0.04;
    let num_y = stats_y + num_size;
    let label_y = num_y + label_size + 10.0;

    let finished = req.day_of_year.to_string();
    scene.push_text(run(zone.x0, num_y, &finished, num_size, FontWeight::Bold, palette.text));
    scene.push_text(run(
        zone.x0,
        label_y,
        "FINISHED",
        label_size,
        FontWeight::Regular,
        palette.secondary,
    ));

    let remaining = req.remaining_days.to_string();
    let x = anchored_x(measure, &remaining, zone.x1, num_size, FontWeight::Bold, Anchor::End);
    scene.push_text(run(x, num_y, &remaining, num_size, FontWeight::Bold, palette.text));
    let x = anchored_x(measure, "REMAINING", zone.x1, label_size, FontWeight::Regular, Anchor::End);
    scene.push_text(run(
        x,
        label_y,
        "REMAINING",
        label_size,
        FontWeight::Regular,
        palette.secondary,
    ));

    let quote_y = zone.y1 - bar_w * 0.35;
    quote_block(
        scene,
        quote,
        palette,
        QuoteBlock {
            mark_x: zone.x0 + bar_w * 0.02,
            mark_y: quote_y,
            mark_size: bar_w * 0.15,
            text_x: zone.x0 + bar_w * 0.08,
            first_baseline: quote_y + bar_w * 0.1,
            size: bar_w * 0.065,
            max_width: zone.width() * 0.85,
            text_opacity: 0.7,
            author_gap: 0.6,
        },
        measure,
    );
}

fn mobile_panel(
    scene: &mut Scene,
    req: &ProgressRequest,
    quote: &Quote,
    palette: &Palette,
    zone: Rect,
    measure: &mut dyn TextMeasure,
) {
    let date_size = zone.height() * 0.45;
    let meta_size = date_header(scene, req, palette, zone, date_size, measure);

    let bar_y = zone.y0 + date_size + meta_size * 2.8;
    let bar_h = meta_size * 0.3;
    progress_bar(scene, req, palette, Rect::new(zone.x0, bar_y, zone.x1, bar_y + bar_h));

    let label_top = bar_y + bar_h + meta_size * 0.5;
    let label_size = meta_size * 0.7;
    let label_y = label_top + label_size;

    let finished = format!("{} FINISHED", req.day_of_year);
    scene.push_text(run(zone.x0, label_y, &finished, label_size, FontWeight::Bold, palette.secondary));
    let remaining = format!("{} REMAINING", req.remaining_days);
    let x = anchored_x(measure, &remaining, zone.x1, label_size, FontWeight::Bold, Anchor::End);
    scene.push_text(run(x, label_y, &remaining, label_size, FontWeight::Bold, palette.secondary));

    let size = meta_size * 0.6;
    let quote_y = label_y + meta_size * 1.5;
    let mark_size = size * 1.5;
    quote_block(
        scene,
        quote,
        palette,
        QuoteBlock {
            mark_x: zone.x0,
            mark_y: quote_y,
            mark_size,
            text_x: zone.x0 + mark_size * 0.5,
            first_baseline: quote_y + size * 0.4,
            size,
            max_width: zone.width() * 0.9,
            text_opacity: 0.6,
            author_gap: 0.5,
        },
        measure,
    );
}

fn lock_caption(
    scene: &mut Scene,
    req: &ProgressRequest,
    palette: &Palette,
    measure: &mut dyn TextMeasure,
) {
    let canvas = req.device.canvas();
    let band = ZoneSet::for_device(req.device).date.to_rect(canvas);
    let size = canvas.w() * 0.035;
    let caption = format!(
        "{}d left \u{00b7} {}%",
        req.remaining_days,
        req.percent_complete()
    );
    let x = anchored_x(measure, &caption, canvas.w() / 2.0, size, FontWeight::Bold, Anchor::Middle);
    scene.push_text(run(x, band.center().y, &caption, size, FontWeight::Bold, palette.accent));
}

fn run(x: f64, baseline_y: f64, text: &str, size: f64, weight: FontWeight, fill: Color) -> TextRun {
    TextRun {
        x,
        baseline_y,
        text: text.to_owned(),
        size,
        weight,
        fill,
        opacity: 1.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/progress.rs"]
mod tests;
