use super::*;
use crate::foundation::core::{Canvas, Rect};
use crate::scene::Primitive;
use crate::style::color::Color;

#[test]
fn shapes_rasterize_without_fonts() {
    let mut scene = Scene::new(Canvas::new(40, 20), Color::hex(0x050505));
    scene.push(Primitive::fill_rect(Rect::new(20.0, 0.0, 40.0, 20.0), Color::hex(0xccff00)));

    let frame = ResvgRasterizer::without_fonts().rasterize(&scene).unwrap();
    assert_eq!((frame.width, frame.height), (40, 20));
    assert_eq!(frame.data.len(), 40 * 20 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(5, 10), Some([0x05, 0x05, 0x05, 255]));
    assert_eq!(frame.pixel(30, 10), Some([0xcc, 0xff, 0x00, 255]));
}

#[test]
fn malformed_svg_is_a_render_error() {
    let parsed = ResvgRasterizer::without_fonts().parse("<svg><rect");
    assert!(matches!(parsed, Err(ChronosError::Render(_))));
}
