use super::*;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::scene::model::GlowFilter;
use crate::text::metrics::FontWeight;

fn sample() -> Scene {
    let mut scene = Scene::new(Canvas::new(200, 100), Color::hex(0x050505));
    scene.glow = Some(GlowFilter { std_dev: 6.0 });
    scene.push(Primitive::pill(Rect::new(10.0, 10.0, 110.0, 20.0), Color::hex(0x111111)));
    scene.push(
        Primitive::Circle {
            center: Point::new(50.0, 50.0),
            radius: 12.5,
            fill: Color::hex(0xccff00),
            stroke: None,
            glow: false,
        }
        .with_glow(),
    );
    scene.push_text(TextRun {
        x: 5.0,
        baseline_y: 90.0,
        text: "Tom & \"Jerry\" <3".to_owned(),
        size: 12.0,
        weight: FontWeight::Bold,
        fill: Color::WHITE,
        opacity: 0.7,
    });
    scene
}

#[test]
fn document_shape() {
    let svg = sample().to_svg("Liberation Sans");
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="200" height="100""#
    ));
    assert!(svg.contains(r#"<feGaussianBlur stdDeviation="6""#));
    assert!(svg.contains(r##"<rect x="0" y="0" width="200" height="100" fill="#050505"/>"##));
    assert!(svg.contains(r##"<rect x="10" y="10" width="100" height="10" rx="5" fill="#111111"/>"##));
    assert!(svg.contains(
        r##"<circle cx="50" cy="50" r="12.5" fill="#ccff00" filter="url(#glow)"/>"##
    ));
}

#[test]
fn text_is_escaped_and_unanchored() {
    let svg = sample().to_svg("Liberation Sans");
    assert!(svg.contains(
        r##"<text x="5" y="90" font-family="Liberation Sans" font-size="12" font-weight="700" fill="#ffffff" opacity="0.7" xml:space="preserve">Tom &amp; &quot;Jerry&quot; &lt;3</text>"##
    ));
    assert!(!svg.contains("text-anchor"));
}

#[test]
fn glow_reference_requires_filter_definition() {
    let mut scene = sample();
    scene.glow = None;
    let svg = scene.to_svg("X");
    assert!(!svg.contains("filter="));
    assert!(!svg.contains("<defs>"));
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(3.0), "3");
    assert_eq!(num(2.5), "2.5");
    assert_eq!(num(1.0 / 3.0), "0.33");
    assert_eq!(num(-0.001), "0");
}

#[test]
fn escape_covers_all_specials() {
    assert_eq!(escape_xml(r#"<a href='x'>&"#), "&lt;a href=&apos;x&apos;&gt;&amp;");
}
