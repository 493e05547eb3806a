use super::*;

#[test]
fn packed_literal_and_display() {
    let c = Color::hex(0xccff00);
    assert_eq!(c, Color::rgb(0xcc, 0xff, 0x00));
    assert_eq!(c.to_svg_hex(), "#ccff00");
    assert_eq!(c.to_string(), "#ccff00");
    assert_eq!(Color { a: 0x40, ..c }.to_string(), "#ccff0040");
}

#[test]
fn alpha_maps_to_opacity() {
    assert_eq!(Color::WHITE.opacity(), 1.0);
    let half = Color { a: 0x80, ..Color::WHITE };
    assert!((half.opacity() - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn serializes_as_hex_string() {
    let v = serde_json::to_value(Color::hex(0x0f172a)).unwrap();
    assert_eq!(v, serde_json::json!("#0f172a"));
}
