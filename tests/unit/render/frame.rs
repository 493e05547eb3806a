use super::*;

#[test]
fn demultiply_restores_straight_alpha() {
    let mut frame = FrameRGBA {
        width: 3,
        height: 1,
        data: vec![
            128, 64, 0, 128, // half-transparent
            10, 20, 30, 255, // opaque
            0, 0, 0, 0, // clear
        ],
        premultiplied: true,
    };
    frame.demultiply();
    assert!(!frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([255, 128, 0, 128]));
    assert_eq!(frame.pixel(1, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(2, 0), Some([0, 0, 0, 0]));

    let before = frame.data.clone();
    frame.demultiply();
    assert_eq!(frame.data, before);
}

#[test]
fn pixel_is_bounds_checked() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![1, 2, 3, 4],
        premultiplied: false,
    };
    assert_eq!(frame.pixel(0, 0), Some([1, 2, 3, 4]));
    assert_eq!(frame.pixel(1, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
}
