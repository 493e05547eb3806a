use super::*;

#[test]
fn fixed_resolutions_match_device_targets() {
    assert_eq!((Canvas::LANDSCAPE_4K.width, Canvas::LANDSCAPE_4K.height), (3840, 2160));
    assert_eq!((Canvas::PORTRAIT_4K.width, Canvas::PORTRAIT_4K.height), (2160, 3840));
    assert_eq!((Canvas::IPHONE_LOCK.width, Canvas::IPHONE_LOCK.height), (1290, 2796));
}

#[test]
fn bounds_cover_the_canvas() {
    let c = Canvas::new(100, 50);
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
}
