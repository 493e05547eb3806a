use std::io::Cursor;

use super::frame::FrameRGBA;
use crate::foundation::error::{ChronosError, ChronosResult};

/// Encode `frame` as a PNG, demultiplying first if needed.
pub fn encode_png(mut frame: FrameRGBA) -> ChronosResult<Vec<u8>> {
    frame.demultiply();
    let (width, height) = (frame.width, frame.height);
    let img = image::RgbaImage::from_raw(width, height, frame.data).ok_or_else(|| {
        ChronosError::render(format!("frame buffer does not match {width}x{height}"))
    })?;

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| ChronosError::render(format!("encode png: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
