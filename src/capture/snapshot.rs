use base64::{engine::general_purpose::STANDARD, Engine};
use image::{Rgb, RgbImage};
use std::io::Cursor;

use crate::canvas::Surface;
use crate::error::{Error, Result};

const WHITE: [u8; 3] = [0xff, 0xff, 0xff];

/// A flattened canvas ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

/// Flattens the drawing onto an opaque white background and encodes it as PNG.
pub struct SnapshotEncoder;

impl SnapshotEncoder {
    pub fn encode(surface: &Surface) -> Result<EncodedImage> {
        let flat = Self::flatten(surface);

        let mut buffer = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(flat)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .map_err(|e| Error::Encode(format!("Failed to encode image: {}", e)))?;

        Ok(EncodedImage {
            mime_type: "image/png".to_string(),
            bytes: buffer.into_inner(),
            width: surface.width(),
            height: surface.height(),
        })
    }

    /// Source-over composite of every pixel onto white, dropping alpha.
    pub fn flatten(surface: &Surface) -> RgbImage {
        let source = surface.image();
        RgbImage::from_fn(source.width(), source.height(), |x, y| {
            let [r, g, b, a] = source.get_pixel(x, y).0;
            let alpha = a as u32;
            let blend = |channel: u8, backdrop: u8| -> u8 {
                ((channel as u32 * alpha + backdrop as u32 * (255 - alpha) + 127) / 255) as u8
            };
            Rgb([blend(r, WHITE[0]), blend(g, WHITE[1]), blend(b, WHITE[2])])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::StrokeCanvas;
    use crate::canvas::{Point, Tool};
    use crate::config::CanvasConfig;

    fn sketched() -> StrokeCanvas {
        let mut canvas = StrokeCanvas::new(32, 24, CanvasConfig::default());
        canvas.begin_stroke(Point::new(2.0, 2.0));
        canvas.extend_stroke(Point::new(30.0, 20.0));
        canvas.end_stroke();
        canvas.set_tool(Tool::Eraser);
        canvas.begin_stroke(Point::new(4.0, 20.0));
        canvas.extend_stroke(Point::new(5.0, 20.0));
        canvas.end_stroke();
        canvas
    }

    #[test]
    fn encoding_twice_is_identical() {
        let canvas = sketched();
        let first = SnapshotEncoder::encode(canvas.surface()).unwrap();
        let second = SnapshotEncoder::encode(canvas.surface()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_data_uri(), second.to_data_uri());
    }

    #[test]
    fn erased_regions_come_out_white_and_opaque() {
        let canvas = sketched();
        let before = canvas.surface().snapshot();
        let encoded = SnapshotEncoder::encode(canvas.surface()).unwrap();
        assert_eq!(canvas.surface().snapshot(), before);

        let decoded = image::load_from_memory(&encoded.bytes).unwrap();
        assert!(!decoded.color().has_alpha());
        let rgb = decoded.to_rgb8();
        assert_eq!(rgb.dimensions(), (32, 24));
        assert_eq!(rgb.get_pixel(4, 20).0, [0xff, 0xff, 0xff]);
        assert_eq!(rgb.get_pixel(31, 0).0, [0xda, 0xda, 0xda]);
    }

    #[test]
    fn data_uri_carries_png_prefix() {
        let canvas = StrokeCanvas::new(4, 4, CanvasConfig::default());
        let uri = SnapshotEncoder::encode(canvas.surface()).unwrap().to_data_uri();
        assert!(uri.starts_with("data:image/png;base64,iVBOR"));
    }
}
