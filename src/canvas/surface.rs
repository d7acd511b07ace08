use image::{Rgba, RgbaImage};

use super::Point;

/// What a stroke leaves behind on the pixels it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Replace covered pixels with this colour.
    Ink([u8; 4]),
    /// Make covered pixels fully transparent.
    Clear,
}

/// Fixed-size RGBA raster the strokes are drawn into.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Dimensions are clamped to at least one pixel.
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        let pixels = RgbaImage::from_pixel(width.max(1), height.max(1), Rgba(background));
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn fill(&mut self, rgba: [u8; 4]) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba(rgba);
        }
    }

    /// Paint a round-capped segment of the given width from `from` to `to`.
    ///
    /// A pixel is covered when its centre lies within `width / 2` of the segment.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f32, paint: Paint) {
        let radius = (width / 2.0).max(0.5);
        let max_x = self.width() as f32 - 1.0;
        let max_y = self.height() as f32 - 1.0;

        let x0 = (from.x.min(to.x) - radius).floor().clamp(0.0, max_x) as u32;
        let x1 = (from.x.max(to.x) + radius).ceil().clamp(0.0, max_x) as u32;
        let y0 = (from.y.min(to.y) - radius).floor().clamp(0.0, max_y) as u32;
        let y1 = (from.y.max(to.y) + radius).ceil().clamp(0.0, max_y) as u32;

        let value = match paint {
            Paint::Ink(rgba) => Rgba(rgba),
            Paint::Clear => Rgba([0, 0, 0, 0]),
        };
        let radius_sq = radius * radius;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let centre = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_sq_to_segment(centre, from, to) <= radius_sq {
                    self.pixels.put_pixel(x, y, value);
                }
            }
        }
    }

    /// Raw RGBA bytes, row-major.
    pub fn snapshot(&self) -> Vec<u8> {
        self.pixels.as_raw().clone()
    }

    /// Overwrite every pixel from a snapshot taken of this surface.
    /// Returns `false` (and leaves the surface alone) when the sizes differ.
    pub fn restore(&mut self, snapshot: &[u8]) -> bool {
        let target: &mut [u8] = &mut self.pixels;
        if target.len() != snapshot.len() {
            return false;
        }
        target.copy_from_slice(snapshot);
        true
    }
}

fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let cx = a.x + t * dx - p.x;
    let cy = a.y + t * dy - p.y;
    cx * cx + cy * cy
}
