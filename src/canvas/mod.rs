//! Freehand whiteboard: raster surface, stroke capture and undo/redo history.

pub mod board;
pub mod history;
pub mod surface;

pub use board::StrokeCanvas;
pub use history::History;
pub use surface::Surface;

use serde::{Deserialize, Serialize};

/// The active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::Pen => write!(f, "Pen"),
            Tool::Eraser => write!(f, "Eraser"),
        }
    }
}

/// A position in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where the surface is shown on screen.
///
/// The backing raster may be larger or smaller than its on-screen box, so
/// pointer positions are rescaled before they reach the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Map a client-space pointer position onto a `surface_width` x `surface_height` raster.
    pub fn to_surface(&self, client_x: f32, client_y: f32, surface_width: u32, surface_height: u32) -> Point {
        let scale_x = if self.width > 0.0 { surface_width as f32 / self.width } else { 1.0 };
        let scale_y = if self.height > 0.0 { surface_height as f32 / self.height } else { 1.0 };
        Point {
            x: (client_x - self.left) * scale_x,
            y: (client_y - self.top) * scale_y,
        }
    }
}
