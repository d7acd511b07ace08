use super::history::History;
use super::surface::{Paint, Surface};
use super::{Point, Tool, Viewport};
use crate::config::CanvasConfig;

/// The whiteboard: pointer-driven strokes on a raster surface with linear undo/redo.
///
/// A baseline snapshot is committed at construction, then one more after every
/// finished stroke and every clear.
pub struct StrokeCanvas {
    surface: Surface,
    history: History,
    style: CanvasConfig,
    tool: Tool,
    last_point: Option<Point>,
}

impl StrokeCanvas {
    pub fn new(width: u32, height: u32, style: CanvasConfig) -> Self {
        let surface = Surface::new(width, height, style.background);
        let mut history = History::new();
        history.commit(surface.snapshot());
        Self {
            surface,
            history,
            style,
            tool: Tool::Pen,
            last_point: None,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Takes effect from the next segment on.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn begin_stroke(&mut self, point: Point) {
        self.last_point = Some(point);
    }

    /// Draw from the last recorded point to `point`.
    ///
    /// Moves that arrive without a press are ignored; returns whether anything was drawn.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        let Some(from) = self.last_point else {
            log::debug!("Ignoring pointer move outside a stroke at ({}, {})", point.x, point.y);
            return false;
        };

        let (width, paint) = match self.tool {
            Tool::Pen => (self.style.pen_width, Paint::Ink(self.style.ink)),
            Tool::Eraser => (self.style.eraser_width, Paint::Clear),
        };
        self.surface.stroke_segment(from, point, width, paint);
        self.last_point = Some(point);
        true
    }

    /// Finish the open stroke and commit a snapshot. No-op when no stroke is open.
    pub fn end_stroke(&mut self) {
        if self.last_point.take().is_some() {
            self.history.commit(self.surface.snapshot());
        }
    }

    /// Pointer left the board mid-stroke; treated like a release.
    pub fn pointer_leave(&mut self) {
        self.end_stroke();
    }

    pub fn clear(&mut self) {
        self.last_point = None;
        self.surface.fill(self.style.background);
        self.history.commit(self.surface.snapshot());
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => self.surface.restore(snapshot),
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => self.surface.restore(snapshot),
            None => false,
        }
    }

    /// Map an on-screen pointer position into surface pixels.
    pub fn map_pointer(&self, viewport: &Viewport, client_x: f32, client_y: f32) -> Point {
        viewport.to_surface(client_x, client_y, self.surface.width(), self.surface.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> StrokeCanvas {
        StrokeCanvas::new(40, 30, CanvasConfig::default())
    }

    fn scribble(canvas: &mut StrokeCanvas, y: f32) {
        canvas.begin_stroke(Point::new(2.0, y));
        canvas.extend_stroke(Point::new(20.0, y));
        canvas.extend_stroke(Point::new(35.0, y + 3.0));
        canvas.end_stroke();
    }

    #[test]
    fn mount_commits_a_baseline() {
        let canvas = canvas();
        assert_eq!(canvas.history().len(), 1);
        assert_eq!(canvas.history().step(), Some(0));
        assert_eq!(canvas.surface().pixel(0, 0), CanvasConfig::default().background);
    }

    #[test]
    fn pen_paints_ink_and_eraser_clears() {
        let mut canvas = canvas();
        scribble(&mut canvas, 10.0);
        assert_eq!(canvas.surface().pixel(10, 10), [0, 0, 0, 0xff]);

        canvas.set_tool(Tool::Eraser);
        canvas.begin_stroke(Point::new(10.0, 10.0));
        canvas.extend_stroke(Point::new(11.0, 10.0));
        canvas.end_stroke();
        assert_eq!(canvas.surface().pixel(10, 10), [0, 0, 0, 0]);
        assert_eq!(canvas.history().len(), 3);
    }

    #[test]
    fn stray_moves_before_a_press_do_nothing() {
        let mut canvas = canvas();
        let before = canvas.surface().snapshot();
        assert!(!canvas.extend_stroke(Point::new(5.0, 5.0)));
        canvas.end_stroke();
        assert_eq!(canvas.surface().snapshot(), before);
        assert_eq!(canvas.history().len(), 1);
    }

    #[test]
    fn undo_then_redo_restores_each_committed_state() {
        let mut canvas = canvas();
        let mut committed = Vec::new();
        for i in 0..4 {
            scribble(&mut canvas, 4.0 + i as f32 * 5.0);
            committed.push(canvas.surface().snapshot());
        }
        canvas.clear();
        committed.push(canvas.surface().snapshot());

        for _ in 0..committed.len() {
            assert!(canvas.undo());
        }
        assert!(!canvas.undo());
        assert_eq!(canvas.surface().snapshot(), canvas.history().current().unwrap());

        for expected in &committed {
            assert!(canvas.redo());
            assert_eq!(&canvas.surface().snapshot(), expected);
        }
        assert!(!canvas.redo());
    }

    #[test]
    fn new_edit_after_undo_discards_redo() {
        let mut canvas = canvas();
        scribble(&mut canvas, 5.0);
        scribble(&mut canvas, 15.0);
        canvas.undo();
        canvas.undo();

        scribble(&mut canvas, 25.0);
        let tip = canvas.surface().snapshot();
        assert!(!canvas.redo());
        assert_eq!(canvas.surface().snapshot(), tip);
        assert_eq!(canvas.history().len(), 2);
    }

    #[test]
    fn tool_switch_applies_to_following_segments_only() {
        let mut canvas = canvas();
        canvas.begin_stroke(Point::new(2.0, 5.0));
        canvas.extend_stroke(Point::new(38.0, 5.0));
        canvas.set_tool(Tool::Eraser);
        assert_eq!(canvas.surface().pixel(10, 5), [0, 0, 0, 0xff]);
        canvas.extend_stroke(Point::new(38.0, 25.0));
        canvas.end_stroke();
        assert_eq!(canvas.surface().pixel(37, 15), [0, 0, 0, 0]);
        assert_eq!(canvas.surface().pixel(10, 5), [0, 0, 0, 0xff]);
    }

    #[test]
    fn press_and_release_without_moving_still_commits() {
        let mut canvas = canvas();
        let before = canvas.surface().snapshot();
        canvas.begin_stroke(Point::new(5.0, 5.0));
        assert!(canvas.is_drawing());
        canvas.end_stroke();

        assert!(!canvas.is_drawing());
        assert_eq!(canvas.history().len(), 2);
        assert_eq!(canvas.surface().snapshot(), before);
    }

    #[test]
    fn leaving_mid_stroke_commits_once() {
        let mut canvas = canvas();
        canvas.begin_stroke(Point::new(2.0, 10.0));
        canvas.extend_stroke(Point::new(20.0, 10.0));
        canvas.pointer_leave();

        assert!(!canvas.is_drawing());
        assert_eq!(canvas.history().len(), 2);
        assert!(!canvas.extend_stroke(Point::new(30.0, 10.0)));

        canvas.pointer_leave();
        canvas.end_stroke();
        assert_eq!(canvas.history().len(), 2);
        assert!(canvas.undo());
        assert_eq!(canvas.surface().pixel(10, 10), CanvasConfig::default().background);
    }

    #[test]
    fn pointer_mapping_uses_surface_size() {
        let canvas = canvas();
        let viewport = Viewport { left: 0.0, top: 0.0, width: 20.0, height: 15.0 };
        assert_eq!(canvas.map_pointer(&viewport, 10.0, 5.0), Point::new(20.0, 10.0));
    }
}
