/// Linear undo/redo over full-surface snapshots.
///
/// `step` always points at the snapshot that matches the visible surface.
/// Committing after an undo discards everything beyond the cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Vec<u8>>,
    step: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Cursor into the history; `None` before the first commit.
    pub fn step(&self) -> Option<usize> {
        if self.snapshots.is_empty() {
            None
        } else {
            Some(self.step)
        }
    }

    pub fn commit(&mut self, snapshot: Vec<u8>) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.step + 1);
        }
        self.snapshots.push(snapshot);
        self.step = self.snapshots.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty() && self.step > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.step + 1 < self.snapshots.len()
    }

    /// Step back; returns the snapshot to redraw, or `None` at the boundary.
    pub fn undo(&mut self) -> Option<&[u8]> {
        if !self.can_undo() {
            return None;
        }
        self.step -= 1;
        self.current()
    }

    /// Step forward; returns the snapshot to redraw, or `None` at the boundary.
    pub fn redo(&mut self) -> Option<&[u8]> {
        if !self.can_redo() {
            return None;
        }
        self.step += 1;
        self.current()
    }

    pub fn current(&self) -> Option<&[u8]> {
        self.snapshots.get(self.step).map(Vec::as_slice)
    }
}
