//! Undo/redo functionality

use super::SceneState;

impl SceneState {
    /// Undo last recorded change. Restores a copy of the previous
    /// snapshot and clears the selection; no-op at the start of history.
    pub fn undo(&mut self) {
        if self.history_index == 0 {
            return;
        }
        self.history_index -= 1;
        self.shapes = self.history[self.history_index].clone();
        self.selected = None;
        self.version += 1;
    }

    /// Redo last undone change. Restores a copy of the next snapshot and
    /// clears the selection; no-op at the tail of history.
    pub fn redo(&mut self) {
        if self.history_index + 1 >= self.history.len() {
            return;
        }
        self.history_index += 1;
        self.shapes = self.history[self.history_index].clone();
        self.selected = None;
        self.version += 1;
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }
}
