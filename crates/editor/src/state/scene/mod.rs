//! Scene state management
//!
//! This module provides the live shape collection with selection, ambient
//! edit state, and a bounded linear undo/redo history of scene snapshots.

mod display;
mod history;
mod shape_ops;

pub use display::{kind_display_name, kind_icon, shape_display_name, short_id};

use shared::{ObjectId, Shape, DEFAULT_COLOR};

/// Full copy of the shape collection at one history step.
/// Stored snapshots are never edited in place.
pub type SceneSnapshot = Vec<Shape>;

/// Oldest snapshots are evicted once the history grows past this
const MAX_HISTORY: usize = 50;

/// Scene state with shapes, selection, and undo/redo history.
///
/// One instance owns the whole editing session; collaborators read the
/// accessors and call the mutation operations, never touching fields
/// directly.
pub struct SceneState {
    /// Live shape collection, in creation order
    shapes: Vec<Shape>,
    /// Currently selected shape, if any
    selected: Option<ObjectId>,
    /// Color applied to newly created shapes
    current_color: String,
    /// Ground-grid visibility toggle; orthogonal to shapes and history
    grid_visible: bool,
    /// Snapshot per recorded mutation, oldest first
    history: Vec<SceneSnapshot>,
    /// Index of the snapshot matching the live collection
    history_index: usize,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl SceneState {
    /// Empty scene with one initial empty snapshot.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            current_color: DEFAULT_COLOR.to_string(),
            grid_visible: true,
            history: vec![Vec::new()],
            history_index: 0,
            version: 0,
        }
    }

    /// Current ordered shape collection
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Currently selected shape ID, if any
    pub fn selected(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    /// Resolve the selection to a live shape. A selection pointing at a
    /// shape that no longer exists reads as no selection.
    pub fn selected_shape(&self) -> Option<&Shape> {
        let id = self.selected.as_deref()?;
        self.get_shape(id)
    }

    /// Ambient drawing color for newly created shapes
    pub fn current_color(&self) -> &str {
        &self.current_color
    }

    /// Whether the ground grid is shown
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Current scene version (increments on every observable mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get a shape by ID
    pub fn get_shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Get mutable shape by ID
    pub(crate) fn get_shape_mut(&mut self, id: &str) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Capture the live collection as the new tip of history: drop any
    /// redo tail past the cursor, append a snapshot, and evict the oldest
    /// entry (shifting the cursor) once past [`MAX_HISTORY`].
    pub(crate) fn record_history(&mut self) {
        self.history.truncate(self.history_index + 1);
        self.history.push(self.shapes.clone());
        self.history_index = self.history.len() - 1;
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
            self.history_index -= 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }

    #[cfg(test)]
    pub(crate) fn history_index(&self) -> usize {
        self.history_index
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
