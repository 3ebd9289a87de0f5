//! Headless test harness for programmatic scene manipulation.
//!
//! Owns one [`SceneState`] per editing session and layers on the
//! keyboard-collaborator policies (Delete removes the selected shape,
//! Escape deselects). Used by the command executor and integration tests.

use shared::{ObjectId, ShapeKind, ShapeUpdate};

use crate::state::scene::SceneState;

/// Headless harness around a single scene-state session
pub struct TestHarness {
    pub scene: SceneState,
}

impl TestHarness {
    /// Create a new empty harness.
    pub fn new() -> Self {
        Self {
            scene: SceneState::new(),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Create a shape of the given kind and return its ID
    pub fn create_shape(&mut self, kind: ShapeKind) -> ObjectId {
        self.scene.create_shape(kind)
    }

    /// Create a cube and return its ID
    pub fn create_cube(&mut self) -> ObjectId {
        self.create_shape(ShapeKind::Cube)
    }

    /// Create a sphere and return its ID
    pub fn create_sphere(&mut self) -> ObjectId {
        self.create_shape(ShapeKind::Sphere)
    }

    /// Create a cylinder and return its ID
    pub fn create_cylinder(&mut self) -> ObjectId {
        self.create_shape(ShapeKind::Cylinder)
    }

    /// Create a cone and return its ID
    pub fn create_cone(&mut self) -> ObjectId {
        self.create_shape(ShapeKind::Cone)
    }

    /// Create a pyramid and return its ID
    pub fn create_pyramid(&mut self) -> ObjectId {
        self.create_shape(ShapeKind::Pyramid)
    }

    /// Move a shape to an absolute position
    pub fn move_shape(&mut self, id: &str, position: [f64; 3]) {
        self.scene.update_shape(
            id,
            ShapeUpdate {
                position: Some(position),
                ..Default::default()
            },
        );
    }

    /// Recolor a shape (not a history step)
    pub fn recolor_shape(&mut self, id: &str, color: &str) {
        self.scene.update_shape(
            id,
            ShapeUpdate {
                color: Some(color.to_string()),
                ..Default::default()
            },
        );
    }

    /// Number of live shapes
    pub fn shape_count(&self) -> usize {
        self.scene.shapes().len()
    }

    /// Undo; returns whether a step was available
    pub fn undo(&mut self) -> bool {
        if !self.scene.can_undo() {
            return false;
        }
        self.scene.undo();
        true
    }

    /// Redo; returns whether a step was available
    pub fn redo(&mut self) -> bool {
        if !self.scene.can_redo() {
            return false;
        }
        self.scene.redo();
        true
    }

    // ── Keyboard policy ───────────────────────────────────────

    /// Delete key: remove the currently selected shape, if any
    pub fn press_delete(&mut self) {
        if let Some(id) = self.scene.selected().cloned() {
            self.scene.delete_shape(&id);
        }
    }

    /// Escape key: clear the selection
    pub fn press_escape(&mut self) {
        self.scene.select(None);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
