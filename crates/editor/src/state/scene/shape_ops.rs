//! Shape CRUD operations

use shared::{ObjectId, Shape, ShapeKind, ShapeUpdate};

use super::display::{kind_display_name, short_id};
use super::SceneState;

impl SceneState {
    /// Create a new shape drawn in the current color and return its ID.
    /// The new shape becomes the selection.
    pub fn create_shape(&mut self, kind: ShapeKind) -> ObjectId {
        let color = self.current_color.clone();
        self.create_shape_with_color(kind, color)
    }

    /// Create a new shape with an explicit color and return its ID.
    /// The new shape becomes the selection.
    pub fn create_shape_with_color(&mut self, kind: ShapeKind, color: String) -> ObjectId {
        let id = uuid::Uuid::new_v4().to_string();

        self.shapes.push(Shape::new(id.clone(), kind, color));
        self.record_history();
        self.selected = Some(id.clone());
        self.version += 1;

        tracing::debug!("Created {} {}", kind_display_name(&kind), short_id(&id));
        id
    }

    /// Set the selection. No existence check is performed; a stale ID
    /// simply resolves to no shape on the read side. Not recorded in
    /// history.
    pub fn select(&mut self, id: Option<ObjectId>) {
        self.selected = id;
        self.version += 1;
    }

    /// Apply a partial update to a shape; no-op if the ID is unknown.
    ///
    /// Recorded as one history step whenever the update touches position,
    /// rotation, or scale. Color-only updates are not recorded. There is
    /// no drag coalescing here: a caller streaming per-frame transform
    /// updates produces one history entry per call.
    ///
    /// Precondition: scale components are already clamped to the 0.1
    /// floor by the caller.
    pub fn update_shape(&mut self, id: &str, update: ShapeUpdate) {
        let recordable = update.is_geometric();
        let Some(shape) = self.get_shape_mut(id) else {
            return;
        };

        if let Some(position) = update.position {
            shape.transform.position = position;
        }
        if let Some(rotation) = update.rotation {
            shape.transform.rotation = rotation;
        }
        if let Some(scale) = update.scale {
            shape.transform.scale = scale;
        }
        if let Some(color) = update.color {
            shape.color = color;
        }

        if recordable {
            self.record_history();
        }
        self.version += 1;
    }

    /// Remove a shape by ID; no-op if the ID is unknown. Clears the
    /// selection if it pointed at the removed shape.
    pub fn delete_shape(&mut self, id: &str) {
        if !self.shapes.iter().any(|s| s.id == id) {
            return;
        }

        self.shapes.retain(|s| s.id != id);
        self.record_history();
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.version += 1;

        tracing::debug!("Deleted shape {}", short_id(id));
    }

    /// Empty the scene. Always recorded, even when the scene is already
    /// empty; a repeated clear is an acceptable idempotent no-op.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.record_history();
        self.selected = None;
        self.version += 1;

        tracing::debug!("Cleared scene");
    }

    /// Set the ambient drawing color. Applies to newly created shapes
    /// only; existing shapes keep their color. Not recorded in history.
    pub fn set_current_color(&mut self, color: String) {
        self.current_color = color;
        self.version += 1;
    }

    /// Toggle ground-grid visibility. Not recorded in history.
    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
        self.version += 1;
    }
}
