//! JSON command protocol for driving the editor headlessly.
//!
//! Each command maps onto one scene-state operation; responses carry a
//! JSON payload for inspection-style commands.

use serde::{Deserialize, Serialize};
use shared::{ShapeKind, ShapeUpdate};

use crate::harness::TestHarness;
use crate::state::scene::{kind_display_name, short_id};

/// A command a script or agent can execute against the editor.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Create a new shape; color falls back to the current drawing color
    CreateShape {
        kind: ShapeKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// Apply a partial update to a shape
    UpdateShape {
        id: String,
        #[serde(flatten)]
        update: ShapeUpdate,
    },
    /// Delete a shape by ID
    DeleteShape { id: String },
    /// Select a shape by ID
    Select { id: String },
    /// Clear selection
    ClearSelection,
    /// Set the ambient drawing color
    SetColor { color: String },
    /// Toggle ground-grid visibility
    ToggleGrid,
    /// Undo the last recorded operation
    Undo,
    /// Redo the last undone operation
    Redo,
    /// Clear the entire scene
    Clear,
    /// Inspect the scene: list all shapes and editor state
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::CreateShape { kind, color } => {
            let id = match color {
                Some(color) => harness.scene.create_shape_with_color(kind, color),
                None => harness.scene.create_shape(kind),
            };
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::UpdateShape { id, mut update } => {
            if harness.scene.get_shape(&id).is_none() {
                tracing::warn!("Update: unknown shape {}", short_id(&id));
                return CommandResponse::err(format!("unknown shape id: {id}"));
            }
            // The scale floor is a caller-side contract; enforce it here
            // before handing the update to the state manager.
            update.clamp_scale();
            harness.scene.update_shape(&id, update);
            CommandResponse::ok()
        }

        EditorCommand::DeleteShape { id } => {
            let existed = harness.scene.get_shape(&id).is_some();
            harness.scene.delete_shape(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": existed }))
        }

        EditorCommand::Select { id } => {
            harness.scene.select(Some(id.clone()));
            CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
        }

        EditorCommand::ClearSelection => {
            harness.scene.select(None);
            CommandResponse::ok()
        }

        EditorCommand::SetColor { color } => {
            harness.scene.set_current_color(color);
            CommandResponse::ok()
        }

        EditorCommand::ToggleGrid => {
            harness.scene.toggle_grid();
            CommandResponse::ok_with_data(
                serde_json::json!({ "grid_visible": harness.scene.grid_visible() }),
            )
        }

        EditorCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::Clear => {
            harness.scene.clear();
            CommandResponse::ok()
        }

        EditorCommand::Inspect => {
            let shapes: Vec<serde_json::Value> = harness
                .scene
                .shapes()
                .iter()
                .map(|shape| {
                    serde_json::json!({
                        "id": shape.id,
                        "kind": kind_display_name(&shape.kind),
                        "position": shape.transform.position,
                        "rotation": shape.transform.rotation,
                        "scale": shape.transform.scale,
                        "color": shape.color,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "shape_count": shapes.len(),
                "shapes": shapes,
                "selected_id": harness.scene.selected(),
                "current_color": harness.scene.current_color(),
                "grid_visible": harness.scene.grid_visible(),
                "can_undo": harness.scene.can_undo(),
                "can_redo": harness.scene.can_redo(),
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_undo() {
        let json = r#"{"command": "undo"}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, EditorCommand::Undo));
    }

    #[test]
    fn test_command_serde_create_shape() {
        let json = r#"{"command": "create_shape", "kind": "cube"}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        match cmd {
            EditorCommand::CreateShape { kind, color } => {
                assert_eq!(kind, ShapeKind::Cube);
                assert!(color.is_none());
            }
            _ => panic!("Expected CreateShape"),
        }
    }

    #[test]
    fn test_command_serde_update_shape_flattened() {
        let json = r#"{"command": "update_shape", "id": "s1", "position": [1.0, 2.0, 3.0]}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        match cmd {
            EditorCommand::UpdateShape { id, update } => {
                assert_eq!(id, "s1");
                assert_eq!(update.position, Some([1.0, 2.0, 3.0]));
                assert!(update.color.is_none());
            }
            _ => panic!("Expected UpdateShape"),
        }
    }

    #[test]
    fn test_execute_create_shape() {
        let mut h = TestHarness::new();
        let json = r##"{"command": "create_shape", "kind": "sphere", "color": "#ff0000"}"##;

        let resp = execute_json(&mut h, json).unwrap();
        assert!(resp.success);
        let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();
        assert_eq!(h.scene.get_shape(&id).unwrap().color, "#ff0000");
    }

    #[test]
    fn test_execute_update_unknown_shape_fails() {
        let mut h = TestHarness::new();
        let json = r#"{"command": "update_shape", "id": "missing", "position": [1, 0, 0]}"#;

        let resp = execute_json(&mut h, json).unwrap();
        assert!(!resp.success);
        assert!(resp.error.unwrap().contains("unknown shape id"));
    }

    #[test]
    fn test_execute_update_clamps_scale() {
        let mut h = TestHarness::new();
        let id = h.create_cube();
        let json = format!(
            r#"{{"command": "update_shape", "id": "{id}", "scale": [0.01, 1.0, 1.0]}}"#
        );

        let resp = execute_json(&mut h, &json).unwrap();
        assert!(resp.success);
        assert_eq!(
            h.scene.get_shape(&id).unwrap().transform.scale,
            [0.1, 1.0, 1.0]
        );
    }

    #[test]
    fn test_execute_delete_reports_removal() {
        let mut h = TestHarness::new();
        let id = h.create_cube();

        let json = format!(r#"{{"command": "delete_shape", "id": "{id}"}}"#);
        let resp = execute_json(&mut h, &json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap()["removed"], true);

        let resp = execute_json(&mut h, &json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap()["removed"], false);
    }

    #[test]
    fn test_execute_undo_redo() {
        let mut h = TestHarness::new();
        h.create_cube();

        let resp = execute_json(&mut h, r#"{"command": "undo"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap()["undone"], true);
        assert_eq!(h.shape_count(), 0);

        let resp = execute_json(&mut h, r#"{"command": "redo"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap()["redone"], true);
        assert_eq!(h.shape_count(), 1);
    }

    #[test]
    fn test_invalid_json_error() {
        let mut h = TestHarness::new();
        let result = execute_json(&mut h, "not valid json");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid command JSON"));
    }
}
