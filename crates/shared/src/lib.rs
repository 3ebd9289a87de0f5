use serde::{Deserialize, Serialize};

/// Unique identifier of an object in the scene
pub type ObjectId = String;

/// Lower bound for every scale component. Callers clamp to this floor
/// before submitting an update; the state manager trusts the caller.
pub const MIN_SCALE: f64 = 0.1;

/// Drawing color a fresh editing session starts with
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Primitive shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Pyramid,
}

impl ShapeKind {
    /// All available shape kinds, in toolbar order
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Cube,
            ShapeKind::Sphere,
            ShapeKind::Cylinder,
            ShapeKind::Cone,
            ShapeKind::Pyramid,
        ]
    }
}

/// Transform of an object in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    /// Identity transform at the origin
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// Transform for a newly placed shape: half a unit above the origin
    /// so the default unit shape rests on the ground plane.
    pub fn spawn() -> Self {
        Self {
            position: [0.0, 0.5, 0.0],
            ..Self::new()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// A placed shape in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ObjectId,
    pub kind: ShapeKind,
    #[serde(default)]
    pub transform: Transform,
    /// Hex color string, e.g. "#3b82f6"
    pub color: String,
}

impl Shape {
    /// Build a shape with the default spawn transform. `id` and `kind`
    /// stay fixed for the shape's lifetime.
    pub fn new(id: ObjectId, kind: ShapeKind, color: String) -> Self {
        Self {
            id,
            kind,
            transform: Transform::spawn(),
            color,
        }
    }
}

/// Partial update to a shape; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ShapeUpdate {
    /// Whether this update touches position, rotation, or scale.
    /// Only geometric updates are captured as undo history steps.
    pub fn is_geometric(&self) -> bool {
        self.position.is_some() || self.rotation.is_some() || self.scale.is_some()
    }

    /// Clamp scale components to [`MIN_SCALE`]. Caller-side precondition
    /// enforcement; the state manager itself never re-clamps.
    pub fn clamp_scale(&mut self) {
        if let Some(scale) = &mut self.scale {
            for component in scale.iter_mut() {
                *component = component.max(MIN_SCALE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_transform_rests_on_ground() {
        let t = Transform::spawn();
        assert_eq!(t.position, [0.0, 0.5, 0.0]);
        assert_eq!(t.rotation, [0.0, 0.0, 0.0]);
        assert_eq!(t.scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_update_geometric_detection() {
        let color_only = ShapeUpdate {
            color: Some("#ff0000".to_string()),
            ..Default::default()
        };
        assert!(!color_only.is_geometric());

        let moved = ShapeUpdate {
            position: Some([1.0, 0.0, 0.0]),
            ..Default::default()
        };
        assert!(moved.is_geometric());

        assert!(!ShapeUpdate::default().is_geometric());
    }

    #[test]
    fn test_clamp_scale_floors_components() {
        let mut update = ShapeUpdate {
            scale: Some([0.05, 1.0, -2.0]),
            ..Default::default()
        };
        update.clamp_scale();
        assert_eq!(update.scale, Some([MIN_SCALE, 1.0, MIN_SCALE]));
    }

    #[test]
    fn test_clamp_scale_without_scale_is_noop() {
        let mut update = ShapeUpdate {
            position: Some([1.0, 2.0, 3.0]),
            ..Default::default()
        };
        update.clamp_scale();
        assert_eq!(update.scale, None);
    }

    #[test]
    fn test_shape_kind_serde_snake_case() {
        let json = serde_json::to_string(&ShapeKind::Cube).unwrap();
        assert_eq!(json, "\"cube\"");
        let kind: ShapeKind = serde_json::from_str("\"pyramid\"").unwrap();
        assert_eq!(kind, ShapeKind::Pyramid);
    }

    #[test]
    fn test_shape_roundtrip() {
        let shape = Shape::new("a1".to_string(), ShapeKind::Sphere, "#00ff00".to_string());
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn test_shape_update_partial_deserialize() {
        let update: ShapeUpdate =
            serde_json::from_str(r#"{"position": [1.0, 0.0, 0.0]}"#).unwrap();
        assert_eq!(update.position, Some([1.0, 0.0, 0.0]));
        assert_eq!(update.rotation, None);
        assert_eq!(update.color, None);
    }
}
