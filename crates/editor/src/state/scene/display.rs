//! Display helper functions for shapes

use shared::{Shape, ShapeKind};

/// Get display name for a shape
pub fn shape_display_name(shape: &Shape) -> String {
    format!("{} ({})", kind_display_name(&shape.kind), short_id(&shape.id))
}

/// Get display name for a shape kind
pub fn kind_display_name(kind: &ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Cube => "Cube",
        ShapeKind::Sphere => "Sphere",
        ShapeKind::Cylinder => "Cylinder",
        ShapeKind::Cone => "Cone",
        ShapeKind::Pyramid => "Pyramid",
    }
}

/// Get toolbar icon for a shape kind
pub fn kind_icon(kind: &ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Cube => "[C]",
        ShapeKind::Sphere => "[S]",
        ShapeKind::Cylinder => "[Y]",
        ShapeKind::Cone => "[K]",
        ShapeKind::Pyramid => "[P]",
    }
}

/// Get shortened ID (first 8 characters). IDs arriving over the JSON
/// protocol are arbitrary strings, so cut on a char boundary.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((index, _)) => &id[..index],
        None => id,
    }
}
