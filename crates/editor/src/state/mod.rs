pub mod scene;

pub use scene::{kind_display_name, kind_icon, shape_display_name, short_id, SceneState};
