use bevy_ecs::prelude::{Entity, Resource};

/// Radians of rotation per pixel of pointer motion.
pub const DRAG_SENSITIVITY: f32 = 0.005;

/// Box currently being rotated by a press-drag-release gesture.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DragState {
    pub selected: Option<Entity>,
}
