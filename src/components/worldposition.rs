use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// World-space position of an entity (box centre, text anchor, flying glyph).
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vector3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        WorldPosition {
            pos: Vector3 { x, y, z },
        }
    }

    pub fn from_vec(pos: Vector3) -> Self {
        WorldPosition { pos }
    }
}
