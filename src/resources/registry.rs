//! Registry of the three scene boxes.
//!
//! Boxes are addressed by role rather than by query order so the sequencer
//! always targets the same box for the same operand.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::numberbox::BoxRole;

#[derive(Resource, Debug, Clone, Default)]
pub struct SceneRegistry {
    boxes: [Option<Entity>; 3],
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, role: BoxRole, entity: Entity) {
        self.boxes[role.index()] = Some(entity);
    }

    pub fn get(&self, role: BoxRole) -> Option<Entity> {
        self.boxes[role.index()]
    }

    /// All three boxes, ordered first operand, second operand, result.
    pub fn all(&self) -> Option<[Entity; 3]> {
        match self.boxes {
            [Some(a), Some(b), Some(c)] => Some([a, b, c]),
            _ => None,
        }
    }
}
