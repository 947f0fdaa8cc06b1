//! Component for attaching a text to a box.
//!
//! When an entity has the [`StuckTo`] component, a system copies the target
//! box's world position every frame and adds the offset, so labels, formulas
//! and glyphs stay attached while boxes are dragged and rotated.
//!
//! Labels and formulas keep a plain world-space offset above the box. Glyphs
//! live inside the box and set `rotate_with_target` so their offset follows
//! the box orientation.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector3;

/// Component that makes an entity follow a box's position.
#[derive(Debug, Clone, Component)]
pub struct StuckTo {
    /// The entity to follow.
    pub target: Entity,
    /// Offset from the target's position.
    pub offset: Vector3,
    /// If true, the offset is rotated by the target's [`Rotation`](super::rotation::Rotation).
    pub rotate_with_target: bool,
}

impl StuckTo {
    /// Follow `target` at a vertical offset, ignoring its orientation.
    pub fn above(target: Entity, height: f32) -> Self {
        Self {
            target,
            offset: Vector3 {
                x: 0.0,
                y: height,
                z: 0.0,
            },
            rotate_with_target: false,
        }
    }

    /// Follow `target` at a vertical offset in the target's local frame.
    pub fn inside(target: Entity, height: f32) -> Self {
        Self {
            rotate_with_target: true,
            ..Self::above(target, height)
        }
    }
}
