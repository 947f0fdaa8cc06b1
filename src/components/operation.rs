//! Operand flight component.
//!
//! When an operation is launched, copies of both operands fly from their
//! boxes into the result box. Both glyphs are driven by one [`OperandFlight`]
//! with a single clock, so every frame they are placed with the same
//! progress value and land on the same frame.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector3;

use crate::components::tween::TweenClock;

/// One flying glyph and its straight path.
#[derive(Clone, Copy, Debug)]
pub struct Flyer {
    pub entity: Entity,
    pub from: Vector3,
    pub to: Vector3,
}

#[derive(Component, Clone, Debug)]
pub struct OperandFlight {
    pub flyers: [Flyer; 2],
    pub clock: TweenClock,
    /// Value written into the result box on arrival.
    pub result: i64,
}
