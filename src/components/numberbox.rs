//! The three boxes of the scene and the texts they own.
//!
//! Boxes have a fixed role by index: `0` holds the first operand, `1` the
//! second operand and `2` the result. A box is spawned once, when both the
//! font and the model finished loading, and lives for the whole session.
//!
//! Each box owns at most one text per slot in [`BoxTexts`]. A text entity is
//! referenced from exactly one slot at a time; replacing a slot despawns (or
//! retires) the previous occupant first.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::{Color, Vector3};

/// Fixed role of a box in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxRole {
    FirstOperand,
    SecondOperand,
    Result,
}

impl BoxRole {
    pub const ALL: [BoxRole; 3] = [
        BoxRole::FirstOperand,
        BoxRole::SecondOperand,
        BoxRole::Result,
    ];

    /// Stable index of the role (0, 1, 2).
    pub fn index(self) -> usize {
        match self {
            BoxRole::FirstOperand => 0,
            BoxRole::SecondOperand => 1,
            BoxRole::Result => 2,
        }
    }

    /// Label shown above the box before any operation was launched.
    pub fn default_label(self) -> &'static str {
        match self {
            BoxRole::FirstOperand => "number1",
            BoxRole::SecondOperand => "number2",
            BoxRole::Result => "result",
        }
    }

    /// X coordinate of the box centre.
    pub fn x(self) -> f32 {
        match self {
            BoxRole::FirstOperand => -5.0,
            BoxRole::SecondOperand => 0.0,
            BoxRole::Result => 5.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            BoxRole::FirstOperand => Color::new(0x48, 0xd1, 0xcc, 255),
            BoxRole::SecondOperand => Color::new(0xb3, 0xff, 0x66, 255),
            BoxRole::Result => Color::new(0x86, 0x90, 0xe4, 255),
        }
    }
}

/// Marker for a box entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct NumberBox {
    pub role: BoxRole,
}

/// Text slots owned by a box.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BoxTexts {
    /// Role label floating above the box.
    pub label: Option<Entity>,
    /// Numeric glyph resting inside the box.
    pub glyph: Option<Entity>,
    /// Formula above the result box. Always `None` for operand boxes.
    pub formula: Option<Entity>,
}

/// Half extents of the box model, used for pointer picking.
#[derive(Component, Clone, Copy, Debug)]
pub struct BoxShape {
    pub half_extents: Vector3,
}

impl Default for BoxShape {
    fn default() -> Self {
        BoxShape {
            half_extents: Vector3 {
                x: 1.0,
                y: 1.0,
                z: 1.0,
            },
        }
    }
}
