//! Per-frame input snapshot.
//!
//! [`crate::systems::input::update_input_state`] is the only place that
//! polls raylib for pointer and keyboard state. Everything downstream (panel,
//! drag-to-rotate) reads this resource, which keeps those systems runnable
//! without a window.
use bevy_ecs::prelude::*;
use raylib::prelude::{Vector2, Vector3};
use smallvec::SmallVec;

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Pointer position in window pixels. Single-point touch maps onto it.
    pub pointer: Vector2,
    /// Touch points seen last frame.
    pub touches: u32,
    /// Pointer motion since last frame.
    pub pointer_delta: Vector2,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button is held.
    pub down: bool,
    /// Primary button went up this frame.
    pub released: bool,
    /// World-space ray under the pointer.
    pub ray_origin: Vector3,
    pub ray_direction: Vector3,
    /// Characters typed this frame.
    pub typed: SmallVec<[char; 8]>,
    pub backspace: bool,
    pub enter: bool,
    pub tab: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer: Vector2::zero(),
            touches: 0,
            pointer_delta: Vector2::zero(),
            pressed: false,
            down: false,
            released: false,
            ray_origin: Vector3::zero(),
            ray_direction: Vector3 {
                x: 0.0,
                y: 0.0,
                z: -1.0,
            },
            typed: SmallVec::new(),
            backspace: false,
            enter: false,
            tab: false,
        }
    }
}

impl InputState {
    /// Clear the per-frame edges, keeping held state and pointer position.
    pub fn clear_edges(&mut self) {
        self.pointer_delta = Vector2::zero();
        self.pressed = false;
        self.released = false;
        self.typed.clear();
        self.backspace = false;
        self.enter = false;
        self.tab = false;
    }

    /// Mouse state for this frame.
    pub fn apply_mouse(&mut self, position: Vector2, pressed: bool, down: bool, released: bool) {
        self.pointer_delta = position - self.pointer;
        self.pointer = position;
        self.pressed = pressed;
        self.down = down;
        self.released = released;
    }

    /// Touch state for this frame. The first touch point drives the pointer;
    /// press and release come from the touch count crossing zero. Touching
    /// down moves the pointer without producing motion.
    pub fn apply_touch(&mut self, touches: u32, position: Vector2) {
        let was_down = self.touches > 0;
        let is_down = touches > 0;
        if is_down {
            self.pointer_delta = if was_down {
                position - self.pointer
            } else {
                Vector2::zero()
            };
            self.pointer = position;
        } else {
            self.pointer_delta = Vector2::zero();
        }
        self.pressed = is_down && !was_down;
        self.down = is_down;
        self.released = was_down && !is_down;
        self.touches = touches;
    }

    /// Drop this frame's press and Enter so later systems do not act on them.
    pub fn consume_press(&mut self) {
        self.pressed = false;
        self.enter = false;
    }
}
