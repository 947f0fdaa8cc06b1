//! Input systems.
//!
//! - [`update_input_state`] reads mouse, touch and keyboard input from Raylib
//!   each frame and writes the results into
//!   [`crate::resources::input::InputState`].
//! - F11 toggles the debug overlay via
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::camera3d::SceneCamera;
use crate::resources::input::InputState;

/// Poll Raylib for pointer and keyboard input and update the `InputState`
/// resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    camera: Res<SceneCamera>,
    mut commands: Commands,
) {
    input.clear_edges();

    // Touch takes over while a finger is down and for the frame it lifts.
    let touches = rl.get_touch_point_count() as u32;
    if touches > 0 || input.touches > 0 {
        let position = if touches > 0 {
            rl.get_touch_position(0)
        } else {
            input.pointer
        };
        input.apply_touch(touches, position);
    } else {
        input.apply_mouse(
            rl.get_mouse_position(),
            rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
        );
    }

    let ray = rl.get_screen_to_world_ray(input.pointer, camera.0);
    input.ray_origin = ray.position;
    input.ray_direction = ray.direction;

    while let Some(c) = rl.get_char_pressed() {
        input.typed.push(c);
    }
    input.backspace = rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE)
        || rl.is_key_pressed_repeat(KeyboardKey::KEY_BACKSPACE);
    input.enter = rl.is_key_pressed(KeyboardKey::KEY_ENTER)
        || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER);
    input.tab = rl.is_key_pressed(KeyboardKey::KEY_TAB);

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        commands.trigger(SwitchDebugEvent {});
    }
}
