//! Drag-to-rotate.
//!
//! Pressing the pointer over a box selects it; moving while held rotates it
//! (horizontal motion about the vertical axis, vertical motion about the
//! horizontal axis); releasing ends the gesture. Presses over the control
//! panel or while an alert is shown never select a box.

use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::Vector3;

use crate::components::numberbox::{BoxShape, NumberBox};
use crate::components::rotation::Rotation;
use crate::components::worldposition::WorldPosition;
use crate::resources::alert::Alert;
use crate::resources::controlpanel::ControlPanel;
use crate::resources::drag::{DRAG_SENSITIVITY, DragState};
use crate::resources::input::InputState;
use crate::resources::windowsize::WindowSize;
use crate::systems::panel::PanelLayout;

/// Distance along the ray to an axis-aligned box centred on the origin, or
/// `None` if the ray misses. A ray starting inside the box hits at 0.
pub fn ray_box_distance(origin: Vector3, dir: Vector3, half: Vector3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for (o, d, h) in [
        (origin.x, dir.x, half.x),
        (origin.y, dir.y, half.y),
        (origin.z, dir.z, half.z),
    ] {
        if d.abs() < f32::EPSILON {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        None
    } else {
        Some(t_near.max(0.0))
    }
}

pub fn drag_rotate_system(
    input: Res<InputState>,
    window: Res<WindowSize>,
    panel: Res<ControlPanel>,
    alert: Option<Res<Alert>>,
    mut drag: ResMut<DragState>,
    mut boxes: Query<(Entity, &WorldPosition, &BoxShape, &mut Rotation), With<NumberBox>>,
) {
    if input.pressed {
        drag.selected = None;
        let over_ui = PanelLayout::compute(*window, panel.open).captures(input.pointer);
        if alert.is_none() && !over_ui {
            drag.selected = boxes
                .iter()
                .filter_map(|(entity, pos, shape, rot)| {
                    // Test in the box's local frame so rotated boxes pick correctly.
                    let origin = rot.inverse_rotate_vector(input.ray_origin - pos.pos);
                    let dir = rot.inverse_rotate_vector(input.ray_direction);
                    ray_box_distance(origin, dir, shape.half_extents).map(|t| (entity, t))
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(entity, _)| entity);
            if let Some(e) = drag.selected {
                trace!("Dragging {:?}", e);
            }
        }
    }

    let Some(selected) = drag.selected else {
        return;
    };
    if input.released || !input.down {
        drag.selected = None;
        return;
    }
    if let Ok((_, _, _, mut rot)) = boxes.get_mut(selected) {
        rot.yaw += input.pointer_delta.x * DRAG_SENSITIVITY;
        rot.pitch += input.pointer_delta.y * DRAG_SENSITIVITY;
    }
}
