//! Scene systems.
//!
//! This module groups all ECS systems that advance the scene, read input,
//! and render.
//!
//! Submodules overview
//! - [`assets`] – upload background-loaded assets and build the boxes
//! - [`drag`] – pick boxes under the pointer and rotate them while dragged
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`operation`] – fly both operands into the result box
//! - [`panel`] – control panel layout and interaction
//! - [`pendingdrop`] – drop newly entered numbers after their delay
//! - [`render`] – draw boxes, floating texts and the UI using Raylib
//! - [`stuckto`] – keep texts attached to their boxes
//! - [`time`] – update scene time and delta
//! - [`tween`] – animate text offsets and opacity over time

use bevy_ecs::prelude::*;

pub mod assets;
pub mod drag;
pub mod input;
pub mod operation;
pub mod panel;
pub mod pendingdrop;
pub mod render;
pub mod stuckto;
pub mod time;
pub mod tween;

/// The window-independent scene update, in order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneSystems;

/// Add the scene update to `schedule`.
///
/// The systems are chained so commands (and the observers they trigger) from
/// one step are applied before the next step runs: a drop started this frame
/// is positioned this frame, and a finished result glyph releases the
/// sequencer before the frame ends.
pub fn add_scene_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            assets::spawn_boxes_when_ready,
            pendingdrop::pending_drop_system,
            operation::operand_flight_system,
            tween::tween_offset_system,
            tween::tween_opacity_system,
            stuckto::stuck_to_box_system,
        )
            .chain()
            .in_set(SceneSystems),
    );
}
