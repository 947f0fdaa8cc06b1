//! F11 debug overlay toggle.
//!
//! [`switch_debug_observer`] inserts [`DebugMode`] when it is missing and
//! removes it when present; the renderer checks for it every frame.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    let enable = debug_mode.is_none();
    if enable {
        commands.insert_resource(DebugMode::default());
    } else {
        commands.remove_resource::<DebugMode>();
    }
    info!("Debug overlay {}", if enable { "on" } else { "off" });
}
