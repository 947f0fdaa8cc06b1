//! Box opacity toggle.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::transparency::Transparency;

/// Switches the boxes between opaque and translucent.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleOpacityEvent {}

pub fn toggle_opacity_observer(
    _trigger: On<ToggleOpacityEvent>,
    mut transparency: ResMut<Transparency>,
) {
    transparency.translucent = !transparency.translucent;
    debug!("Boxes translucent: {}", transparency.translucent);
}
