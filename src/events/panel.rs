//! Control panel visibility toggle, used by the menu button on compact
//! windows.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::controlpanel::ControlPanel;

#[derive(Event, Debug, Clone, Copy)]
pub struct TogglePanelEvent {}

pub fn toggle_panel_observer(_trigger: On<TogglePanelEvent>, mut panel: ResMut<ControlPanel>) {
    panel.open = !panel.open;
}
