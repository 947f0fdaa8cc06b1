//! Debug overlay toggle.
//!
//! While this resource exists the renderer draws the ground grid and a
//! diagnostics block (frame rate, sequencer step, live text count). It is
//! inserted at startup by `--debug` and toggled at runtime with F11.

use bevy_ecs::prelude::Resource;

/// Marker resource: present while the debug overlay is on.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DebugMode {}
