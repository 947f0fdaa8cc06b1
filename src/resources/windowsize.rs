//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels. Updated each frame to
//! handle window resizing; the panel layout reads it to decide between the
//! wide layout and the collapsible compact one.

use bevy_ecs::prelude::Resource;

/// Windows narrower than this use the collapsible control panel.
pub const COMPACT_WIDTH: i32 = 900;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    pub fn is_compact(&self) -> bool {
        self.w < COMPACT_WIDTH
    }
}
