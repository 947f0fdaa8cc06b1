//! Delayed glyph drop.
//!
//! Entering a number first lets the old glyph rise out of the box, then,
//! after a fixed delay, drops the new one in. The delay is a plain countdown
//! on the box; entering another number for the same box before it elapses
//! replaces the pending value.

use bevy_ecs::prelude::Component;

/// Seconds between the start of the rise and the start of the drop.
pub const DROP_DELAY_SECONDS: f32 = 1.0;

#[derive(Component, Clone, Copy, Debug)]
pub struct PendingDrop {
    pub value: i64,
    /// Remaining time in seconds.
    pub remaining: f32,
}

impl PendingDrop {
    pub fn new(value: i64) -> Self {
        PendingDrop {
            value,
            remaining: DROP_DELAY_SECONDS,
        }
    }
}
