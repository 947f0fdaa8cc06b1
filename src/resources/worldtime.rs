use bevy_ecs::prelude::Resource;

/// Longest step the scene clock takes in one frame, in seconds.
///
/// A window drag or a slow first frame would otherwise jump every running
/// tween straight to its end.
pub const MAX_FRAME_STEP: f32 = 0.1;

/// Scene clock in seconds.
///
/// Tweens store the `elapsed` value at which they started and compare it with
/// the current `elapsed` every frame, so tests can drive animations by
/// writing this resource directly.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
}

