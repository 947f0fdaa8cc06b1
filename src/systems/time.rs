//! Scene clock.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::{MAX_FRAME_STEP, WorldTime};

/// Step the scene clock by the raylib frame time.
///
/// The step is clamped to `0..=MAX_FRAME_STEP`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let step = dt.clamp(0.0, MAX_FRAME_STEP);
    let mut clock = world.resource_mut::<WorldTime>();
    clock.delta = step;
    clock.elapsed += step;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_after(steps: &[f32]) -> WorldTime {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        for dt in steps {
            update_world_time(&mut world, *dt);
        }
        *world.resource::<WorldTime>()
    }

    #[test]
    fn long_frames_are_capped() {
        let clock = clock_after(&[2.0]);
        assert!((clock.delta - MAX_FRAME_STEP).abs() < 1e-6);
        assert!((clock.elapsed - MAX_FRAME_STEP).abs() < 1e-6);
    }

    #[test]
    fn negative_frame_time_does_not_rewind() {
        let clock = clock_after(&[0.05, -0.5]);
        assert!((clock.elapsed - 0.05).abs() < 1e-6);
        assert_eq!(clock.delta, 0.0);
    }
}
