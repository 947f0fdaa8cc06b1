//! System for keeping texts attached to their boxes.
//!
//! This system updates the [`WorldPosition`] of entities with the [`StuckTo`]
//! component to follow their target box.
//!
//! # Related
//!
//! - [`StuckTo`](crate::components::stuckto::StuckTo) – the attachment component
//! - [`crate::systems::tween::tween_offset_system`] – animates the offset

use bevy_ecs::prelude::*;

use crate::components::rotation::Rotation;
use crate::components::stuckto::StuckTo;
use crate::components::worldposition::WorldPosition;

/// Updates positions of entities with `StuckTo` to follow their targets.
///
/// The offset is rotated by the target's [`Rotation`] when
/// `rotate_with_target` is set. Followers whose target is gone keep their
/// last position.
pub fn stuck_to_box_system(
    mut followers: Query<(&StuckTo, &mut WorldPosition)>,
    targets: Query<(&WorldPosition, Option<&Rotation>), Without<StuckTo>>,
) {
    for (stuck_to, mut follower_pos) in followers.iter_mut() {
        let Ok((target_pos, rotation)) = targets.get(stuck_to.target) else {
            continue;
        };
        let offset = match rotation {
            Some(r) if stuck_to.rotate_with_target => r.rotate_vector(stuck_to.offset),
            _ => stuck_to.offset,
        };
        follower_pos.pos = target_pos.pos + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn follows_target_with_offset() {
        let mut world = World::new();
        let target = world.spawn(WorldPosition::new(5.0, 0.0, 0.0)).id();
        let label = world
            .spawn((StuckTo::above(target, 1.5), WorldPosition::new(0.0, 0.0, 0.0)))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(stuck_to_box_system);
        schedule.run(&mut world);

        let pos = world.get::<WorldPosition>(label).unwrap().pos;
        assert!(approx_eq(pos.x, 5.0));
        assert!(approx_eq(pos.y, 1.5));
    }

    #[test]
    fn inside_offset_follows_rotation() {
        let mut world = World::new();
        let target = world
            .spawn((
                WorldPosition::new(0.0, 0.0, 0.0),
                Rotation {
                    pitch: std::f32::consts::FRAC_PI_2,
                    yaw: 0.0,
                },
            ))
            .id();
        let glyph = world
            .spawn((StuckTo::inside(target, 1.0), WorldPosition::new(0.0, 0.0, 0.0)))
            .id();
        let label = world
            .spawn((StuckTo::above(target, 1.0), WorldPosition::new(0.0, 0.0, 0.0)))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(stuck_to_box_system);
        schedule.run(&mut world);

        // Pitching a quarter turn tips local up onto +Z.
        let g = world.get::<WorldPosition>(glyph).unwrap().pos;
        assert!(approx_eq(g.y, 0.0));
        assert!(approx_eq(g.z, 1.0));
        // Labels ignore the orientation.
        let l = world.get::<WorldPosition>(label).unwrap().pos;
        assert!(approx_eq(l.y, 1.0));
    }

    #[test]
    fn missing_target_keeps_position() {
        let mut world = World::new();
        let gone = world.spawn_empty().id();
        world.despawn(gone);
        let e = world
            .spawn((StuckTo::above(gone, 1.0), WorldPosition::new(1.0, 2.0, 3.0)))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(stuck_to_box_system);
        schedule.run(&mut world);
        let pos = world.get::<WorldPosition>(e).unwrap().pos;
        assert!(approx_eq(pos.y, 2.0));
    }
}
