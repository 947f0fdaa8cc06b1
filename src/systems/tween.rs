//! Tween animation systems.
//!
//! These systems sample tween components against the scene clock:
//! - [`tween_offset_system`] – animates the offset of a [`StuckTo`]
//! - [`tween_opacity_system`] – animates [`FloatingText::opacity`]
//!
//! A tween whose generation no longer matches its text is dropped without
//! touching the text. A tween that reaches its end writes the final value,
//! removes itself and, if it carries a finish action, triggers a
//! [`TweenFinishedEvent`].

use crate::components::floatingtext::FloatingText;
use crate::components::stuckto::StuckTo;
use crate::components::tween::{TweenFinish, TweenOffset, TweenOpacity};
use crate::events::tween::TweenFinishedEvent;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::trace;
use raylib::math::Vector3;

/// Quadratic ease-in-out: `2t²` below one half, `-1 + (4 - 2t)t` above.
/// `t` is clamped to [0, 1] first.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two 3D vectors.
pub(crate) fn lerp_v3(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    Vector3 {
        x: lerp_f32(a.x, b.x, t),
        y: lerp_f32(a.y, b.y, t),
        z: lerp_f32(a.z, b.z, t),
    }
}

fn finish(commands: &mut Commands, entity: Entity, action: TweenFinish) {
    if action != TweenFinish::Nothing {
        commands.trigger(TweenFinishedEvent { entity, action });
    }
}

/// Animate text offsets based on [`TweenOffset`] components.
pub fn tween_offset_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut StuckTo, &FloatingText, &TweenOffset)>,
) {
    let now = world_time.elapsed;
    for (entity, mut stuck, text, tw) in query.iter_mut() {
        if tw.generation != text.generation {
            trace!("Dropping stale offset tween on {:?}", entity);
            commands.entity(entity).try_remove::<TweenOffset>();
            continue;
        }
        let t = ease(tw.clock.progress(now));
        stuck.offset.y = lerp_f32(tw.from, tw.to, t);
        if tw.clock.is_done(now) {
            commands.entity(entity).try_remove::<TweenOffset>();
            finish(&mut commands, entity, tw.on_finish);
        }
    }
}

/// Animate text opacity based on [`TweenOpacity`] components.
pub fn tween_opacity_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut FloatingText, &TweenOpacity)>,
) {
    let now = world_time.elapsed;
    for (entity, mut text, tw) in query.iter_mut() {
        if tw.generation != text.generation {
            trace!("Dropping stale opacity tween on {:?}", entity);
            commands.entity(entity).try_remove::<TweenOpacity>();
            continue;
        }
        let t = ease(tw.clock.progress(now));
        text.opacity = lerp_f32(tw.from, tw.to, t);
        if tw.clock.is_done(now) {
            commands.entity(entity).try_remove::<TweenOpacity>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::floatingtext::TextKind;
    use crate::components::tween::TweenClock;
    use raylib::prelude::Color;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_endpoints() {
        assert!(approx_eq(ease(0.0), 0.0));
        assert!(approx_eq(ease(1.0), 1.0));
        assert!(approx_eq(ease(0.5), 0.5));
    }

    #[test]
    fn test_ease_clamps_out_of_range() {
        assert!(approx_eq(ease(-0.5), 0.0));
        assert!(approx_eq(ease(1.5), 1.0));
    }

    #[test]
    fn test_ease_is_symmetric() {
        assert!(approx_eq(ease(0.25), 0.125));
        assert!(approx_eq(ease(0.25) + ease(0.75), 1.0));
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease(i as f32 / 100.0);
            assert!(v >= prev - EPSILON, "decreased at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_lerp_v3_midpoint() {
        let a = Vector3::new(-5.0, 0.3, 0.0);
        let b = Vector3::new(5.0, 0.3, 2.0);
        let m = lerp_v3(a, b, 0.5);
        assert!(approx_eq(m.x, 0.0));
        assert!(approx_eq(m.y, 0.3));
        assert!(approx_eq(m.z, 1.0));
    }

    // ==================== SYSTEM TESTS ====================

    #[derive(Resource, Default)]
    struct Finished(Vec<(Entity, TweenFinish)>);

    fn setup() -> (World, Schedule) {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(Finished::default());
        world.add_observer(|ev: On<TweenFinishedEvent>, mut log: ResMut<Finished>| {
            log.0.push((ev.entity, ev.action));
        });
        let mut schedule = Schedule::default();
        schedule.add_systems((tween_offset_system, tween_opacity_system));
        (world, schedule)
    }

    fn glyph(world: &mut World, tween: TweenOffset) -> Entity {
        let anchor = world.spawn_empty().id();
        world
            .spawn((
                FloatingText::new("7", TextKind::Glyph, Color::YELLOW),
                StuckTo::inside(anchor, tween.from),
                tween,
            ))
            .id()
    }

    #[test]
    fn offset_tween_reaches_target_and_reports() {
        let (mut world, mut schedule) = setup();
        let e = glyph(
            &mut world,
            TweenOffset::new(1.5, 0.3, TweenClock::starting_at(0.0, 1.0))
                .with_finish(TweenFinish::Despawn),
        );

        world.resource_mut::<WorldTime>().elapsed = 0.5;
        schedule.run(&mut world);
        let mid = world.get::<StuckTo>(e).unwrap().offset.y;
        assert!(approx_eq(mid, 0.9));
        assert!(world.get::<TweenOffset>(e).is_some());

        world.resource_mut::<WorldTime>().elapsed = 1.2;
        schedule.run(&mut world);
        assert!(approx_eq(world.get::<StuckTo>(e).unwrap().offset.y, 0.3));
        assert!(world.get::<TweenOffset>(e).is_none());
        assert_eq!(
            world.resource::<Finished>().0,
            vec![(e, TweenFinish::Despawn)]
        );
    }

    #[test]
    fn stale_tween_leaves_text_alone() {
        let (mut world, mut schedule) = setup();
        let e = glyph(
            &mut world,
            TweenOffset::new(1.5, 0.3, TweenClock::starting_at(0.0, 1.0))
                .with_finish(TweenFinish::Despawn),
        );
        world.get_mut::<FloatingText>(e).unwrap().retire();

        world.resource_mut::<WorldTime>().elapsed = 2.0;
        schedule.run(&mut world);
        assert!(approx_eq(world.get::<StuckTo>(e).unwrap().offset.y, 1.5));
        assert!(world.get::<TweenOffset>(e).is_none());
        assert!(world.resource::<Finished>().0.is_empty());
    }

    #[test]
    fn opacity_tween_fades_out() {
        let (mut world, mut schedule) = setup();
        let e = world
            .spawn((
                FloatingText::new("3", TextKind::Glyph, Color::YELLOW),
                TweenOpacity::new(1.0, 0.0, TweenClock::starting_at(0.0, 1.0)),
            ))
            .id();
        world.resource_mut::<WorldTime>().elapsed = 1.0;
        schedule.run(&mut world);
        assert!(approx_eq(world.get::<FloatingText>(e).unwrap().opacity, 0.0));
        assert!(world.get::<TweenOpacity>(e).is_none());
        // No finish action, no event.
        assert!(world.resource::<Finished>().0.is_empty());
    }
}
