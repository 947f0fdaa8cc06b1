//! Countdown of delayed glyph drops.
//!
//! See [`PendingDrop`] for the timing. When the delay elapses the new glyph
//! is dropped into the box through [`game::drop_glyph`].

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::numberbox::BoxTexts;
use crate::components::pendingdrop::PendingDrop;
use crate::components::worldposition::WorldPosition;
use crate::game;
use crate::resources::worldtime::WorldTime;

pub fn pending_drop_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut boxes: Query<(Entity, &WorldPosition, &mut BoxTexts, &mut PendingDrop)>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, pos, mut texts, mut pending) in boxes.iter_mut() {
        pending.remaining -= dt;
        if pending.remaining > 0.0 {
            continue;
        }
        debug!("Dropping {} into {:?}", pending.value, entity);
        commands.entity(entity).remove::<PendingDrop>();
        game::drop_glyph(
            &mut commands,
            entity,
            pos.pos,
            &mut texts,
            pending.value,
            world_time.elapsed,
        );
    }
}
