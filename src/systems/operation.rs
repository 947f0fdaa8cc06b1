//! Operand flight system.
//!
//! Moves both flying operands along their paths with one shared progress
//! value. On arrival the flyers are removed and the result glyph is dropped
//! into the result box.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::numberbox::{BoxRole, BoxTexts};
use crate::components::operation::OperandFlight;
use crate::components::tween::TweenFinish;
use crate::components::worldposition::WorldPosition;
use crate::events::tween::TweenFinishedEvent;
use crate::game;
use crate::resources::registry::SceneRegistry;
use crate::resources::worldtime::WorldTime;
use crate::systems::tween::{ease, lerp_v3};

pub fn operand_flight_system(
    world_time: Res<WorldTime>,
    registry: Res<SceneRegistry>,
    mut commands: Commands,
    flights: Query<(Entity, &OperandFlight)>,
    mut positions: Query<&mut WorldPosition>,
    mut texts: Query<&mut BoxTexts>,
) {
    let now = world_time.elapsed;
    for (flight_entity, flight) in flights.iter() {
        let t = ease(flight.clock.progress(now));
        for flyer in &flight.flyers {
            if let Ok(mut pos) = positions.get_mut(flyer.entity) {
                pos.pos = lerp_v3(flyer.from, flyer.to, t);
            }
        }
        if !flight.clock.is_done(now) {
            continue;
        }

        for flyer in &flight.flyers {
            commands.entity(flyer.entity).try_despawn();
        }
        commands.entity(flight_entity).despawn();
        debug!("Operands arrived, result {}", flight.result);

        let landed = registry.get(BoxRole::Result).and_then(|result_box| {
            let box_pos = positions.get(result_box).ok()?.pos;
            let mut slots = texts.get_mut(result_box).ok()?;
            game::land_result(
                &mut commands,
                result_box,
                box_pos,
                &mut slots,
                flight.result,
                now,
            );
            Some(())
        });
        if landed.is_none() {
            warn!("Result box is gone, ending operation without a glyph");
            commands.trigger(TweenFinishedEvent {
                entity: flight_entity,
                action: TweenFinish::EndOperation(flight.result),
            });
        }
    }
}
