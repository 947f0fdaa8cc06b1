//! Tween completion events.
//!
//! Tweens created with a [`TweenFinish`] action other than `Nothing` trigger
//! a [`TweenFinishedEvent`] when they end. [`tween_finished_observer`] carries
//! the action out.
//!
//! # Related
//!
//! - [`crate::systems::tween`] – the systems that emit these events
//! - [`crate::systems::operation`] – ends the operation directly when the
//!   result box is gone

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::tween::TweenFinish;
use crate::resources::sequencer::Sequencer;

/// Event emitted when a tween with a finish action reaches its end.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenFinishedEvent {
    /// The animated entity.
    pub entity: Entity,
    pub action: TweenFinish,
}

/// Despawns faded texts and releases the sequencer when the result landed.
pub fn tween_finished_observer(
    trigger: On<TweenFinishedEvent>,
    mut commands: Commands,
    mut sequencer: ResMut<Sequencer>,
) {
    match trigger.action {
        TweenFinish::Nothing => {}
        TweenFinish::Despawn => {
            debug!("Despawning faded text {:?}", trigger.entity);
            commands.entity(trigger.entity).try_despawn();
        }
        TweenFinish::EndOperation(result) => {
            sequencer.finish_operation(result);
            info!("Operation finished with {}", result);
        }
    }
}
