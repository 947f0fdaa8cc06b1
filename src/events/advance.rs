//! Step advance event.
//!
//! The main button (or Enter) triggers an [`AdvanceEvent`]. The observer
//! validates the current step against the panel inputs, checks the scene is
//! ready, starts the matching animation and only then moves the sequencer
//! forward. A rejected advance changes nothing; user-facing rejections are
//! shown through an [`AlertEvent`].
//!
//! | Step             | Accepted when                   | Effect                           |
//! |------------------|---------------------------------|----------------------------------|
//! | `AwaitFirst`     | first input parses              | glyph swap in the first box      |
//! | `AwaitSecond`    | second input parses             | glyph swap in the second box     |
//! | `AwaitOperator`  | operator is `+` or `-`          | code echo only                   |
//! | `AwaitLaunch`    | all inputs valid, font loaded   | operand flight and result label  |

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector3;

use crate::components::floatingtext::FloatingText;
use crate::components::numberbox::{BoxTexts, NumberBox};
use crate::components::stuckto::StuckTo;
use crate::components::worldposition::WorldPosition;
use crate::events::alert::AlertEvent;
use crate::game::{self, OperationBox};
use crate::resources::assetjoin::AssetJoin;
use crate::resources::controlpanel::ControlPanel;
use crate::resources::registry::SceneRegistry;
use crate::resources::sequencer::{SequenceError, Sequencer, StepAction};
use crate::resources::worldtime::WorldTime;

#[derive(Event, Debug, Clone, Copy)]
pub struct AdvanceEvent {}

fn reject(commands: &mut Commands, err: SequenceError) {
    if err.is_user_facing() {
        commands.trigger(AlertEvent::new(err.to_string()));
    } else {
        debug!("Advance ignored: {}", err);
    }
}

#[allow(clippy::too_many_arguments)]
pub fn advance_observer(
    _trigger: On<AdvanceEvent>,
    mut commands: Commands,
    mut sequencer: ResMut<Sequencer>,
    mut panel: ResMut<ControlPanel>,
    registry: Res<SceneRegistry>,
    assets: Res<AssetJoin>,
    world_time: Res<WorldTime>,
    mut boxes: Query<(&WorldPosition, &mut BoxTexts), With<NumberBox>>,
    mut glyphs: Query<(&mut FloatingText, &StuckTo)>,
) {
    let action = match sequencer.plan(&panel.inputs()) {
        Ok(action) => action,
        Err(err) => {
            reject(&mut commands, err);
            return;
        }
    };

    let Some(box_entities) = registry.all() else {
        reject(&mut commands, SequenceError::SceneNotReady);
        return;
    };
    let font_ready = assets.font_ready();
    if matches!(action, StepAction::Launch { .. }) && !font_ready {
        reject(&mut commands, SequenceError::FontNotLoaded);
        return;
    }
    let Ok(snapshot) = boxes.get_many(box_entities) else {
        reject(&mut commands, SequenceError::SceneNotReady);
        return;
    };
    let mut slots: [(Vector3, BoxTexts); 3] = snapshot.map(|(pos, texts)| (pos.pos, *texts));

    let [first_e, second_e, result_e] = box_entities;
    let now = world_time.elapsed;
    match action {
        StepAction::DropFirst(value) => {
            panel.echo.first = value.to_string();
            game::animate_number_input(
                &mut commands,
                first_e,
                &mut slots[0].1,
                &mut glyphs,
                value,
                now,
            );
        }
        StepAction::DropSecond(value) => {
            panel.echo.second = value.to_string();
            game::animate_number_input(
                &mut commands,
                second_e,
                &mut slots[1].1,
                &mut glyphs,
                value,
                now,
            );
        }
        StepAction::ChooseOperator(operator) => {
            panel.echo.operator = operator.symbol().to_string();
        }
        StepAction::Launch {
            first,
            second,
            operator,
            result,
        } => {
            panel.echo.first = first.to_string();
            panel.echo.second = second.to_string();
            panel.echo.operator = operator.symbol().to_string();
            panel.echo.result_name = operator.result_name().to_string();

            let [(first_pos, first_texts), (second_pos, second_texts), (result_pos, result_texts)] =
                &mut slots;
            game::update_label(
                &mut commands,
                font_ready,
                result_e,
                *result_pos,
                result_texts,
                operator.result_name(),
            );
            game::clear_glyph(&mut commands, result_e, result_texts);
            game::animate_operation(
                &mut commands,
                font_ready,
                OperationBox {
                    entity: first_e,
                    pos: *first_pos,
                    texts: first_texts,
                },
                OperationBox {
                    entity: second_e,
                    pos: *second_pos,
                    texts: second_texts,
                },
                OperationBox {
                    entity: result_e,
                    pos: *result_pos,
                    texts: result_texts,
                },
                first,
                second,
                operator,
                result,
                now,
            );
        }
    }

    for (entity, (_, texts)) in box_entities.into_iter().zip(slots) {
        if let Ok((_, mut slot)) = boxes.get_mut(entity) {
            *slot = texts;
        }
    }

    sequencer.commit(action);
    panel.open = false;
    info!(
        "Advanced with {:?}, now at step {:?}",
        action,
        sequencer.step()
    );
}
