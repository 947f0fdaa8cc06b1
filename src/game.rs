//! Scene building blocks.
//!
//! Helpers that create, replace and dispose the texts owned by the boxes, and
//! that start the number-entry and operation animations. They work through
//! [`Commands`] and mutate the caller's copy of [`BoxTexts`]; the caller
//! writes the slots back to the box entity.
//!
//! Texts are despawned as soon as they are superseded. A slot never points at
//! a despawned entity and no text is referenced from two slots.

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{Color, Vector3};

use crate::components::floatingtext::{FloatingText, TextKind};
use crate::components::numberbox::{BoxRole, BoxShape, BoxTexts, NumberBox};
use crate::components::operation::{Flyer, OperandFlight};
use crate::components::pendingdrop::PendingDrop;
use crate::components::rotation::Rotation;
use crate::components::stuckto::StuckTo;
use crate::components::tween::{TWEEN_SECONDS, TweenClock, TweenFinish, TweenOffset, TweenOpacity};
use crate::components::worldposition::WorldPosition;
use crate::resources::registry::SceneRegistry;
use crate::resources::sequencer::Operator;

/// Height of a label above its box.
pub const LABEL_OFFSET: f32 = 1.5;
/// Label text sits this much above its anchor.
pub const LABEL_BASELINE: f32 = 1.0;
/// Height of the formula above the result box.
pub const FORMULA_OFFSET: f32 = 2.0;
pub const FORMULA_BASELINE: f32 = -0.1;
/// Resting height of a glyph inside a box.
pub const GLYPH_REST: f32 = 0.3;
/// Height a newly entered number drops from.
pub const GLYPH_DROP_START: f32 = 1.5;
/// Height the result drops from.
pub const RESULT_DROP_START: f32 = 1.0;
/// Distance a superseded glyph rises while fading out.
pub const GLYPH_RISE: f32 = 1.0;

pub const TEXT_COLOR: Color = Color::new(255, 255, 255, 255);
pub const GLYPH_COLOR: Color = Color::new(255, 255, 0, 255);
pub const FLYER_COLOR: Color = Color::new(255, 0, 0, 255);

fn up(y: f32) -> Vector3 {
    Vector3 { x: 0.0, y, z: 0.0 }
}

/// Spawn the three boxes with their default labels and register them.
pub fn spawn_boxes(
    commands: &mut Commands,
    registry: &mut SceneRegistry,
    font_ready: bool,
    half_extents: Vector3,
) {
    for role in BoxRole::ALL {
        let pos = Vector3 {
            x: role.x(),
            y: 0.0,
            z: 0.0,
        };
        let entity = commands
            .spawn((
                NumberBox { role },
                WorldPosition::from_vec(pos),
                Rotation::default(),
                BoxShape { half_extents },
            ))
            .id();
        let mut texts = BoxTexts::default();
        add_label(commands, font_ready, entity, pos, &mut texts, role.default_label());
        commands.entity(entity).insert(texts);
        registry.register(role, entity);
        debug!("Spawned {:?} box as {:?}", role, entity);
    }
    info!("Scene boxes created");
}

/// Create the label of a box. Does nothing until the font is loaded.
pub fn add_label(
    commands: &mut Commands,
    font_ready: bool,
    box_entity: Entity,
    box_pos: Vector3,
    texts: &mut BoxTexts,
    text: &str,
) {
    if !font_ready {
        return;
    }
    let label = commands
        .spawn((
            FloatingText::new(text, TextKind::Label, TEXT_COLOR).with_baseline(LABEL_BASELINE),
            WorldPosition::from_vec(box_pos + up(LABEL_OFFSET)),
            StuckTo::above(box_entity, LABEL_OFFSET),
        ))
        .id();
    texts.label = Some(label);
}

/// Replace the label of a box.
pub fn update_label(
    commands: &mut Commands,
    font_ready: bool,
    box_entity: Entity,
    box_pos: Vector3,
    texts: &mut BoxTexts,
    text: &str,
) {
    if let Some(old) = texts.label.take() {
        commands.entity(old).try_despawn();
    }
    add_label(commands, font_ready, box_entity, box_pos, texts, text);
}

/// Show `"{first} {op} {second}"` above the result box, replacing any
/// previous formula.
#[allow(clippy::too_many_arguments)]
pub fn add_formula(
    commands: &mut Commands,
    font_ready: bool,
    box_entity: Entity,
    box_pos: Vector3,
    texts: &mut BoxTexts,
    first: i64,
    operator: Operator,
    second: i64,
) {
    clear_formula(commands, texts);
    if !font_ready {
        return;
    }
    let content = format!("{} {} {}", first, operator.symbol(), second);
    let formula = commands
        .spawn((
            FloatingText::new(content, TextKind::Formula, TEXT_COLOR)
                .with_baseline(FORMULA_BASELINE),
            WorldPosition::from_vec(box_pos + up(FORMULA_OFFSET)),
            StuckTo::above(box_entity, FORMULA_OFFSET),
        ))
        .id();
    texts.formula = Some(formula);
}

pub fn clear_formula(commands: &mut Commands, texts: &mut BoxTexts) {
    if let Some(old) = texts.formula.take() {
        commands.entity(old).try_despawn();
    }
}

/// Remove the glyph of a box and cancel any number still waiting to drop in.
pub fn clear_glyph(commands: &mut Commands, box_entity: Entity, texts: &mut BoxTexts) {
    if let Some(old) = texts.glyph.take() {
        commands.entity(old).try_despawn();
    }
    commands.entity(box_entity).try_remove::<PendingDrop>();
}

fn spawn_glyph(
    commands: &mut Commands,
    box_entity: Entity,
    box_pos: Vector3,
    content: String,
    height: f32,
) -> Entity {
    commands
        .spawn((
            FloatingText::new(content, TextKind::Glyph, GLYPH_COLOR),
            WorldPosition::from_vec(box_pos + up(height)),
            StuckTo::inside(box_entity, height),
        ))
        .id()
}

/// Start the number-entry animation for a box.
///
/// The glyph currently in the box (resting or still dropping) is retired: it
/// leaves the slot, rises by [`GLYPH_RISE`] while fading out and is despawned
/// when the rise ends. The new value drops in after
/// [`DROP_DELAY_SECONDS`](crate::components::pendingdrop::DROP_DELAY_SECONDS),
/// replacing any value still waiting for its drop.
pub fn animate_number_input(
    commands: &mut Commands,
    box_entity: Entity,
    texts: &mut BoxTexts,
    glyphs: &mut Query<(&mut FloatingText, &StuckTo)>,
    value: i64,
    now: f32,
) {
    if let Some(old) = texts.glyph.take() {
        match glyphs.get_mut(old) {
            Ok((mut text, stuck)) => {
                let generation = text.retire();
                let from = stuck.offset.y;
                let clock = TweenClock::starting_at(now, TWEEN_SECONDS);
                commands.entity(old).try_insert((
                    TweenOffset::new(from, from + GLYPH_RISE, clock)
                        .with_generation(generation)
                        .with_finish(TweenFinish::Despawn),
                    TweenOpacity::new(text.opacity, 0.0, clock).with_generation(generation),
                ));
            }
            Err(_) => {
                commands.entity(old).try_despawn();
            }
        }
    }
    commands.entity(box_entity).try_insert(PendingDrop::new(value));
}

/// Drop a glyph for `value` into a box from [`GLYPH_DROP_START`].
pub fn drop_glyph(
    commands: &mut Commands,
    box_entity: Entity,
    box_pos: Vector3,
    texts: &mut BoxTexts,
    value: i64,
    now: f32,
) {
    if let Some(old) = texts.glyph.take() {
        commands.entity(old).try_despawn();
    }
    let glyph = spawn_glyph(commands, box_entity, box_pos, value.to_string(), GLYPH_DROP_START);
    commands.entity(glyph).insert(TweenOffset::new(
        GLYPH_DROP_START,
        GLYPH_REST,
        TweenClock::starting_at(now, TWEEN_SECONDS),
    ));
    texts.glyph = Some(glyph);
}

/// A box taking part in an operation: entity, world position, text slots.
pub struct OperationBox<'a> {
    pub entity: Entity,
    pub pos: Vector3,
    pub texts: &'a mut BoxTexts,
}

/// Start the operation animation.
///
/// Each operand box gets a resting glyph with its value, two red copies
/// start flying towards the result box, and the formula appears above the
/// result box right away. The result itself is written when the flight ends
/// (see [`land_result`]).
#[allow(clippy::too_many_arguments)]
pub fn animate_operation(
    commands: &mut Commands,
    font_ready: bool,
    first_box: OperationBox,
    second_box: OperationBox,
    result_box: OperationBox,
    first: i64,
    second: i64,
    operator: Operator,
    result: i64,
    now: f32,
) {
    let target = result_box.pos + up(GLYPH_REST);
    let mut flyers = Vec::with_capacity(2);
    for (b, value) in [(first_box, first), (second_box, second)] {
        clear_glyph(commands, b.entity, b.texts);
        let glyph = spawn_glyph(commands, b.entity, b.pos, value.to_string(), GLYPH_REST);
        b.texts.glyph = Some(glyph);

        let from = b.pos + up(GLYPH_REST);
        let flyer = commands
            .spawn((
                FloatingText::new(value.to_string(), TextKind::Flyer, FLYER_COLOR),
                WorldPosition::from_vec(from),
            ))
            .id();
        flyers.push(Flyer {
            entity: flyer,
            from,
            to: target,
        });
    }
    let flyers = [flyers[0], flyers[1]];
    commands.spawn(OperandFlight {
        flyers,
        clock: TweenClock::starting_at(now, TWEEN_SECONDS),
        result,
    });

    add_formula(
        commands,
        font_ready,
        result_box.entity,
        result_box.pos,
        result_box.texts,
        first,
        operator,
        second,
    );
    info!("Launched {} {} {} = {}", first, operator.symbol(), second, result);
}

/// Write the result glyph into the result box, dropping from
/// [`RESULT_DROP_START`]. The operation ends when the drop finishes.
pub fn land_result(
    commands: &mut Commands,
    box_entity: Entity,
    box_pos: Vector3,
    texts: &mut BoxTexts,
    result: i64,
    now: f32,
) {
    if let Some(old) = texts.glyph.take() {
        commands.entity(old).try_despawn();
    }
    let glyph = spawn_glyph(commands, box_entity, box_pos, result.to_string(), RESULT_DROP_START);
    commands.entity(glyph).insert(
        TweenOffset::new(
            RESULT_DROP_START,
            GLYPH_REST,
            TweenClock::starting_at(now, TWEEN_SECONDS),
        )
        .with_finish(TweenFinish::EndOperation(result)),
    );
    texts.glyph = Some(glyph);
}
