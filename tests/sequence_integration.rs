//! End-to-end runs of the step sequence against the real observers and scene
//! schedule, with the clock driven by the test.

use bevy_ecs::prelude::*;

use numberboxes::components::floatingtext::{FloatingText, TextKind};
use numberboxes::components::numberbox::{BoxRole, BoxTexts};
use numberboxes::components::operation::OperandFlight;
use numberboxes::components::pendingdrop::PendingDrop;
use numberboxes::components::stuckto::StuckTo;
use numberboxes::events::advance::{AdvanceEvent, advance_observer};
use numberboxes::events::alert::alert_observer;
use numberboxes::events::tween::tween_finished_observer;
use numberboxes::resources::alert::Alert;
use numberboxes::resources::assetjoin::{AssetJoin, AssetKind};
use numberboxes::resources::controlpanel::ControlPanel;
use numberboxes::resources::registry::SceneRegistry;
use numberboxes::resources::sequencer::{Sequencer, Step};
use numberboxes::resources::worldtime::WorldTime;
use numberboxes::systems::add_scene_systems;
use numberboxes::systems::time::update_world_time;

const FRAME: f32 = 1.0 / 60.0;

fn scene_with(join: AssetJoin) -> (World, Schedule) {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Sequencer::new());
    world.insert_resource(ControlPanel::new());
    world.insert_resource(SceneRegistry::new());
    world.insert_resource(join);
    world.add_observer(advance_observer);
    world.add_observer(alert_observer);
    world.add_observer(tween_finished_observer);
    world.flush();

    let mut schedule = Schedule::default();
    add_scene_systems(&mut schedule);
    schedule.run(&mut world);
    (world, schedule)
}

fn scene() -> (World, Schedule) {
    let mut join = AssetJoin::new();
    join.resolve(AssetKind::Font, Ok(()));
    join.resolve(AssetKind::Model, Ok(()));
    scene_with(join)
}

fn run_for(world: &mut World, schedule: &mut Schedule, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        update_world_time(world, FRAME);
        schedule.run(world);
    }
}

fn advance(world: &mut World) {
    world.trigger(AdvanceEvent {});
    world.flush();
}

fn set_inputs(world: &mut World, first: &str, second: &str, operator: &str) {
    let mut panel = world.resource_mut::<ControlPanel>();
    panel.first_input = first.to_string();
    panel.second_input = second.to_string();
    panel.operator = operator.to_string();
}

fn slots(world: &World, role: BoxRole) -> BoxTexts {
    let e = world
        .resource::<SceneRegistry>()
        .get(role)
        .expect("box registered");
    *world.get::<BoxTexts>(e).expect("box has text slots")
}

fn content(world: &World, text: Option<Entity>) -> Option<String> {
    text.and_then(|e| world.get::<FloatingText>(e))
        .map(|t| t.content.clone())
}

fn step(world: &World) -> Step {
    world.resource::<Sequencer>().step()
}

fn count_texts(world: &mut World, kind: TextKind) -> usize {
    let mut q = world.query::<&FloatingText>();
    q.iter(world).filter(|t| t.kind == kind).count()
}

/// Walk one full cycle, letting every animation finish.
fn full_cycle(world: &mut World, schedule: &mut Schedule, first: &str, second: &str, op: &str) {
    set_inputs(world, first, second, op);
    for _ in 0..4 {
        advance(world);
        run_for(world, schedule, 2.5);
    }
}

#[test]
fn boxes_start_with_default_labels() {
    let (world, _) = scene();
    assert_eq!(step(&world), Step::AwaitFirst);
    for (role, label) in [
        (BoxRole::FirstOperand, "number1"),
        (BoxRole::SecondOperand, "number2"),
        (BoxRole::Result, "result"),
    ] {
        let s = slots(&world, role);
        assert_eq!(content(&world, s.label).as_deref(), Some(label));
        assert!(s.glyph.is_none());
        assert!(s.formula.is_none());
    }
}

#[test]
fn addition_cycle() {
    let (mut world, mut schedule) = scene();
    set_inputs(&mut world, "7", "3", "+");

    advance(&mut world);
    assert_eq!(step(&world), Step::AwaitSecond);
    run_for(&mut world, &mut schedule, 2.5);
    let first = slots(&world, BoxRole::FirstOperand);
    assert_eq!(content(&world, first.glyph).as_deref(), Some("7"));

    advance(&mut world);
    run_for(&mut world, &mut schedule, 2.5);
    let second = slots(&world, BoxRole::SecondOperand);
    assert_eq!(content(&world, second.glyph).as_deref(), Some("3"));

    advance(&mut world);
    assert_eq!(step(&world), Step::AwaitLaunch);
    assert_eq!(world.resource::<ControlPanel>().echo.operator, "+");

    advance(&mut world);
    let seq = world.resource::<Sequencer>();
    assert!(seq.is_animating);
    assert_eq!(seq.step(), Step::AwaitFirst);
    // Formula and result label appear as soon as the flight starts.
    let result = slots(&world, BoxRole::Result);
    assert_eq!(content(&world, result.formula).as_deref(), Some("7 + 3"));
    assert_eq!(content(&world, result.label).as_deref(), Some("summa"));
    assert!(result.glyph.is_none());
    assert_eq!(world.resource::<ControlPanel>().echo.result_name, "summa");

    // Flight is over, result still dropping.
    run_for(&mut world, &mut schedule, 1.5);
    assert!(world.resource::<Sequencer>().is_animating);
    let result = slots(&world, BoxRole::Result);
    assert_eq!(content(&world, result.glyph).as_deref(), Some("10"));
    assert_eq!(count_texts(&mut world, TextKind::Flyer), 0);

    run_for(&mut world, &mut schedule, 1.0);
    let seq = world.resource::<Sequencer>();
    assert!(!seq.is_animating);
    assert_eq!(seq.last_result, Some(10));
    let glyph = slots(&world, BoxRole::Result).glyph.unwrap();
    assert!((world.get::<StuckTo>(glyph).unwrap().offset.y - 0.3).abs() < 1e-4);
}

#[test]
fn subtraction_cycle_renames_result() {
    let (mut world, mut schedule) = scene();
    full_cycle(&mut world, &mut schedule, "5", "9", "-");

    let result = slots(&world, BoxRole::Result);
    assert_eq!(content(&world, result.glyph).as_deref(), Some("-4"));
    assert_eq!(content(&world, result.formula).as_deref(), Some("5 - 9"));
    assert_eq!(content(&world, result.label).as_deref(), Some("difference"));
    assert_eq!(
        world.resource::<ControlPanel>().echo.lines()[2],
        "let difference = number1 - number2;"
    );
}

#[test]
fn invalid_first_operand_is_alerted_and_rejected() {
    let (mut world, mut schedule) = scene();
    set_inputs(&mut world, "abc", "", "");
    advance(&mut world);
    run_for(&mut world, &mut schedule, 2.0);

    let alert = world.resource::<Alert>();
    assert_eq!(alert.message, "Enter a valid first number.");
    assert_eq!(step(&world), Step::AwaitFirst);
    assert!(slots(&world, BoxRole::FirstOperand).glyph.is_none());
    assert_eq!(world.resource::<ControlPanel>().echo.first, "?");
}

#[test]
fn unsupported_operator_keeps_step() {
    let (mut world, mut schedule) = scene();
    set_inputs(&mut world, "1", "2", "*");
    advance(&mut world);
    advance(&mut world);
    run_for(&mut world, &mut schedule, 0.1);
    advance(&mut world);
    assert_eq!(step(&world), Step::AwaitOperator);
    assert!(world.resource::<Alert>().message.contains('*'));
}

#[test]
fn overflow_is_rejected_at_launch() {
    let (mut world, _) = scene();
    set_inputs(&mut world, "9223372036854775807", "1", "+");
    for _ in 0..4 {
        advance(&mut world);
    }
    assert_eq!(step(&world), Step::AwaitLaunch);
    assert!(!world.resource::<Sequencer>().is_animating);
    assert!(world.contains_resource::<Alert>());
}

#[test]
fn advance_is_ignored_while_animating() {
    let (mut world, mut schedule) = scene();
    set_inputs(&mut world, "2", "2", "+");
    for _ in 0..4 {
        advance(&mut world);
    }
    assert!(world.resource::<Sequencer>().is_animating);

    run_for(&mut world, &mut schedule, 0.5);
    advance(&mut world);
    // Busy is silent and leaves everything alone.
    assert!(!world.contains_resource::<Alert>());
    assert_eq!(step(&world), Step::AwaitFirst);
    assert_eq!(world.query::<&PendingDrop>().iter(&world).count(), 0);

    run_for(&mut world, &mut schedule, 2.0);
    advance(&mut world);
    assert_eq!(step(&world), Step::AwaitSecond);
}

#[test]
fn launch_reads_inputs_again() {
    let (mut world, mut schedule) = scene();
    set_inputs(&mut world, "7", "3", "+");
    advance(&mut world);
    advance(&mut world);
    advance(&mut world);
    world.resource_mut::<ControlPanel>().first_input = "8".into();
    advance(&mut world);
    run_for(&mut world, &mut schedule, 2.5);

    let result = slots(&world, BoxRole::Result);
    assert_eq!(content(&world, result.formula).as_deref(), Some("8 + 3"));
    assert_eq!(content(&world, result.glyph).as_deref(), Some("11"));
    let first = slots(&world, BoxRole::FirstOperand);
    assert_eq!(content(&world, first.glyph).as_deref(), Some("8"));
}

#[test]
fn quick_launch_cancels_pending_drops() {
    let (mut world, mut schedule) = scene();
    set_inputs(&mut world, "4", "6", "-");
    for _ in 0..4 {
        advance(&mut world);
    }
    run_for(&mut world, &mut schedule, 3.0);

    assert_eq!(world.query::<&PendingDrop>().iter(&world).count(), 0);
    // One resting glyph per operand box plus the result.
    assert_eq!(count_texts(&mut world, TextKind::Glyph), 3);
    let first = slots(&world, BoxRole::FirstOperand);
    assert_eq!(content(&world, first.glyph).as_deref(), Some("4"));
    let result = slots(&world, BoxRole::Result);
    assert_eq!(content(&world, result.glyph).as_deref(), Some("-2"));
}

#[test]
fn new_entry_retires_previous_glyph() {
    let (mut world, mut schedule) = scene();
    full_cycle(&mut world, &mut schedule, "7", "3", "+");
    let old = slots(&world, BoxRole::FirstOperand).glyph.unwrap();

    world.resource_mut::<ControlPanel>().first_input = "2".into();
    advance(&mut world);
    // The old glyph left the slot and is rising out of the box.
    assert!(slots(&world, BoxRole::FirstOperand).glyph.is_none());
    run_for(&mut world, &mut schedule, 0.5);
    let rising = world.get::<StuckTo>(old).unwrap().offset.y;
    assert!(rising > 0.3 && rising < 1.3, "offset {}", rising);
    assert!(world.get::<FloatingText>(old).unwrap().opacity < 1.0);

    run_for(&mut world, &mut schedule, 2.0);
    assert!(world.get_entity(old).is_err());
    let first = slots(&world, BoxRole::FirstOperand);
    assert_eq!(content(&world, first.glyph).as_deref(), Some("2"));
}

#[test]
fn repeated_cycles_do_not_accumulate_texts() {
    let (mut world, mut schedule) = scene();
    full_cycle(&mut world, &mut schedule, "1", "2", "+");
    let mut q = world.query::<&FloatingText>();
    let after_one = q.iter(&world).count();
    // Three labels, three glyphs, one formula.
    assert_eq!(after_one, 7);

    for i in 0..5 {
        let a = (i * 3).to_string();
        let b = (i + 11).to_string();
        full_cycle(&mut world, &mut schedule, &a, &b, if i % 2 == 0 { "-" } else { "+" });
    }
    let mut q = world.query::<&FloatingText>();
    assert_eq!(q.iter(&world).count(), after_one);
    assert_eq!(world.query::<&OperandFlight>().iter(&world).count(), 0);
    assert_eq!(world.resource::<Sequencer>().cycles, 6);
}

#[test]
fn advance_before_boxes_exist_is_rejected() {
    let (mut world, _) = scene_with(AssetJoin::new());
    set_inputs(&mut world, "7", "", "");
    advance(&mut world);
    assert_eq!(step(&world), Step::AwaitFirst);
    assert_eq!(
        world.resource::<Alert>().message,
        "The scene is still loading. Try again."
    );
}
