//! Number boxes main entry point.
//!
//! A small 3D scene that walks through integer addition and subtraction,
//! written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, start the font and model loads on
//!    background threads
//! 2. Insert resources and register observers
//! 3. Each frame:
//!    - read input, apply it to the control panel and drag-to-rotate
//!    - upload finished assets, build the boxes once both are in
//!    - advance drops, the operand flight and tweens, reattach texts
//!    - render boxes, texts and the UI
//! 4. Join the loader threads on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use numberboxes::events::advance::advance_observer;
use numberboxes::events::alert::alert_observer;
use numberboxes::events::opacity::toggle_opacity_observer;
use numberboxes::events::panel::toggle_panel_observer;
use numberboxes::events::switchdebug::switch_debug_observer;
use numberboxes::events::tween::tween_finished_observer;
use numberboxes::resources::appconfig::{AppConfig, DEFAULT_CONFIG_PATH};
use numberboxes::resources::assetjoin::AssetJoin;
use numberboxes::resources::assetloader::{setup_asset_loads, shutdown_asset_loads};
use numberboxes::resources::camera3d::SceneCamera;
use numberboxes::resources::controlpanel::ControlPanel;
use numberboxes::resources::debugmode::DebugMode;
use numberboxes::resources::drag::DragState;
use numberboxes::resources::fontstore::FontStore;
use numberboxes::resources::input::InputState;
use numberboxes::resources::modelstore::ModelStore;
use numberboxes::resources::registry::SceneRegistry;
use numberboxes::resources::sequencer::Sequencer;
use numberboxes::resources::transparency::Transparency;
use numberboxes::resources::windowsize::WindowSize;
use numberboxes::resources::worldtime::WorldTime;
use numberboxes::systems::assets::poll_asset_loads;
use numberboxes::systems::drag::drag_rotate_system;
use numberboxes::systems::input::update_input_state;
use numberboxes::systems::panel::panel_system;
use numberboxes::systems::render::render_system;
use numberboxes::systems::time::update_world_time;
use numberboxes::systems::{SceneSystems, add_scene_systems};

/// Animated addition and subtraction with three boxes.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Start with the debug overlay on (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(
            i32::try_from(config.window_width).unwrap_or(i32::MAX),
            i32::try_from(config.window_height).unwrap_or(i32::MAX),
        )
        .resizable()
        .msaa_4x()
        .title("Number boxes")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape must not close the window while typing.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(SceneCamera::default());
    world.insert_resource(Sequencer::new());
    world.insert_resource(ControlPanel::new());
    world.insert_resource(SceneRegistry::new());
    world.insert_resource(AssetJoin::new());
    world.insert_resource(Transparency::default());
    world.insert_resource(DragState::default());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(FontStore::new());
    world.insert_non_send_resource(ModelStore::new());

    setup_asset_loads(
        &mut world,
        config.font_path.clone(),
        config.model_path.clone(),
    );
    world.insert_resource(config);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(advance_observer);
    world.add_observer(alert_observer);
    world.add_observer(toggle_opacity_observer);
    world.add_observer(toggle_panel_observer);
    world.add_observer(switch_debug_observer);
    world.add_observer(tween_finished_observer);
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            panel_system,
            drag_rotate_system,
            poll_asset_loads,
        )
            .chain()
            .before(SceneSystems),
    );
    add_scene_systems(&mut update);
    update.add_systems(render_system.after(SceneSystems));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
    shutdown_asset_loads(&mut world);
}
