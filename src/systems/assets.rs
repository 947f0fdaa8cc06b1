//! Startup asset loading and scene construction.
//!
//! - [`read_and_validate`] runs on the loader threads: it reads a file and
//!   checks it looks like the expected format.
//! - [`poll_asset_loads`] uploads validated assets through raylib on the main
//!   thread and records the outcome in [`AssetJoin`].
//! - [`spawn_boxes_when_ready`] builds the boxes once both loads succeeded,
//!   or reports the failure once if either did not.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::{RaylibModel, Vector3};

use crate::events::alert::AlertEvent;
use crate::game;
use crate::resources::assetjoin::{AssetJoin, AssetKind, JoinState};
use crate::resources::assetloader::{AssetLoader, AssetMessage};
use crate::resources::fontstore::FontStore;
use crate::resources::modelstore::ModelStore;
use crate::resources::registry::SceneRegistry;

/// Accept TrueType, OpenType and font collections.
pub fn validate_font_bytes(bytes: &[u8]) -> Result<(), String> {
    const MAGICS: [&[u8; 4]; 4] = [b"\x00\x01\x00\x00", b"OTTO", b"true", b"ttcf"];
    match bytes.get(..4) {
        Some(head) if MAGICS.iter().any(|m| head == &m[..]) => Ok(()),
        Some(_) => Err("not a TrueType or OpenType font".to_string()),
        None => Err("file too short to be a font".to_string()),
    }
}

/// Binary glTF must carry its magic; other model formats only need content.
pub fn validate_model_bytes(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let is_glb = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("glb"));
    if is_glb {
        if bytes.starts_with(b"glTF") {
            Ok(())
        } else {
            Err("not a binary glTF file".to_string())
        }
    } else if bytes.is_empty() {
        Err("model file is empty".to_string())
    } else {
        Ok(())
    }
}

pub fn read_and_validate(kind: AssetKind, path: &Path) -> Result<(), String> {
    let bytes = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    match kind {
        AssetKind::Font => validate_font_bytes(&bytes),
        AssetKind::Model => validate_model_bytes(path, &bytes),
    }
    .map_err(|e| format!("{}: {}", path.display(), e))
}

fn upload(
    rl: &mut raylib::RaylibHandle,
    thread: &raylib::RaylibThread,
    msg: &AssetMessage,
    fonts: &mut FontStore,
    models: &mut ModelStore,
    join: &mut AssetJoin,
) -> Result<(), String> {
    msg.result.clone()?;
    let path = msg.path.to_string_lossy();
    match msg.kind {
        AssetKind::Font => {
            let font = rl
                .load_font(thread, &path)
                .map_err(|e| format!("{}: {}", path, e))?;
            fonts.set_main(font);
        }
        AssetKind::Model => {
            let model = rl
                .load_model(thread, &path)
                .map_err(|e| format!("{}: {}", path, e))?;
            let bounds = model.get_model_bounding_box();
            join.model_half_extents = Vector3 {
                x: (bounds.max.x - bounds.min.x) / 2.0,
                y: (bounds.max.y - bounds.min.y) / 2.0,
                z: (bounds.max.z - bounds.min.z) / 2.0,
            };
            models.box_model = Some(model);
        }
    }
    Ok(())
}

/// Drain finished background loads and upload them on the main thread.
pub fn poll_asset_loads(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    thread: NonSend<raylib::RaylibThread>,
    loader: Option<Res<AssetLoader>>,
    mut join: ResMut<AssetJoin>,
    mut fonts: NonSendMut<FontStore>,
    mut models: NonSendMut<ModelStore>,
) {
    let Some(loader) = loader else {
        return;
    };
    while let Ok(msg) = loader.rx.try_recv() {
        let result = upload(&mut rl, &thread, &msg, &mut fonts, &mut models, &mut join);
        match &result {
            Ok(()) => info!("{:?} ready: {}", msg.kind, msg.path.display()),
            Err(e) => error!("{:?} failed: {}", msg.kind, e),
        }
        join.resolve(msg.kind, result);
    }
}

/// Build the boxes once both assets are ready.
pub fn spawn_boxes_when_ready(
    mut commands: Commands,
    mut join: ResMut<AssetJoin>,
    mut registry: ResMut<SceneRegistry>,
) {
    if join.boxes_spawned || join.failure_reported {
        return;
    }
    match join.state() {
        JoinState::Waiting => {}
        JoinState::Ready => {
            let font_ready = join.font_ready();
            let half_extents = join.model_half_extents;
            game::spawn_boxes(&mut commands, &mut registry, font_ready, half_extents);
            join.boxes_spawned = true;
        }
        JoinState::Failed(errors) => {
            for e in &errors {
                error!("Asset load failed: {}", e);
            }
            commands.trigger(AlertEvent::new(format!(
                "Could not load the scene assets: {}",
                errors.join("; ")
            )));
            join.failure_reported = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::alert::alert_observer;
    use crate::resources::alert::Alert;
    use std::path::PathBuf;

    #[test]
    fn font_magic() {
        assert!(validate_font_bytes(b"\x00\x01\x00\x00rest").is_ok());
        assert!(validate_font_bytes(b"OTTOxxxx").is_ok());
        assert!(validate_font_bytes(b"<html>").is_err());
        assert!(validate_font_bytes(b"ab").is_err());
    }

    #[test]
    fn model_magic_depends_on_extension() {
        let glb = PathBuf::from("model/box1.glb");
        assert!(validate_model_bytes(&glb, b"glTF\x02\x00\x00\x00").is_ok());
        assert!(validate_model_bytes(&glb, b"{\"asset\":{}}").is_err());
        let obj = PathBuf::from("model/box1.obj");
        assert!(validate_model_bytes(&obj, b"v 0 0 0").is_ok());
        assert!(validate_model_bytes(&obj, b"").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_and_validate(AssetKind::Font, Path::new("/nonexistent/font.ttf"))
            .unwrap_err();
        assert!(err.contains("/nonexistent/font.ttf"));
    }

    fn setup() -> (World, Schedule) {
        let mut world = World::new();
        world.insert_resource(AssetJoin::new());
        world.insert_resource(SceneRegistry::new());
        world.add_observer(alert_observer);
        let mut schedule = Schedule::default();
        schedule.add_systems(spawn_boxes_when_ready);
        (world, schedule)
    }

    #[test]
    fn boxes_wait_for_both_assets() {
        let (mut world, mut schedule) = setup();
        world
            .resource_mut::<AssetJoin>()
            .resolve(AssetKind::Model, Ok(()));
        schedule.run(&mut world);
        assert!(world.resource::<SceneRegistry>().all().is_none());

        world
            .resource_mut::<AssetJoin>()
            .resolve(AssetKind::Font, Ok(()));
        schedule.run(&mut world);
        schedule.run(&mut world);
        assert!(world.resource::<SceneRegistry>().all().is_some());
        assert!(world.resource::<AssetJoin>().boxes_spawned);
    }

    #[test]
    fn failure_is_alerted_once() {
        let (mut world, mut schedule) = setup();
        world
            .resource_mut::<AssetJoin>()
            .resolve(AssetKind::Model, Err("model/box1.glb: not found".into()));
        schedule.run(&mut world);
        let alert = world.resource::<Alert>().clone();
        assert!(alert.message.contains("not found"));

        world.remove_resource::<Alert>();
        schedule.run(&mut world);
        assert!(!world.contains_resource::<Alert>());
        assert!(world.resource::<SceneRegistry>().all().is_none());
    }
}
