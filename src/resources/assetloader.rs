//! Bridge between the ECS world and the two asset loader threads.
//!
//! Use [`setup_asset_loads`] once during initialization. Each thread reads
//! and validates one file and reports an [`AssetMessage`]; the GPU upload
//! itself happens on the main thread in
//! [`poll_asset_loads`](crate::systems::assets::poll_asset_loads). Call
//! [`shutdown_asset_loads`] during teardown to join the threads.

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, unbounded};
use log::debug;

use crate::resources::assetjoin::AssetKind;
use crate::systems::assets::read_and_validate;

/// Outcome of one background load.
#[derive(Debug, Clone)]
pub struct AssetMessage {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub result: Result<(), String>,
}

#[derive(Resource)]
pub struct AssetLoader {
    /// Receiver for [`AssetMessage`]s (loader threads -> ECS).
    pub rx: Receiver<AssetMessage>,
    /// Join handles of the loader threads.
    pub handles: Vec<std::thread::JoinHandle<()>>,
}

/// Spawn one loader thread per asset and insert the [`AssetLoader`] resource.
pub fn setup_asset_loads(world: &mut World, font: PathBuf, model: PathBuf) {
    let (tx, rx) = unbounded::<AssetMessage>();
    let handles = [(AssetKind::Font, font), (AssetKind::Model, model)]
        .into_iter()
        .map(|(kind, path)| {
            let tx = tx.clone();
            std::thread::spawn(move || {
                debug!("Loading {:?} from {}", kind, path.display());
                let result = read_and_validate(kind, &path);
                // The receiver is gone only during shutdown.
                let _ = tx.send(AssetMessage { kind, path, result });
            })
        })
        .collect();
    world.insert_resource(AssetLoader { rx, handles });
}

/// Join the loader threads and remove the bridge resource.
pub fn shutdown_asset_loads(world: &mut World) {
    if let Some(loader) = world.remove_resource::<AssetLoader>() {
        for handle in loader.handles {
            let _ = handle.join();
        }
    }
}
