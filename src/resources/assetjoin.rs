//! Join of the two startup asset loads.
//!
//! The font and the box model are loaded independently. Boxes can only be
//! built once both resolved; if either fails the join reports every failure
//! so it can be logged and shown instead of silently leaving an empty scene.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Font,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

/// Combined state of both loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinState {
    Waiting,
    Ready,
    Failed(Vec<String>),
}

#[derive(Resource, Debug, Clone)]
pub struct AssetJoin {
    font: LoadState,
    model: LoadState,
    /// Half extents of the loaded model's bounding box.
    pub model_half_extents: Vector3,
    /// Boxes were built from the joined assets.
    pub boxes_spawned: bool,
    /// A failure was already logged and shown.
    pub failure_reported: bool,
}

impl Default for AssetJoin {
    fn default() -> Self {
        Self {
            font: LoadState::Pending,
            model: LoadState::Pending,
            model_half_extents: Vector3 {
                x: 1.0,
                y: 1.0,
                z: 1.0,
            },
            boxes_spawned: false,
            failure_reported: false,
        }
    }
}

impl AssetJoin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one load. Later outcomes for the same asset are
    /// ignored once it resolved.
    pub fn resolve(&mut self, kind: AssetKind, result: Result<(), String>) {
        let slot = match kind {
            AssetKind::Font => &mut self.font,
            AssetKind::Model => &mut self.model,
        };
        if *slot != LoadState::Pending {
            return;
        }
        *slot = match result {
            Ok(()) => LoadState::Ready,
            Err(e) => LoadState::Failed(e),
        };
    }

    pub fn get(&self, kind: AssetKind) -> &LoadState {
        match kind {
            AssetKind::Font => &self.font,
            AssetKind::Model => &self.model,
        }
    }

    pub fn font_ready(&self) -> bool {
        self.font == LoadState::Ready
    }

    pub fn state(&self) -> JoinState {
        let failures: Vec<String> = [(AssetKind::Font, &self.font), (AssetKind::Model, &self.model)]
            .into_iter()
            .filter_map(|(kind, s)| match s {
                LoadState::Failed(e) => Some(format!("{:?}: {}", kind, e)),
                _ => None,
            })
            .collect();
        if !failures.is_empty() {
            return JoinState::Failed(failures);
        }
        if self.font == LoadState::Ready && self.model == LoadState::Ready {
            JoinState::Ready
        } else {
            JoinState::Waiting
        }
    }
}
