//! Shared 3D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera3D`] so that picking, text
//! projection and rendering agree on a single view. raylib derives the aspect
//! ratio from the current framebuffer, so resizing needs no camera update.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// Field of view in degrees.
pub const FOVY: f32 = 45.0;
/// Distance of the camera from the scene origin along +Z.
pub const CAMERA_DISTANCE: f32 = 15.0;

#[derive(Resource, Clone, Copy)]
pub struct SceneCamera(pub Camera3D);

impl Default for SceneCamera {
    fn default() -> Self {
        SceneCamera(Camera3D::perspective(
            Vector3 {
                x: 0.0,
                y: 0.0,
                z: CAMERA_DISTANCE,
            },
            Vector3::zero(),
            Vector3::up(),
            FOVY,
        ))
    }
}
