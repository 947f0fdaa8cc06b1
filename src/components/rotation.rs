//! Box orientation.
//!
//! Boxes are rotated by dragging: horizontal pointer motion turns them about
//! their vertical axis (yaw) and vertical motion about their horizontal axis
//! (pitch). Text kept inside a box follows that orientation through
//! [`Rotation::rotate_vector`].

use bevy_ecs::prelude::Component;
use raylib::prelude::{Matrix, Vector3};

/// Orientation in radians, applied as pitch (X axis) then yaw (Y axis).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Rotation {
    /// Rotate a local-space vector into world orientation.
    pub fn rotate_vector(&self, v: Vector3) -> Vector3 {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        // pitch about X
        let x1 = v.x;
        let y1 = v.y * cp - v.z * sp;
        let z1 = v.y * sp + v.z * cp;
        // yaw about Y
        Vector3 {
            x: x1 * cy + z1 * sy,
            y: y1,
            z: -x1 * sy + z1 * cy,
        }
    }

    /// Rotate a world-oriented vector back into the local frame.
    pub fn inverse_rotate_vector(&self, v: Vector3) -> Vector3 {
        let (sy, cy) = (-self.yaw).sin_cos();
        let (sp, cp) = (-self.pitch).sin_cos();
        // undo yaw
        let x1 = v.x * cy + v.z * sy;
        let z1 = -v.x * sy + v.z * cy;
        // undo pitch
        Vector3 {
            x: x1,
            y: v.y * cp - z1 * sp,
            z: v.y * sp + z1 * cp,
        }
    }

    /// Model transform for rendering.
    pub fn matrix(&self) -> Matrix {
        Matrix::rotate_xyz(Vector3 {
            x: self.pitch,
            y: self.yaw,
            z: 0.0,
        })
    }
}
