//! Blocking modal message.
//!
//! While this resource is present the control panel ignores everything but
//! the dismiss action (click or Enter), mirroring a blocking alert dialog.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}
