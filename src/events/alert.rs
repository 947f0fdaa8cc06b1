//! User-facing error messages.
//!
//! Triggering an [`AlertEvent`] logs the message and shows it in a modal box
//! until the user dismisses it (see [`crate::systems::panel`]).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::warn;

use crate::resources::alert::Alert;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub message: String,
}

impl AlertEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shows the alert. A newer alert replaces the one on screen.
pub fn alert_observer(trigger: On<AlertEvent>, mut commands: Commands) {
    warn!("Alert: {}", trigger.message);
    commands.insert_resource(Alert {
        message: trigger.message.clone(),
    });
}
