use bevy_ecs::prelude::Resource;

/// Alpha used for boxes while translucent.
pub const TRANSLUCENT_ALPHA: f32 = 0.2;

/// Opacity mode of the box materials. Texts keep their own opacity.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Transparency {
    pub translucent: bool,
}

impl Transparency {
    pub fn alpha(&self) -> f32 {
        if self.translucent {
            TRANSLUCENT_ALPHA
        } else {
            1.0
        }
    }
}
