//! Box model store.
//!
//! Non-send resource holding the single model shared by the three boxes.
//! Each box is drawn with the same model and its own transform and tint.

use raylib::prelude::Model;

#[derive(Default)]
pub struct ModelStore {
    pub box_model: Option<Model>,
}

impl ModelStore {
    pub fn new() -> Self {
        Self { box_model: None }
    }
}
