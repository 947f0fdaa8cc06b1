//! The font every floating text is drawn with.
//!
//! Raylib fonts live on the main thread, so this is a non-send resource
//! (`NonSend<FontStore>`). Scene logic asks
//! [`AssetJoin`](crate::resources::assetjoin::AssetJoin) whether the font is
//! usable and never touches this store.

use raylib::prelude::Font;

#[derive(Default)]
pub struct FontStore {
    main: Option<Font>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the main font.
    pub fn set_main(&mut self, font: Font) {
        self.main = Some(font);
    }

    pub fn main(&self) -> Option<&Font> {
        self.main.as_ref()
    }
}
