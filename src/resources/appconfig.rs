//! Window and asset settings read from `config.ini`.
//!
//! Every key is optional; the built-in values start the scene with the
//! bundled font and box model.
//!
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [assets]
//! font = ./assets/fonts/helvetiker.ttf
//! model = ./model/box1.glb
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

const WINDOW: &str = "window";
const ASSETS: &str = "assets";

#[derive(Resource, Debug, Clone)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Font used for every floating text.
    pub font_path: PathBuf,
    /// Model shared by the three boxes.
    pub model_path: PathBuf,
    /// Where `load_from_file` reads from.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            target_fps: 60,
            font_path: PathBuf::from("./assets/fonts/helvetiker.ttf"),
            model_path: PathBuf::from("./model/box1.glb"),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// Largest window side raylib accepts (it takes `i32` sizes).
pub const MAX_WINDOW_SIDE: u32 = i32::MAX as u32;

fn read_u32(ini: &Ini, section: &str, key: &str, max: u32, into: &mut u32) {
    if let Ok(Some(v)) = ini.getuint(section, key) {
        *into = v.min(u64::from(max)) as u32;
    }
}

fn read_path(ini: &Ini, section: &str, key: &str, into: &mut PathBuf) {
    if let Some(v) = ini.get(section, key).filter(|v| !v.trim().is_empty()) {
        *into = PathBuf::from(v.trim());
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::default()
        }
    }

    /// Overwrite the fields whose keys are present in `ini`.
    pub fn apply(&mut self, ini: &Ini) {
        read_u32(ini, WINDOW, "width", MAX_WINDOW_SIDE, &mut self.window_width);
        read_u32(ini, WINDOW, "height", MAX_WINDOW_SIDE, &mut self.window_height);
        read_u32(ini, WINDOW, "target_fps", u32::MAX, &mut self.target_fps);
        read_path(ini, ASSETS, "font", &mut self.font_path);
        read_path(ini, ASSETS, "model", &mut self.model_path);
    }

    /// Read `config_path`. Keys absent from the file keep their values; an
    /// unreadable file leaves the whole configuration untouched.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("cannot read {}: {}", self.config_path.display(), e))?;
        self.apply(&ini);
        info!(
            "Config {}: {}x{} @ {} fps, font {}, model {}",
            self.config_path.display(),
            self.window_width,
            self.window_height,
            self.target_fps,
            self.font_path.display(),
            self.model_path.display()
        );
        Ok(())
    }
}
