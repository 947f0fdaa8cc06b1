//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: sequencing state, input, timing,
//! rendering handles, asset stores, and configuration. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `alert` – blocking user-facing message
//! - `appconfig` – window and asset settings loaded from `config.ini`
//! - `assetjoin` – join of the font and model loads
//! - `assetloader` – channel from the asset loader threads
//! - `camera3d` – shared perspective camera
//! - `controlpanel` – raw input values, focus and code echo
//! - `debugmode` – presence toggles the debug overlay
//! - `drag` – box currently rotated by the pointer
//! - `fontstore` / `modelstore` – loaded raylib assets (non-send)
//! - `input` – per-frame pointer and keyboard snapshot
//! - `registry` – the three boxes by role
//! - `sequencer` – the four-step state machine
//! - `transparency` – opaque or translucent boxes
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – scene time and delta
pub mod alert;
pub mod appconfig;
pub mod assetjoin;
pub mod assetloader;
pub mod camera3d;
pub mod controlpanel;
pub mod debugmode;
pub mod drag;
pub mod fontstore;
pub mod input;
pub mod modelstore;
pub mod registry;
pub mod sequencer;
pub mod transparency;
pub mod windowsize;
pub mod worldtime;
