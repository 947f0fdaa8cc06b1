//! Event types and observers.
//!
//! Events decouple the input and panel systems from the scene logic: the
//! panel only reports what the user asked for, and observers apply it.
//!
//! Submodules:
//! - [`advance`] – move the step sequence forward
//! - [`alert`] – show a user-facing error
//! - [`opacity`] – switch boxes between opaque and translucent
//! - [`panel`] – open or close the control panel on compact windows
//! - [`switchdebug`] – toggle the debug overlay
//! - [`tween`] – tween completion actions
pub mod advance;
pub mod alert;
pub mod opacity;
pub mod panel;
pub mod switchdebug;
pub mod tween;
