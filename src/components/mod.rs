//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene.
//!
//! Submodules overview:
//! - [`floatingtext`] – 3D text drawn above or inside a box
//! - [`numberbox`] – the three boxes, their roles and their text slots
//! - [`operation`] – the two operand glyphs flying into the result box
//! - [`pendingdrop`] – delayed drop of a newly entered number
//! - [`rotation`] – box orientation driven by dragging
//! - [`stuckto`] – keeps a text attached to a box
//! - [`tween`] – time-bounded interpolation of text offset and opacity
//! - [`worldposition`] – world-space position

pub mod floatingtext;
pub mod numberbox;
pub mod operation;
pub mod pendingdrop;
pub mod rotation;
pub mod stuckto;
pub mod tween;
pub mod worldposition;
