//! Trellis engine crate.
//!
//! Backend collaborator for `trellis-ui`: geometry, colors, a recorded paint
//! surface, text metrics and platform-agnostic input. Nothing in here knows
//! about widgets.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
