//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events into `InputEvent`s.

mod state;
mod types;

pub mod platform;

pub use state::InputState;
pub use types::{
    ButtonState,
    InputEvent,
    Key,
    Modifiers,
    MouseButton,
    PointerButtonEvent,
};
