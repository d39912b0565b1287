//! winit adapter: the entry point for a windowed host.
//!
//! A host feeds each `WindowEvent` through [`translate_window_event`] and
//! applies the result with [`InputState::apply`] before ticking the frame
//! driver. Headless runs drive `InputState` directly instead.

use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{ButtonState, InputEvent, InputState, Key, Modifiers, MouseButton, PointerButtonEvent};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Positions stay in physical (device) pixels; the frame driver owns the
/// conversion to logical space. Returns `None` for events the input subsystem
/// does not represent.
pub fn translate_window_event(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => Some(InputEvent::ModifiersChanged(map_modifiers(m.state()))),

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),

        WindowEvent::MouseInput { state: st, button, .. } => {
            // winit 0.30 has no cursor query; use the tracked pointer position.
            let p = state.pointer();
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: map_element_state(*st),
                x: p.x,
                y: p.y,
            }))
        }

        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: map_element_state(event.state),
            repeat: event.repeat,
        }),

        _ => None,
    }
}

fn map_element_state(s: ElementState) -> ButtonState {
    match s {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
            KeyCode::Tab => Key::Tab,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::Equal => Key::Equal,
            KeyCode::Minus => Key::Minus,
            KeyCode::NumpadAdd => Key::NumpadAdd,
            KeyCode::NumpadSubtract => Key::NumpadSubtract,

            KeyCode::F12 => Key::F12,

            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
            KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
            KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
            KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

            other => {
                log::trace!("unmapped key {:?}", other);
                Key::Unknown(0)
            }
        },

        // NativeKeyCode carries no stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_keys_map_to_dedicated_variants() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Equal)), Key::Equal);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadSubtract)), Key::NumpadSubtract);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ControlRight)), Key::Control);
    }

    #[test]
    fn unlisted_keys_are_unknown() {
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Unknown(_)));
    }

    #[test]
    fn buttons_and_states_map() {
        assert_eq!(map_mouse_button(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(map_element_state(ElementState::Released), ButtonState::Released);
    }

    #[test]
    fn focus_loss_releases_held_input() {
        let mut state = InputState::new();
        state.press(MouseButton::Left);
        let ev = translate_window_event(&state, &WindowEvent::Focused(false));
        assert_eq!(ev, Some(InputEvent::Focused(false)));

        state.apply(&ev.unwrap());
        assert!(!state.button_held(MouseButton::Left));
        assert_eq!(translate_window_event(&state, &WindowEvent::Destroyed), None);
    }

    #[test]
    fn super_maps_to_meta() {
        let m = map_modifiers(ModifiersState::SUPER | ModifiersState::CONTROL);
        assert!(m.meta && m.ctrl && !m.shift && !m.alt);
    }
}
