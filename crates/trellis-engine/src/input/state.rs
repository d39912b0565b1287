use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{ButtonState, InputEvent, Key, Modifiers, MouseButton, PointerButtonEvent};

/// Input state for a single window.
///
/// Holds "is down" information and the pointer position, plus the transitions
/// recorded since the last [`end_frame`](Self::end_frame). Consumers read the
/// transitions during their tick and then call `end_frame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in device pixels. `None` once the pointer left.
    pub pointer_pos: Option<Vec2>,

    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,

    keys_pressed: HashSet<Key>,
    keys_released: HashSet<Key>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self { focused: true, ..Self::default() }
    }

    /// Applies an input event to the current state.
    pub fn apply(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss nothing stays held; no release events will arrive.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                ButtonState::Pressed => {
                    if self.keys_down.insert(*key) {
                        self.keys_pressed.insert(*key);
                    }
                }
                ButtonState::Released => {
                    if self.keys_down.remove(key) {
                        self.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                match state {
                    ButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            self.buttons_pressed.insert(*button);
                        }
                    }
                    ButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            self.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }
    }

    /// Drops per-frame transitions. Held state and pointer position persist.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    // ── convenience producers ──────────────────────────────────────────────

    /// Moves the pointer to device position `(x, y)`.
    pub fn move_pointer(&mut self, x: f32, y: f32) {
        self.apply(&InputEvent::PointerMoved { x, y });
    }

    /// Presses `button` at the current pointer position.
    pub fn press(&mut self, button: MouseButton) {
        self.apply_button(button, ButtonState::Pressed);
    }

    /// Releases `button` at the current pointer position.
    pub fn release(&mut self, button: MouseButton) {
        self.apply_button(button, ButtonState::Released);
    }

    pub fn press_key(&mut self, key: Key) {
        self.apply(&InputEvent::Key { key, state: ButtonState::Pressed, repeat: false });
    }

    pub fn release_key(&mut self, key: Key) {
        self.apply(&InputEvent::Key { key, state: ButtonState::Released, repeat: false });
    }

    fn apply_button(&mut self, button: MouseButton, state: ButtonState) {
        let p = self.pointer_pos.unwrap_or(Vec2::ZERO);
        self.apply(&InputEvent::PointerButton(PointerButtonEvent { button, state, x: p.x, y: p.y }));
    }

    // ── queries ────────────────────────────────────────────────────────────

    /// Pointer position in device pixels, or the origin when outside the window.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer_pos.unwrap_or(Vec2::ZERO)
    }

    #[inline]
    pub fn button_held(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    #[inline]
    pub fn button_just_pressed(&self, btn: MouseButton) -> bool {
        self.buttons_pressed.contains(&btn)
    }

    #[inline]
    pub fn button_just_released(&self, btn: MouseButton) -> bool {
        self.buttons_released.contains(&btn)
    }

    #[inline]
    pub fn key_held(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn key_just_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// True when either control key is held, judged by modifier state or key state.
    pub fn ctrl_held(&self) -> bool {
        self.modifiers.ctrl || self.key_held(Key::Control)
    }
}
