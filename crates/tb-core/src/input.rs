//! Per-frame input state
//!
//! Hosts translate their windowing events into [`InputEvent`]s, feed them
//! to [`Input::apply`] and call [`Input::end_frame`] once the frame has been
//! processed. Transitions ("just pressed", "just released") are therefore
//! visible for exactly one frame.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Transition state of a button or key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Up,
    Down,
    /// Went down this frame
    Pressed,
    /// Went up this frame
    Released,
}

impl State {
    fn is_down(self) -> bool {
        matches!(self, State::Down | State::Pressed)
    }

    fn aged(self) -> Self {
        match self {
            State::Pressed => State::Down,
            State::Released => State::Up,
            other => other,
        }
    }
}

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Left,
    Middle,
    Right,
}

impl Button {
    const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }
}

/// Keyboard keys the trackball cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Plus,
    Minus,
    KpAdd,
    KpSubtract,
    R,
    Space,
    Escape,
    F1,
    LShift,
    RShift,
    LCtrl,
    RCtrl,
    LAlt,
    RAlt,
}

impl Key {
    const COUNT: usize = 14;

    fn index(self) -> usize {
        self as usize
    }
}

/// A single input change reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    ButtonPressed(Button),
    ButtonReleased(Button),
    KeyPressed(Key),
    KeyReleased(Key),
}

/// Pointer and keyboard state for the current frame
#[derive(Debug, Clone, Default)]
pub struct Input {
    position: IVec2,
    buttons: [State; Button::COUNT],
    keys: [State; Key::COUNT],
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a host event to the current frame
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.position = IVec2::new(x, y),
            InputEvent::ButtonPressed(button) => {
                let state = &mut self.buttons[button.index()];
                if !state.is_down() {
                    *state = State::Pressed;
                }
            }
            InputEvent::ButtonReleased(button) => {
                let state = &mut self.buttons[button.index()];
                if state.is_down() {
                    *state = State::Released;
                }
            }
            InputEvent::KeyPressed(key) => {
                let state = &mut self.keys[key.index()];
                if !state.is_down() {
                    *state = State::Pressed;
                }
            }
            InputEvent::KeyReleased(key) => {
                let state = &mut self.keys[key.index()];
                if state.is_down() {
                    *state = State::Released;
                }
            }
        }
    }

    /// Age transitions: pressed becomes down and released becomes up
    pub fn end_frame(&mut self) {
        for state in self.buttons.iter_mut().chain(self.keys.iter_mut()) {
            *state = state.aged();
        }
    }

    /// Pointer position in window pixels
    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn button(&self, button: Button) -> State {
        self.buttons[button.index()]
    }

    pub fn key(&self, key: Key) -> State {
        self.keys[key.index()]
    }

    /// Button went down this frame
    pub fn clicked(&self, button: Button) -> bool {
        self.button(button) == State::Pressed
    }

    /// Button is held, including the frame it went down
    pub fn button_down(&self, button: Button) -> bool {
        self.button(button).is_down()
    }

    /// Button went up this frame
    pub fn released(&self, button: Button) -> bool {
        self.button(button) == State::Released
    }

    /// Key went down this frame
    pub fn pressed(&self, key: Key) -> bool {
        self.key(key) == State::Pressed
    }

    /// Key is held, including the frame it went down
    pub fn key_down(&self, key: Key) -> bool {
        self.key(key).is_down()
    }

    /// Either shift key is held
    pub fn shift(&self) -> bool {
        self.key_down(Key::LShift) || self.key_down(Key::RShift)
    }

    /// Either control key is held
    pub fn ctrl(&self) -> bool {
        self.key_down(Key::LCtrl) || self.key_down(Key::RCtrl)
    }
}
