//! Set of currently held keys and mouse buttons.

use std::collections::HashSet;

use winit::{
    event::MouseButton,
    keyboard::{Key, NamedKey},
};

/// Identifies a key or mouse button that can be held.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputId {
    Alt,
    Shift,
    Control,
    LeftButton,
    MiddleButton,
    RightButton,
    /// Any other key, by its logical name (`"="`, `"-"`, `"Escape"`, ...).
    Key(String),
}

impl InputId {
    /// Maps a winit logical key. Unidentified keys yield `None`.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Alt | NamedKey::AltGraph) => Some(Self::Alt),
            Key::Named(NamedKey::Shift) => Some(Self::Shift),
            Key::Named(NamedKey::Control) => Some(Self::Control),
            Key::Named(named) => Some(Self::Key(format!("{named:?}"))),
            Key::Character(text) => Some(Self::Key(text.to_string())),
            Key::Unidentified(_) | Key::Dead(_) => None,
        }
    }

    /// Maps a winit mouse button. Back/forward/other buttons yield `None`.
    pub fn from_mouse_button(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Self::LeftButton),
            MouseButton::Middle => Some(Self::MiddleButton),
            MouseButton::Right => Some(Self::RightButton),
            _ => None,
        }
    }

    pub fn is_mouse_button(&self) -> bool {
        matches!(
            self,
            Self::LeftButton | Self::MiddleButton | Self::RightButton
        )
    }
}

/// Held keys and buttons plus the "some mouse button is down" flag.
#[derive(Debug, Clone, Default)]
pub struct ModifierState {
    held: HashSet<InputId>,
    mouse_down: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, id: InputId) {
        if id.is_mouse_button() {
            self.mouse_down = true;
        }
        self.held.insert(id);
    }

    /// Releases a key. Releasing any mouse button releases all of them.
    pub fn release(&mut self, id: &InputId) {
        if id.is_mouse_button() {
            self.release_mouse_buttons();
        } else {
            self.held.remove(id);
        }
    }

    pub fn release_mouse_buttons(&mut self) {
        self.mouse_down = false;
        self.held.remove(&InputId::LeftButton);
        self.held.remove(&InputId::MiddleButton);
        self.held.remove(&InputId::RightButton);
    }

    /// Sets the Alt state from an authoritative modifier snapshot.
    pub fn set_alt(&mut self, held: bool) {
        if held {
            self.held.insert(InputId::Alt);
        } else {
            self.held.remove(&InputId::Alt);
        }
    }

    pub fn clear(&mut self) {
        self.held.clear();
        self.mouse_down = false;
    }

    pub fn is_held(&self, id: &InputId) -> bool {
        self.held.contains(id)
    }

    pub fn alt(&self) -> bool {
        self.is_held(&InputId::Alt)
    }

    pub fn mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
