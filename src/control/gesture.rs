//! Gesture modes and the chord bindings that select them.

use serde::{Deserialize, Serialize};

use super::modifiers::{InputId, ModifierState};

/// What a pointer move currently does to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    /// Horizontal pointer position drives the zoom factor.
    Zooming,
    /// Pointer position drives the camera around the orbit circle.
    Orbiting,
    /// Both chords held: the zoom and orbit mappings apply together.
    ZoomingAndOrbiting,
}

/// Which chord zooms and which one orbits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlScheme {
    /// Alt + right button zooms, Alt + left button orbits.
    #[default]
    AltRightZoomAltLeftOrbit,
    /// Alt + left button zooms, Alt + right button orbits.
    AltLeftZoomAltRightOrbit,
    /// No modifier needed: right button zooms, left button orbits.
    Ungated,
}

impl ControlScheme {
    fn zoom_button(self) -> InputId {
        match self {
            Self::AltRightZoomAltLeftOrbit | Self::Ungated => InputId::RightButton,
            Self::AltLeftZoomAltRightOrbit => InputId::LeftButton,
        }
    }

    fn orbit_button(self) -> InputId {
        match self {
            Self::AltRightZoomAltLeftOrbit | Self::Ungated => InputId::LeftButton,
            Self::AltLeftZoomAltRightOrbit => InputId::RightButton,
        }
    }

    fn requires_alt(self) -> bool {
        !matches!(self, Self::Ungated)
    }

    /// Derives the gesture mode from the held set. The zoom and orbit chords
    /// are checked independently.
    pub fn resolve(self, modifiers: &ModifierState) -> GestureMode {
        if !modifiers.mouse_down() || (self.requires_alt() && !modifiers.alt()) {
            return GestureMode::Idle;
        }
        let zooming = modifiers.is_held(&self.zoom_button());
        let orbiting = modifiers.is_held(&self.orbit_button());
        match (zooming, orbiting) {
            (true, true) => GestureMode::ZoomingAndOrbiting,
            (true, false) => GestureMode::Zooming,
            (false, true) => GestureMode::Orbiting,
            (false, false) => GestureMode::Idle,
        }
    }
}
