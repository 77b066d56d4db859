//! # Control Module
//!
//! Turns cursor, button and key input into camera changes.
//!
//! - [`PointerState`] - Last cursor position, raw and normalized to `[-0.5, 0.5]`
//! - [`ModifierState`] - Held keys and mouse buttons
//! - [`ControlScheme`] - Which chord zooms and which one orbits
//! - [`CameraControl`] - Applies the zoom and orbit mappings to a
//!   [`SceneContext`](crate::context::SceneContext)

pub mod camera_control;
pub mod gesture;
pub mod modifiers;
pub mod pointer;

pub use camera_control::{CameraControl, ZoomDirection};
pub use gesture::{ControlScheme, GestureMode};
pub use modifiers::{InputId, ModifierState};
pub use pointer::{clamp, PointerState, Viewport};
