//! # User Interface Module
//!
//! Dear ImGui overlay with the zoom buttons.
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu, input capture
//! - [`zoom_panel`] - `Zoom In` / `Zoom Out` buttons plus a camera read-out
//!
//! When the UI wants the mouse or keyboard, the event is not forwarded to the
//! camera controls.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::zoom_panel;
