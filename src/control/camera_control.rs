//! Cursor, keyboard and button driven camera control.

use std::f32::consts::TAU;

use cgmath::Vector3;
use winit::{dpi::LogicalPosition, event::WindowEvent};

use super::{
    gesture::GestureMode,
    modifiers::{InputId, ModifierState},
    pointer::{clamp, PointerState, Viewport},
};
use crate::{config::ControlConfig, context::SceneContext};

/// Direction of a discrete zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Narrower field of view, larger zoom.
    In,
    /// Wider field of view, smaller zoom.
    Out,
}

pub struct CameraControl {
    settings: ControlConfig,
    viewport: Viewport,
    pointer: PointerState,
    modifiers: ModifierState,
    mode: GestureMode,
}

impl CameraControl {
    pub fn new(settings: ControlConfig, viewport: Viewport) -> Self {
        Self {
            settings,
            viewport,
            pointer: PointerState::default(),
            modifiers: ModifierState::new(),
            mode: GestureMode::Idle,
        }
    }

    pub fn settings(&self) -> &ControlConfig {
        &self.settings
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    /// Gesture mode derived by the last pointer move.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Handles a pointer move to `(x, y)` in logical viewport pixels.
    ///
    /// Updates the pointer state, re-derives the gesture mode from the held
    /// set, and applies the zoom and/or orbit mapping for the active gesture.
    /// With no gesture active the camera is left untouched.
    pub fn on_pointer_move(&mut self, ctx: &mut SceneContext, x: f32, y: f32) -> GestureMode {
        self.pointer.update(x, y, &self.viewport);
        self.mode = self.settings.scheme.resolve(&self.modifiers);

        match self.mode {
            GestureMode::Idle => {}
            GestureMode::Zooming => self.apply_zoom(ctx),
            GestureMode::Orbiting => self.apply_orbit(ctx),
            GestureMode::ZoomingAndOrbiting => {
                self.apply_zoom(ctx);
                self.apply_orbit(ctx);
            }
        }

        self.mode
    }

    /// `zoom = normalized_x * zoom_scale`
    fn apply_zoom(&self, ctx: &mut SceneContext) {
        ctx.camera.zoom = self.pointer.normalized_x * self.settings.zoom_scale;
    }

    /// Places the camera on the orbit circle around the cube and re-aims it.
    ///
    /// A full sweep of the viewport width is one full turn; the vertical
    /// pointer position sets the height, inverted so moving up raises the
    /// camera.
    fn apply_orbit(&self, ctx: &mut SceneContext) {
        let angle = self.pointer.normalized_x * TAU;
        let radius = self.settings.orbit_radius;
        let offset = Vector3::new(
            radius * angle.sin(),
            -self.pointer.normalized_y * self.settings.orbit_height,
            radius * angle.cos(),
        );

        let target = ctx.scene.target();
        ctx.camera.set_position(target + offset);
        ctx.camera.look_at(target);
    }

    /// Applies one zoom step to the requested field of view and the zoom.
    ///
    /// The field of view is only bounded when `fov_bounds` is configured.
    pub fn on_button_click(&self, ctx: &mut SceneContext, direction: ZoomDirection) {
        let (fov_delta, zoom_delta) = match direction {
            ZoomDirection::In => (-self.settings.fov_step, self.settings.zoom_step),
            ZoomDirection::Out => (self.settings.fov_step, -self.settings.zoom_step),
        };

        ctx.field_of_view += fov_delta;
        if let Some([min, max]) = self.settings.fov_bounds {
            ctx.field_of_view = clamp(ctx.field_of_view, min, max);
        }
        ctx.camera.zoom += zoom_delta;

        log::debug!(
            "zoom {direction:?}: fov={} zoom={}",
            ctx.field_of_view,
            ctx.camera.zoom
        );
    }

    /// Records a key press or release. `=` and `-` presses step the zoom.
    pub fn on_key(
        &mut self,
        ctx: &mut SceneContext,
        key: InputId,
        pressed: bool,
    ) -> Option<ZoomDirection> {
        if !pressed {
            self.modifiers.release(&key);
            return None;
        }

        let step = match &key {
            InputId::Key(name) if name == "=" => Some(ZoomDirection::In),
            InputId::Key(name) if name == "-" => Some(ZoomDirection::Out),
            _ => None,
        };
        self.modifiers.press(key);

        if let Some(direction) = step {
            self.on_button_click(ctx, direction);
        }
        step
    }

    /// Records a mouse button press or release.
    pub fn on_mouse_button(&mut self, button: InputId, pressed: bool) {
        if pressed {
            self.modifiers.press(button);
        } else {
            self.modifiers.release(&button);
            self.mode = GestureMode::Idle;
        }
    }

    pub fn set_alt(&mut self, held: bool) {
        self.modifiers.set_alt(held);
    }

    /// Forgets every held key and button.
    pub fn reset_input(&mut self) {
        self.modifiers.clear();
        self.mode = GestureMode::Idle;
    }

    /// Routes a winit window event to the matching handler.
    ///
    /// Cursor positions arrive in physical pixels and are converted with
    /// `scale_factor` before normalization. Returns `true` when the event
    /// was an input event this control consumes.
    pub fn process_window_event(
        &mut self,
        ctx: &mut SceneContext,
        event: &WindowEvent,
        scale_factor: f64,
    ) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let logical: LogicalPosition<f32> = position.to_logical(scale_factor);
                self.on_pointer_move(ctx, logical.x, logical.y);
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(id) = InputId::from_mouse_button(*button) {
                    self.on_mouse_button(id, state.is_pressed());
                }
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(id) = InputId::from_key(&event.logical_key) {
                    self.on_key(ctx, id, event.state.is_pressed());
                }
                true
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.set_alt(modifiers.state().alt_key());
                true
            }
            WindowEvent::Focused(false) => {
                self.reset_input();
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ViewerConfig, control::ControlScheme};

    const EPS: f32 = 1.0e-5;

    fn setup() -> (CameraControl, SceneContext) {
        let config = ViewerConfig::default();
        (
            CameraControl::new(config.control.clone(), config.viewport),
            SceneContext::from_config(&config),
        )
    }

    fn hold(control: &mut CameraControl, ids: &[InputId]) {
        for id in ids {
            if id.is_mouse_button() {
                control.on_mouse_button(id.clone(), true);
            } else {
                control.set_alt(true);
            }
        }
    }

    #[test]
    fn zoom_in_then_out_restores_camera() {
        let (control, mut ctx) = setup();
        let before = ctx.camera_params();

        control.on_button_click(&mut ctx, ZoomDirection::In);
        let zoomed = ctx.camera_params();
        assert_eq!(zoomed.field_of_view, before.field_of_view - 10.0);
        assert!((zoomed.zoom - before.zoom - 0.1).abs() < EPS);

        control.on_button_click(&mut ctx, ZoomDirection::Out);
        let restored = ctx.camera_params();
        assert_eq!(restored.field_of_view, before.field_of_view);
        assert!((restored.zoom - before.zoom).abs() < EPS);
    }

    #[test]
    fn field_of_view_is_unbounded_by_default() {
        let (control, mut ctx) = setup();
        for _ in 0..10 {
            control.on_button_click(&mut ctx, ZoomDirection::In);
        }
        assert_eq!(ctx.field_of_view, -25.0);
    }

    #[test]
    fn configured_fov_bounds_clamp_steps() {
        let config = ViewerConfig::default();
        let settings = ControlConfig {
            fov_bounds: Some([30.0, 90.0]),
            ..config.control.clone()
        };
        let control = CameraControl::new(settings, config.viewport);
        let mut ctx = SceneContext::from_config(&config);

        for _ in 0..10 {
            control.on_button_click(&mut ctx, ZoomDirection::In);
        }
        assert_eq!(ctx.field_of_view, 30.0);
        for _ in 0..10 {
            control.on_button_click(&mut ctx, ZoomDirection::Out);
        }
        assert_eq!(ctx.field_of_view, 90.0);
    }

    #[test]
    fn idle_pointer_move_leaves_camera_untouched() {
        let (mut control, mut ctx) = setup();
        let before = ctx.camera_params();

        let mode = control.on_pointer_move(&mut ctx, 123.0, 456.0);

        assert_eq!(mode, GestureMode::Idle);
        assert_eq!(ctx.camera_params(), before);
        assert_eq!(control.pointer().raw_x, 123.0);
    }

    #[test]
    fn alt_without_button_is_idle() {
        let (mut control, mut ctx) = setup();
        control.set_alt(true);
        let before = ctx.camera_params();

        assert_eq!(control.on_pointer_move(&mut ctx, 700.0, 10.0), GestureMode::Idle);
        assert_eq!(ctx.camera_params(), before);
    }

    #[test]
    fn alt_right_drag_maps_pointer_to_zoom() {
        let (mut control, mut ctx) = setup();
        hold(&mut control, &[InputId::Alt, InputId::RightButton]);

        assert_eq!(control.on_pointer_move(&mut ctx, 800.0, 300.0), GestureMode::Zooming);
        assert_eq!(ctx.camera.zoom, 2.0);

        control.on_pointer_move(&mut ctx, 200.0, 300.0);
        assert_eq!(ctx.camera.zoom, -1.0);
    }

    #[test]
    fn zoom_drag_left_of_center_then_frame_stays_finite() {
        let (mut control, mut ctx) = setup();
        hold(&mut control, &[InputId::Alt, InputId::RightButton]);

        control.on_pointer_move(&mut ctx, 200.0, 300.0);
        assert_eq!(ctx.camera.zoom, -1.0);
        ctx.per_frame_update(0.5);

        let view_proj = ctx.camera.uniform.view_proj;
        assert!(view_proj.iter().flatten().all(|v| v.is_finite()));
        assert_eq!(ctx.camera.zoom, -1.0);
    }

    #[test]
    fn zoom_out_past_zero_then_frame_stays_finite() {
        let (control, mut ctx) = setup();
        for _ in 0..11 {
            control.on_button_click(&mut ctx, ZoomDirection::Out);
        }
        assert!(ctx.camera.zoom < 0.0);
        ctx.per_frame_update(0.0);

        let view_proj = ctx.camera.uniform.view_proj;
        assert!(view_proj.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn both_chords_zoom_and_orbit() {
        let (mut control, mut ctx) = setup();
        hold(
            &mut control,
            &[InputId::Alt, InputId::LeftButton, InputId::RightButton],
        );

        assert_eq!(
            control.on_pointer_move(&mut ctx, 600.0, 300.0),
            GestureMode::ZoomingAndOrbiting
        );
        assert!((ctx.camera.zoom - 1.0).abs() < EPS);
        let p = ctx.camera.position;
        assert!((p.x - 2.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn alt_left_drag_orbits_around_cube() {
        let (mut control, mut ctx) = setup();
        hold(&mut control, &[InputId::Alt, InputId::LeftButton]);

        // normalized_x = 0
        assert_eq!(control.on_pointer_move(&mut ctx, 400.0, 300.0), GestureMode::Orbiting);
        let p = ctx.camera.position;
        assert!(p.x.abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!((p.z - 2.0).abs() < EPS);
        assert_eq!(ctx.camera.target, Vector3::new(0.0, 0.0, 0.0));

        // normalized_x = 0.25 is a quarter turn
        control.on_pointer_move(&mut ctx, 600.0, 300.0);
        let p = ctx.camera.position;
        assert!((p.x - 2.0).abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn orbit_height_follows_inverted_pointer_y() {
        let (mut control, mut ctx) = setup();
        hold(&mut control, &[InputId::Alt, InputId::LeftButton]);

        control.on_pointer_move(&mut ctx, 400.0, 0.0);
        assert!((ctx.camera.position.y - 1.5).abs() < EPS);

        control.on_pointer_move(&mut ctx, 400.0, 600.0);
        assert!((ctx.camera.position.y + 1.5).abs() < EPS);
    }

    #[test]
    fn button_release_stops_gesture() {
        let (mut control, mut ctx) = setup();
        hold(&mut control, &[InputId::Alt, InputId::RightButton]);
        control.on_pointer_move(&mut ctx, 800.0, 0.0);
        assert_eq!(ctx.camera.zoom, 2.0);

        control.on_mouse_button(InputId::RightButton, false);
        assert_eq!(control.mode(), GestureMode::Idle);

        control.on_pointer_move(&mut ctx, 0.0, 0.0);
        assert_eq!(ctx.camera.zoom, 2.0);
    }

    #[test]
    fn equals_and_minus_keys_step_zoom() {
        let (mut control, mut ctx) = setup();

        let step = control.on_key(&mut ctx, InputId::Key("=".into()), true);
        assert_eq!(step, Some(ZoomDirection::In));
        assert_eq!(ctx.field_of_view, 65.0);
        assert!(control.modifiers().is_held(&InputId::Key("=".into())));

        control.on_key(&mut ctx, InputId::Key("=".into()), false);
        assert!(!control.modifiers().is_held(&InputId::Key("=".into())));

        let step = control.on_key(&mut ctx, InputId::Key("-".into()), true);
        assert_eq!(step, Some(ZoomDirection::Out));
        assert_eq!(ctx.field_of_view, 75.0);

        assert_eq!(control.on_key(&mut ctx, InputId::Key("a".into()), true), None);
        assert_eq!(ctx.field_of_view, 75.0);
    }

    #[test]
    fn ungated_scheme_orbits_without_alt() {
        let config = ViewerConfig::default();
        let settings = ControlConfig {
            scheme: ControlScheme::Ungated,
            ..config.control.clone()
        };
        let mut control = CameraControl::new(settings, config.viewport);
        let mut ctx = SceneContext::from_config(&config);

        control.on_mouse_button(InputId::LeftButton, true);
        assert_eq!(control.on_pointer_move(&mut ctx, 600.0, 300.0), GestureMode::Orbiting);
        assert!((ctx.camera.position.x - 2.0).abs() < EPS);
    }

    #[test]
    fn focus_loss_forgets_held_input() {
        let (mut control, mut ctx) = setup();
        hold(&mut control, &[InputId::Alt, InputId::LeftButton]);

        assert!(!control.process_window_event(&mut ctx, &WindowEvent::Focused(false), 1.0));
        assert!(control.modifiers().is_empty());
        assert!(!control.modifiers().mouse_down());
    }
}
