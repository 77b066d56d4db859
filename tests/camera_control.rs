//! Control, scene context and frame loop driven together without a GPU.

use std::time::Duration;

use cgmath::{InnerSpace, Rad, Vector3};
use cubecam::prelude::*;

const EPS: f32 = 1.0e-5;

fn viewer(config: &ViewerConfig) -> (CameraControl, SceneContext, FrameLoop) {
    (
        CameraControl::new(config.control.clone(), config.viewport),
        SceneContext::from_config(config),
        FrameLoop::new(),
    )
}

#[test]
fn zoom_button_reaches_camera_on_next_frame() {
    let config = ViewerConfig::default();
    let (control, mut ctx, mut frames) = viewer(&config);

    control.on_button_click(&mut ctx, ZoomDirection::In);
    assert_eq!(ctx.camera.fov, 75.0);
    assert_eq!(ctx.camera_params().field_of_view, 65.0);

    let before = ctx.camera.projection_matrix();
    assert_eq!(frames.tick_at(&mut ctx, Duration::ZERO), FrameStatus::Continue);
    assert_eq!(ctx.camera.fov, 65.0);
    assert!(ctx.camera.projection_matrix().y.y > before.y.y);
}

#[test]
fn orbit_then_frame_keeps_camera_on_circle() {
    let config = ViewerConfig::default();
    let (mut control, mut ctx, mut frames) = viewer(&config);

    control.set_alt(true);
    control.on_mouse_button(InputId::LeftButton, true);

    for x in [0.0, 100.0, 250.0, 400.0, 650.0, 800.0] {
        assert_eq!(control.on_pointer_move(&mut ctx, x, 300.0), GestureMode::Orbiting);
        frames.tick_at(&mut ctx, Duration::from_millis(16));

        let p = ctx.camera.position;
        let radius = Vector3::new(p.x, 0.0, p.z).magnitude();
        assert!((radius - 2.0).abs() < EPS, "radius {radius} at x={x}");
        assert!(p.y.abs() < EPS);
        assert_eq!(ctx.camera.target, ctx.scene.target());
    }
}

#[test]
fn orbit_follows_offset_cube() {
    let mut config = ViewerConfig::default();
    config.cube.position = [1.0, 0.0, -1.0];
    let (mut control, mut ctx, _) = viewer(&config);

    control.set_alt(true);
    control.on_mouse_button(InputId::LeftButton, true);
    control.on_pointer_move(&mut ctx, 400.0, 300.0);

    let p = ctx.camera.position;
    assert!((p - Vector3::new(1.0, 0.0, 1.0)).magnitude() < EPS);
    assert_eq!(ctx.camera.target, Vector3::new(1.0, 0.0, -1.0));
}

#[test]
fn swapped_scheme_zooms_with_left_button() {
    let mut config = ViewerConfig::default();
    config.control.scheme = ControlScheme::AltLeftZoomAltRightOrbit;
    let (mut control, mut ctx, _) = viewer(&config);

    control.set_alt(true);
    control.on_mouse_button(InputId::LeftButton, true);

    assert_eq!(control.on_pointer_move(&mut ctx, 600.0, 300.0), GestureMode::Zooming);
    assert!((ctx.camera.zoom - 1.0).abs() < EPS);
}

fn finite(view_proj: [[f32; 4]; 4]) -> bool {
    view_proj.iter().flatten().all(|v| v.is_finite())
}

#[test]
fn negative_zoom_survives_the_frame_loop() {
    let config = ViewerConfig::default();
    let (mut control, mut ctx, mut frames) = viewer(&config);

    control.set_alt(true);
    control.on_mouse_button(InputId::RightButton, true);
    for x in [400.0, 300.0, 200.0, 0.0] {
        control.on_pointer_move(&mut ctx, x, 300.0);
        assert_eq!(frames.tick_at(&mut ctx, Duration::from_millis(16)), FrameStatus::Continue);
        assert!(finite(ctx.camera.uniform.view_proj), "zoom {}", ctx.camera.zoom);
    }
    assert_eq!(ctx.camera.zoom, -2.0);

    control.on_mouse_button(InputId::RightButton, false);
    for _ in 0..30 {
        control.on_button_click(&mut ctx, ZoomDirection::Out);
        frames.tick_at(&mut ctx, Duration::from_millis(32));
        assert!(finite(ctx.camera.uniform.view_proj), "zoom {}", ctx.camera.zoom);
    }
}

#[test]
fn both_chords_apply_zoom_and_orbit_each_move() {
    let config = ViewerConfig::default();
    let (mut control, mut ctx, mut frames) = viewer(&config);

    control.set_alt(true);
    control.on_mouse_button(InputId::LeftButton, true);
    control.on_mouse_button(InputId::RightButton, true);

    assert_eq!(
        control.on_pointer_move(&mut ctx, 600.0, 300.0),
        GestureMode::ZoomingAndOrbiting
    );
    frames.tick_at(&mut ctx, Duration::from_millis(16));
    assert!((ctx.camera.zoom - 1.0).abs() < EPS);
    assert!((ctx.camera.position - Vector3::new(2.0, 0.0, 0.0)).magnitude() < EPS);
}

#[test]
fn keys_and_buttons_share_the_zoom_step() {
    let config = ViewerConfig::default();
    let (mut control, mut ctx, _) = viewer(&config);

    control.on_key(&mut ctx, InputId::Key("=".into()), true);
    control.on_key(&mut ctx, InputId::Key("=".into()), false);
    control.on_button_click(&mut ctx, ZoomDirection::In);

    let params = ctx.camera_params();
    assert_eq!(params.field_of_view, 55.0);
    assert!((params.zoom - 1.2).abs() < EPS);
}

#[test]
fn cancellation_freezes_the_scene() {
    let config = ViewerConfig::default();
    let (control, mut ctx, mut frames) = viewer(&config);
    let token = frames.cancel_token();

    frames.tick_at(&mut ctx, Duration::from_secs(2));
    token.cancel();

    control.on_button_click(&mut ctx, ZoomDirection::Out);
    assert_eq!(frames.tick_at(&mut ctx, Duration::from_secs(3)), FrameStatus::Stopped);
    assert_eq!(ctx.scene.cube.rotation_y, Rad(2.0));
    assert_eq!(ctx.camera.fov, 75.0);
}

#[test]
fn partial_config_drives_the_controls() {
    let config = ViewerConfig::from_toml_str(
        r#"
        [control]
        scheme = "ungated"
        zoom_scale = 2.0
        "#,
    )
    .expect("valid config");
    let (mut control, mut ctx, _) = viewer(&config);

    control.on_mouse_button(InputId::RightButton, true);
    control.on_pointer_move(&mut ctx, 800.0, 0.0);
    assert!((ctx.camera.zoom - 1.0).abs() < EPS);
}
