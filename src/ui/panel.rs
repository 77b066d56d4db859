//! Camera panel: zoom buttons and a read-out of the camera state.

use crate::{
    context::CameraParams, control::ZoomDirection, frame::FrameStats, gfx::scene::SceneStatistics,
};

/// Draws the camera panel and returns the zoom step clicked this frame.
///
/// # Arguments
/// * `ui` - ImGui UI context
/// * `params` - Camera values to display
/// * `stats` - Frame timing to display
/// * `scene` - Mesh sizes to display
pub fn zoom_panel(
    ui: &imgui::Ui,
    params: &CameraParams,
    stats: &FrameStats,
    scene: &SceneStatistics,
) -> Option<ZoomDirection> {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return None;
    }

    let mut clicked = None;
    ui.window("Camera")
        .size([240.0, 0.0], imgui::Condition::FirstUseEver)
        .position([10.0, 10.0], imgui::Condition::FirstUseEver)
        .always_auto_resize(true)
        .collapsible(true)
        .build(|| {
            if ui.button("Zoom In") {
                clicked = Some(ZoomDirection::In);
            }
            ui.same_line();
            if ui.button("Zoom Out") {
                clicked = Some(ZoomDirection::Out);
            }

            ui.separator();
            for line in readout_lines(params, stats, scene) {
                ui.text(line);
            }
        });
    clicked
}

fn readout_lines(
    params: &CameraParams,
    stats: &FrameStats,
    scene: &SceneStatistics,
) -> Vec<String> {
    let p = params.position;
    vec![
        format!("FOV: {:.1}°", params.field_of_view),
        format!("Zoom: {:.2}", params.zoom),
        format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
        format!("FPS: {:.0} ({:.2} ms)", stats.fps, stats.frame_time_ms),
        format!(
            "Triangles: {}, Vertices: {}",
            scene.total_triangles, scene.total_vertices
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::CubeConfig, gfx::scene::Scene};
    use cgmath::Vector3;

    #[test]
    fn readout_shows_camera_values() {
        let params = CameraParams {
            field_of_view: 65.0,
            zoom: 1.1,
            position: Vector3::new(0.0, 1.5, 2.0),
        };
        let scene = Scene::from_config(&CubeConfig::default()).get_statistics();
        let lines = readout_lines(&params, &FrameStats::default(), &scene);

        assert_eq!(lines[0], "FOV: 65.0°");
        assert_eq!(lines[1], "Zoom: 1.10");
        assert_eq!(lines[2], "Position: (0.00, 1.50, 2.00)");
        assert_eq!(lines[4], "Triangles: 300, Vertices: 216");
    }
}
