//! # Primitive Shape Generation
//!
//! Box generation with per-face subdivision. Every face is an independent
//! grid so normals stay flat across edges.

use super::GeometryData;

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// Generate a unit cube centered at the origin with no subdivision.
pub fn generate_cube() -> GeometryData {
    generate_box(1.0, 1.0, 1.0, 1, 1, 1)
}

/// Generate a box centered at the origin.
///
/// # Arguments
/// * `width`, `height`, `depth` - Extent along X, Y and Z
/// * `width_segments`, `height_segments`, `depth_segments` - Grid cells per
///   face along each axis (values below 1 are raised to 1)
///
/// Each face holds `(a + 1) * (b + 1)` vertices for its two segment counts
/// `a` and `b`, with counter-clockwise winding seen from outside.
pub fn generate_box(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let ws = width_segments.max(1);
    let hs = height_segments.max(1);
    let ds = depth_segments.max(1);

    // +X, -X
    push_face(&mut data, [Z, Y, X], -1.0, -1.0, [depth, height, width], ds, hs);
    push_face(&mut data, [Z, Y, X], 1.0, -1.0, [depth, height, -width], ds, hs);
    // +Y, -Y
    push_face(&mut data, [X, Z, Y], 1.0, 1.0, [width, depth, height], ws, ds);
    push_face(&mut data, [X, Z, Y], 1.0, -1.0, [width, depth, -height], ws, ds);
    // +Z, -Z
    push_face(&mut data, [X, Y, Z], 1.0, -1.0, [width, height, depth], ws, hs);
    push_face(&mut data, [X, Y, Z], -1.0, -1.0, [width, height, -depth], ws, hs);

    data
}

/// Appends one face grid.
///
/// `axes` names the (u, v, w) axes; the face lies at `w = extent[2] / 2` and
/// its normal points along the sign of `extent[2]`.
fn push_face(
    data: &mut GeometryData,
    axes: [usize; 3],
    u_dir: f32,
    v_dir: f32,
    extent: [f32; 3],
    grid_x: u32,
    grid_y: u32,
) {
    let [u, v, w] = axes;
    let [face_width, face_height, face_depth] = extent;

    let segment_width = face_width / grid_x as f32;
    let segment_height = face_height / grid_y as f32;
    let half_width = face_width * 0.5;
    let half_height = face_height * 0.5;
    let half_depth = face_depth * 0.5;
    let normal_sign = if face_depth > 0.0 { 1.0 } else { -1.0 };

    let base = data.vertices.len() as u32;

    for iy in 0..=grid_y {
        let y = iy as f32 * segment_height - half_height;
        for ix in 0..=grid_x {
            let x = ix as f32 * segment_width - half_width;

            let mut position = [0.0; 3];
            position[u] = x * u_dir;
            position[v] = y * v_dir;
            position[w] = half_depth;

            let mut normal = [0.0; 3];
            normal[w] = normal_sign;

            data.vertices.push(position);
            data.normals.push(normal);
        }
    }

    let row = grid_x + 1;
    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = base + ix + row * iy;
            let b = base + ix + row * (iy + 1);
            let c = base + (ix + 1) + row * (iy + 1);
            let d = base + (ix + 1) + row * iy;

            data.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
}
