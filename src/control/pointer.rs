//! Pointer tracking and normalization against the fixed viewport.

use serde::{Deserialize, Serialize};

/// Restricts `value` to `[min, max]`.
///
/// Returns `min` when `value < min`, `max` when `value > max`, and `value`
/// otherwise. A NaN `value` collapses to `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Fixed viewport extent, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Maps a horizontal pointer coordinate into `[-0.5, 0.5]`.
    pub fn normalize_x(&self, x: f32) -> f32 {
        normalize(x, self.width as f32)
    }

    /// Maps a vertical pointer coordinate into `[-0.5, 0.5]`.
    pub fn normalize_y(&self, y: f32) -> f32 {
        normalize(y, self.height as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

fn normalize(value: f32, extent: f32) -> f32 {
    clamp(value, 0.0, extent) / extent - 0.5
}

/// Last known pointer position, raw and normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub raw_x: f32,
    pub raw_y: f32,
    /// Always within `[-0.5, 0.5]`.
    pub normalized_x: f32,
    /// Always within `[-0.5, 0.5]`.
    pub normalized_y: f32,
}

impl PointerState {
    /// Records a new pointer position and recomputes the normalized pair.
    pub fn update(&mut self, x: f32, y: f32, viewport: &Viewport) {
        self.raw_x = x;
        self.raw_y = y;
        self.normalized_x = viewport.normalize_x(x);
        self.normalized_y = viewport.normalize_y(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_contract() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_stays_in_range() {
        for v in [-1.0e9, -7.5, -0.0, 0.25, 3.0, 9.99, 1.0e9, f32::INFINITY, f32::NEG_INFINITY] {
            let c = clamp(v, -2.0, 4.0);
            assert!((-2.0..=4.0).contains(&c), "clamp({v}) = {c}");
        }
        assert_eq!(clamp(f32::NAN, -2.0, 4.0), -2.0);
    }

    #[test]
    fn normalization_over_800_wide_viewport() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.normalize_x(0.0), -0.5);
        assert_eq!(viewport.normalize_x(800.0), 0.5);
        assert_eq!(viewport.normalize_x(400.0), 0.0);
        assert_eq!(viewport.normalize_y(300.0), 0.0);
    }

    #[test]
    fn out_of_viewport_positions_are_clamped() {
        let viewport = Viewport::default();
        let mut pointer = PointerState::default();

        pointer.update(-250.0, 1e6, &viewport);
        assert_eq!(pointer.raw_x, -250.0);
        assert_eq!(pointer.normalized_x, -0.5);
        assert_eq!(pointer.normalized_y, 0.5);

        pointer.update(1200.0, -1.0, &viewport);
        assert_eq!(pointer.normalized_x, 0.5);
        assert_eq!(pointer.normalized_y, -0.5);
    }
}
