//! # Frame Loop
//!
//! Drives the per-frame update from a monotonic clock and stops for good once
//! its [`CancelToken`] is cancelled.
//!
//! ```rust
//! use cubecam::{config::ViewerConfig, context::SceneContext, frame::{FrameLoop, FrameStatus}};
//!
//! let mut ctx = SceneContext::from_config(&ViewerConfig::default());
//! let mut frames = FrameLoop::new();
//! let token = frames.cancel_token();
//!
//! assert_eq!(frames.tick(&mut ctx), FrameStatus::Continue);
//! token.cancel();
//! assert_eq!(frames.tick(&mut ctx), FrameStatus::Stopped);
//! ```

use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use crate::context::SceneContext;

/// Monotonic time since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The scene was updated; render it and schedule another frame.
    Continue,
    /// Cancelled. Nothing was updated and no further frame should be scheduled.
    Stopped,
}

/// Frame timing averaged over a sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub frame_count: u64,
}

const MAX_SAMPLES: usize = 60;

pub struct FrameLoop {
    clock: FrameClock,
    token: CancelToken,
    last_tick: Option<Duration>,
    frame_times: VecDeque<Duration>,
    stats: FrameStats,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::with_token(CancelToken::new())
    }

    pub fn with_token(token: CancelToken) -> Self {
        Self {
            clock: FrameClock::new(),
            token,
            last_tick: None,
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
            stats: FrameStats::default(),
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Runs one frame update at the current clock time.
    pub fn tick(&mut self, ctx: &mut SceneContext) -> FrameStatus {
        let now = self.clock.elapsed();
        self.tick_at(ctx, now)
    }

    /// Runs one frame update as if `elapsed` had passed since start.
    pub fn tick_at(&mut self, ctx: &mut SceneContext, elapsed: Duration) -> FrameStatus {
        if self.token.is_cancelled() {
            return FrameStatus::Stopped;
        }

        ctx.per_frame_update(elapsed.as_secs_f32());
        self.record_frame(elapsed);
        FrameStatus::Continue
    }

    fn record_frame(&mut self, elapsed: Duration) {
        if let Some(last) = self.last_tick {
            if self.frame_times.len() == MAX_SAMPLES {
                self.frame_times.pop_front();
            }
            self.frame_times.push_back(elapsed.saturating_sub(last));

            let total: Duration = self.frame_times.iter().sum();
            let average_ms = total.as_secs_f32() * 1000.0 / self.frame_times.len() as f32;
            self.stats.frame_time_ms = average_ms;
            self.stats.fps = if average_ms > 0.0 { 1000.0 / average_ms } else { 0.0 };
        }
        self.last_tick = Some(elapsed);
        self.stats.frame_count += 1;
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use cgmath::Rad;

    fn context() -> SceneContext {
        SceneContext::from_config(&ViewerConfig::default())
    }

    #[test]
    fn tick_applies_elapsed_time() {
        let mut ctx = context();
        let mut frames = FrameLoop::new();

        let status = frames.tick_at(&mut ctx, Duration::from_millis(1500));
        assert_eq!(status, FrameStatus::Continue);
        assert_eq!(ctx.scene.cube.rotation_y, Rad(1.5));
    }

    #[test]
    fn cancelled_loop_stops_updating() {
        let mut ctx = context();
        let mut frames = FrameLoop::new();
        frames.tick_at(&mut ctx, Duration::from_secs(1));

        frames.cancel_token().cancel();
        ctx.field_of_view = 30.0;

        assert_eq!(frames.tick_at(&mut ctx, Duration::from_secs(5)), FrameStatus::Stopped);
        assert_eq!(ctx.scene.cube.rotation_y, Rad(1.0));
        assert_eq!(ctx.camera.fov, 75.0);
        assert_eq!(frames.tick_at(&mut ctx, Duration::from_secs(6)), FrameStatus::Stopped);
    }

    #[test]
    fn token_clones_share_state() {
        let token = CancelToken::new();
        let frames = FrameLoop::with_token(token.clone());
        assert!(!frames.is_cancelled());

        token.cancel();
        assert!(frames.is_cancelled());
        assert!(frames.cancel_token().is_cancelled());
    }

    #[test]
    fn stats_average_frame_times() {
        let mut ctx = context();
        let mut frames = FrameLoop::new();

        for i in 0..5 {
            frames.tick_at(&mut ctx, Duration::from_millis(i * 20));
        }

        let stats = frames.stats();
        assert_eq!(stats.frame_count, 5);
        assert!((stats.frame_time_ms - 20.0).abs() < 1e-3);
        assert!((stats.fps - 50.0).abs() < 1e-2);
    }

    #[test]
    fn clock_is_monotonic() {
        let clock = FrameClock::new();
        let a = clock.elapsed_seconds();
        let b = clock.elapsed_seconds();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
