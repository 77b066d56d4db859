//! Crate-level error types.
//!
//! Camera control and the per-frame update are total and never fail. Errors
//! only arise while bringing the viewer up (window, GPU, configuration) and
//! when the presentation surface cannot be recovered.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the cubecam crate.
#[derive(Debug, Error)]
pub enum CubeCamError {
    /// The winit event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The viewer window could not be created.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// wgpu could not create a surface for the window.
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No adapter is compatible with the window surface.
    #[error("failed to request adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to hand out a device.
    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// The surface reported an error that reconfiguring cannot fix.
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    /// The surface exposes no texture formats for this adapter.
    #[error("surface is not supported by the selected adapter")]
    UnsupportedSurface,

    /// A configuration file could not be read or written.
    #[error("unable to access configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was malformed or held invalid values.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CubeCamError>;
