//! Platform video-mode boundary
//!
//! A [`VideoDevice`] is the only thing a backend talks to when it needs the
//! platform. The device owns the native window and graphics context; the
//! backend owns the device. Nothing else holds a handle to either, so every
//! change to the platform's current video mode goes through the backend's
//! mode negotiation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Platform device errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The platform layer could not be initialized
    #[error("Platform initialization failed")]
    InitializationFailed,

    /// The native window could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// The platform does not handle the requested mode
    #[error("Video mode {mode} is not available")]
    ModeUnavailable {
        /// Refused mode
        mode: VideoMode,
    },

    /// GLFW reported an error
    #[error("GLFW error: {0}")]
    Glfw(String),
}

/// Result alias for device operations
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Requested video mode
///
/// Built for a single negotiation and discarded once the platform has
/// answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoMode {
    /// Width in device pixels
    pub width: u32,
    /// Height in device pixels
    pub height: u32,
    /// Whether the window covers the whole display
    pub fullscreen: bool,
}

impl VideoMode {
    /// Windowed mode of the given size
    pub const fn windowed(width: u32, height: u32) -> Self {
        Self { width, height, fullscreen: false }
    }

    /// Fullscreen mode of the given size
    pub const fn fullscreen(width: u32, height: u32) -> Self {
        Self { width, height, fullscreen: true }
    }

    /// Same size with a different fullscreen bit
    pub const fn with_fullscreen(self, fullscreen: bool) -> Self {
        Self { fullscreen, ..self }
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} ({})",
            self.width,
            self.height,
            if self.fullscreen { "fullscreen" } else { "windowed" }
        )
    }
}

/// Platform window and graphics-context provider
///
/// Calls are synchronous and answer with a definite accept or reject.
///
/// # Thread Safety
/// No `Send` bound: platform windows generally have to stay on the thread
/// that runs the event loop.
pub trait VideoDevice {
    /// Short platform name for diagnostics
    fn name(&self) -> &'static str;

    /// Ask whether `mode` would be accepted, without touching any window
    fn mode_supported(&mut self, mode: VideoMode) -> bool;

    /// Open the native window in `mode`, or switch the open window to it
    ///
    /// On error the device is left exactly as it was before the call: an
    /// open window keeps its previous mode, a closed device stays closed.
    fn set_video_mode(&mut self, mode: VideoMode) -> DeviceResult<()>;

    /// Release the native window and graphics context, if any
    fn close(&mut self);

    /// Whether a native window currently exists
    fn is_open(&self) -> bool;

    /// Map or unmap the native window
    ///
    /// Platforms without a way to unmap a window may ignore this.
    fn set_visible(&mut self, _visible: bool) {}

    /// Show or hide the pointer over the window
    fn show_cursor(&mut self, visible: bool);

    /// Set the window caption
    fn set_caption(&mut self, caption: &str);
}
