//! Stage window error types

use crate::config::ConfigError;
use crate::window::realization::{RealizationState, SurfaceKind};
use crate::window::video::{DeviceError, VideoMode};
use thiserror::Error;

/// Errors reported by stage window operations
///
/// None of these are fatal. A failed realize leaves the stage unrealized with
/// both flags cleared, and the caller may retry with different parameters.
#[derive(Error, Debug)]
pub enum StageWindowError {
    /// The platform refused a size/fullscreen combination
    #[error("Platform rejected video mode {mode}: {reason}")]
    ModeRejected {
        /// Refused mode
        mode: VideoMode,
        /// Platform explanation
        reason: String,
    },

    /// The backend cannot render to this kind of surface
    #[error("Backend does not support {0} surfaces")]
    UnsupportedSurface(SurfaceKind),

    /// `show` was called before a successful `realize`
    #[error("Stage must be realized before it can be shown")]
    NotRealized,

    /// Internal state machine guard
    #[error("Invalid realization transition from {from:?} to {to:?}")]
    InvalidTransition {
        /// State before the transition
        from: RealizationState,
        /// Requested state
        to: RealizationState,
    },

    /// The requested backend is not available in this build
    #[error("Backend not available: {0}")]
    UnsupportedBackend(String),

    /// Device error outside of mode negotiation
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for stage window operations
pub type StageResult<T> = Result<T, StageWindowError>;
