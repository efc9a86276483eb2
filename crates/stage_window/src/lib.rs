//! # Stage Window
//!
//! Backend-polymorphic windowing for a retained-mode actor scene graph.
//!
//! The crate owns the single top-level rendering surface (the "stage"),
//! negotiates its size and display mode with the platform, and drives the
//! realize/unrealize and show/hide transitions that bind the stage to a live
//! window.
//!
//! ## Features
//!
//! - **Backend Contract**: the stage talks to every platform through `StageWindow`
//! - **Mode Negotiation**: refused sizes roll back instead of failing
//! - **Single Flag Owner**: REALIZED/MAPPED live only on the stage
//! - **Simulated Display**: deterministic platform for dry runs and tests
//! - **GLFW**: real windows behind the `glfw` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use stage_window::prelude::*;
//!
//! fn main() -> Result<(), StageWindowError> {
//!     let config = StageConfig::new("Hello").with_size(800, 600);
//!     let mut stage = Stage::from_config(&config)?;
//!
//!     stage.realize()?;
//!     stage.show()?;
//!
//!     // The platform decides; always use what comes back
//!     let granted = stage.request_coordinates(ActorBox::from_pixel_size(1024, 768));
//!     assert_eq!(granted.pixel_size(), (1024, 768));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod foundation;
pub mod config;

// Windowing
pub mod window;
pub mod backends;
pub mod stage;

pub use stage::Stage;
pub use window::{StageWindow, StageWindowError, StageResult};

/// Common imports for stage users
pub mod prelude {
    pub use crate::{
        Stage, StageWindow, StageWindowError, StageResult,
        backends::{BackendKind, DisplayLimits, SimulatedDisplay, VideoModeStage},
        core::config::{ApplicationConfig, StageConfig, LoggingConfig, Config},
        foundation::units::{ActorBox, Units},
        stage::{ActorFlags, StageProperties, StageState},
        window::{ModeOutcome, RealizationState, SurfaceKind, VideoDevice, VideoMode},
    };
}
