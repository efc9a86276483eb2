//! Stage window subsystem
//!
//! This module defines the contract between the scene graph's stage actor
//! and the platform backends that give it a real window.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Scene graph / paint loop    │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │   Stage   │ ← Owns StageState (flags, properties)
//!         └─────┬─────┘
//!               │ Box<dyn StageWindow>
//!      ┌────────▼────────┐
//!      │  StageWindow    │ ← Contract (backend.rs)
//!      │  trait          │
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ VideoModeStage<D>     │ ← Exemplar backend (backends/mode_set.rs)
//!   └───────────┬───────────┘
//!               │ Owns
//!   ┌───────────▼───────────┐
//!   │ VideoDevice           │ ← Platform boundary (video.rs)
//!   │  SimulatedDisplay     │
//!   │  GlfwDevice           │
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`backend`**: the stage window contract
//! - **`negotiation`**: request/accept/rollback of video modes
//! - **`realization`**: the realize/unrealize state machine
//! - **`video`**: the platform device trait and video modes
//! - **`error`**: error taxonomy shared by all backends

pub mod backend;
pub mod error;
pub mod negotiation;
pub mod realization;
pub mod video;

pub use backend::StageWindow;
pub use error::{StageResult, StageWindowError};
pub use negotiation::ModeOutcome;
pub use realization::{RealizationState, SurfaceKind};
pub use video::{DeviceError, DeviceResult, VideoDevice, VideoMode};
