//! Platform backends
//!
//! Each backend implements [`StageWindow`]; [`create`] picks one from a
//! [`StageConfig`] so the stage never names a concrete backend type.

pub mod mode_set;
pub mod simulated;
#[cfg(feature = "glfw")]
pub mod glfw_device;

use crate::core::config::StageConfig;
use crate::window::backend::StageWindow;
use crate::window::error::StageResult;
use serde::{Deserialize, Serialize};

pub use mode_set::VideoModeStage;
pub use simulated::{DeviceStats, DisplayLimits, SimulatedDisplay};

/// Available backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Deterministic simulated display, no real window
    #[default]
    Simulated,
    /// GLFW window with an OpenGL context (feature `glfw`)
    Glfw,
}

impl BackendKind {
    /// Whether this build can create the backend
    pub const fn is_available(self) -> bool {
        match self {
            Self::Simulated => true,
            Self::Glfw => cfg!(feature = "glfw"),
        }
    }
}

/// Create the backend selected by `config`, sized from it
pub fn create(config: &StageConfig) -> StageResult<Box<dyn StageWindow>> {
    log::debug!("Creating {:?} stage backend", config.backend);

    match config.backend {
        BackendKind::Simulated => Ok(Box::new(VideoModeStage::with_size(
            SimulatedDisplay::new(config.display),
            config.width,
            config.height,
        ))),
        #[cfg(feature = "glfw")]
        BackendKind::Glfw => {
            let device = glfw_device::GlfwDevice::new()?;
            Ok(Box::new(VideoModeStage::with_size(device, config.width, config.height)))
        }
        #[cfg(not(feature = "glfw"))]
        BackendKind::Glfw => Err(crate::window::error::StageWindowError::UnsupportedBackend(
            "glfw (rebuild with the `glfw` feature)".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::realization::RealizationState;

    #[test]
    fn test_create_simulated_uses_configured_size() {
        let config = StageConfig::new("Test").with_size(1024, 768);
        let backend = create(&config).unwrap();

        assert_eq!(backend.name(), "simulated");
        assert_eq!(backend.pixel_size(), (1024, 768));
        assert_eq!(backend.realization_state(), RealizationState::Unrealized);
    }

    #[cfg(not(feature = "glfw"))]
    #[test]
    fn test_glfw_unavailable_without_feature() {
        let config = StageConfig::new("Test").with_backend(BackendKind::Glfw);
        assert!(!BackendKind::Glfw.is_available());
        assert!(matches!(
            create(&config),
            Err(crate::window::error::StageWindowError::UnsupportedBackend(_))
        ));
    }
}
