//! # Stage Configuration
//!
//! Configuration types for the stage and its surroundings. Everything here is
//! serializable and loads through the [`Config`] trait from TOML or RON.
//!
//! ## Configuration Categories
//!
//! - **Stage Config**: initial size, title, fullscreen/offscreen intent, backend
//! - **Logging Config**: default log level for `env_logger`
//! - **Application Config**: the two above, as one file

use crate::backends::{BackendKind, DisplayLimits};
use crate::stage::state::StageProperties;
use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Stage Configuration
///
/// Initial properties of the stage and the backend that realizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
    /// Realize in fullscreen mode
    pub fullscreen: bool,
    /// Request an off-screen surface
    pub offscreen: bool,
    /// Show the pointer over the stage
    pub cursor_visible: bool,
    /// Backend selection
    pub backend: BackendKind,
    /// Limits of the simulated display backend
    pub display: DisplayLimits,
}

impl StageConfig {
    /// Create a stage configuration with defaults
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 640,
            height: 480,
            fullscreen: false,
            offscreen: false,
            cursor_visible: true,
            backend: BackendKind::default(),
            display: DisplayLimits::default(),
        }
    }

    /// Set initial size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set fullscreen intent
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Request an off-screen surface
    pub fn with_offscreen(mut self, offscreen: bool) -> Self {
        self.offscreen = offscreen;
        self
    }

    /// Set pointer visibility
    pub fn with_cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    /// Select the backend
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the simulated display limits
    pub fn with_display(mut self, display: DisplayLimits) -> Self {
        self.display = display;
        self
    }

    /// Stage properties described by this configuration
    pub fn properties(&self) -> StageProperties {
        StageProperties {
            title: self.title.clone(),
            fullscreen: self.fullscreen,
            offscreen: self.offscreen,
            cursor_visible: self.cursor_visible,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Invalid("Stage title cannot be empty".to_string()));
        }

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Stage size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        Ok(())
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new("Stage")
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
}

impl LoggingConfig {
    /// Set log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) { "debug" } else { "info" }.to_string(),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration file applications load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Stage configuration
    pub stage: StageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ApplicationConfig {
    /// Create an application configuration for the given stage title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            stage: StageConfig::new(title),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config for ApplicationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.stage.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StageConfig::default();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.backend, BackendKind::Simulated);
        assert!(config.cursor_visible);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            StageConfig::new("").validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            StageConfig::new("Stage").with_size(0, 480).validate(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_properties_follow_config() {
        let props = StageConfig::new("Demo")
            .with_fullscreen(true)
            .with_offscreen(true)
            .with_cursor_visible(false)
            .properties();

        assert_eq!(props.title, "Demo");
        assert!(props.fullscreen);
        assert!(props.offscreen);
        assert!(!props.cursor_visible);
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let text = r#"
            [stage]
            title = "From TOML"
            width = 1024
            height = 768
            backend = "simulated"

            [stage.display]
            max_width = 800
            max_height = 800
            allow_fullscreen = false
        "#;

        let config = ApplicationConfig::from_str_as(text, ConfigFormat::Toml).unwrap();

        assert_eq!(config.stage.title, "From TOML");
        assert_eq!((config.stage.width, config.stage.height), (1024, 768));
        assert_eq!(config.stage.display.max_width, 800);
        assert!(!config.stage.fullscreen);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let text = "[stage]\ntitle = \"\"\n";
        assert!(matches!(
            ApplicationConfig::from_str_as(text, ConfigFormat::Toml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_ron_save_and_load() {
        let path = std::env::temp_dir().join(format!("stage_window_config_{}.ron", std::process::id()));
        let config = ApplicationConfig::new("Saved")
            .stage
            .with_size(800, 600)
            .with_backend(BackendKind::Glfw);
        let config = ApplicationConfig {
            stage: config,
            logging: LoggingConfig::default().with_level("warn"),
        };

        config.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
