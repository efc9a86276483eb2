//! # Core Module
//!
//! Shared configuration used by the stage, its backends, and applications.
//!
//! ## Organization
//!
//! - **Config**: stage, logging, and application configuration
//! - **Foundation**: low-level utilities (units, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    StageConfig,
    LoggingConfig,
    Config,
    ConfigError,
    ConfigFormat,
};
