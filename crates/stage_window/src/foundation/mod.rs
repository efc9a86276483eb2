//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Fixed-point units and box geometry
//! - Logging utilities

pub mod units;
pub mod logging;
