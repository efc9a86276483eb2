//! Simulated display device
//!
//! A deterministic stand-in for a real platform. It accepts or refuses modes
//! from a fixed set of limits and counts every call it receives, which makes
//! it useful both for dry runs without a display and as a test stub.

use crate::window::video::{DeviceError, DeviceResult, VideoDevice, VideoMode};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Modes a simulated display accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLimits {
    /// Largest accepted width in pixels
    pub max_width: u32,
    /// Largest accepted height in pixels
    pub max_height: u32,
    /// Whether fullscreen modes are accepted at all
    pub allow_fullscreen: bool,
}

impl DisplayLimits {
    /// Limits that accept any non-empty mode
    pub const fn unlimited() -> Self {
        Self {
            max_width: u32::MAX,
            max_height: u32::MAX,
            allow_fullscreen: true,
        }
    }

    /// Whether `mode` fits these limits
    pub const fn accepts(&self, mode: VideoMode) -> bool {
        mode.width > 0
            && mode.height > 0
            && mode.width <= self.max_width
            && mode.height <= self.max_height
            && (!mode.fullscreen || self.allow_fullscreen)
    }
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_width: 1920,
            max_height: 1080,
            allow_fullscreen: true,
        }
    }
}

/// Call counters of a [`SimulatedDisplay`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// `mode_supported` calls
    pub mode_checks: u32,
    /// `set_video_mode` calls, accepted or not
    pub mode_sets: u32,
    /// `set_video_mode` calls that were refused
    pub mode_rejections: u32,
    /// `close` calls that released a window
    pub closes: u32,
    /// `set_visible` calls
    pub visibility_changes: u32,
    /// `show_cursor` calls
    pub cursor_changes: u32,
    /// `set_caption` calls
    pub caption_changes: u32,
}

impl DeviceStats {
    /// Calls that asked the platform about a video mode
    pub const fn platform_calls(&self) -> u32 {
        self.mode_checks + self.mode_sets
    }
}

/// Deterministic platform display
#[derive(Debug)]
pub struct SimulatedDisplay {
    limits: DisplayLimits,
    reject_all: bool,
    current: Option<VideoMode>,
    visible: bool,
    cursor_visible: bool,
    caption: String,
    stats: Rc<Cell<DeviceStats>>,
}

impl SimulatedDisplay {
    /// Create a closed display with the given limits
    pub fn new(limits: DisplayLimits) -> Self {
        Self {
            limits,
            reject_all: false,
            current: None,
            visible: false,
            cursor_visible: true,
            caption: String::new(),
            stats: Rc::default(),
        }
    }

    /// Refuse every mode, regardless of limits
    pub fn set_reject_all(&mut self, reject_all: bool) {
        self.reject_all = reject_all;
    }

    /// Builder form of [`Self::set_reject_all`]
    pub fn rejecting_all(mut self) -> Self {
        self.reject_all = true;
        self
    }

    /// Shared handle to the call counters
    ///
    /// The handle stays valid after the display has been moved into a
    /// backend.
    pub fn stats(&self) -> Rc<Cell<DeviceStats>> {
        Rc::clone(&self.stats)
    }

    /// Mode of the open window
    pub const fn current_mode(&self) -> Option<VideoMode> {
        self.current
    }

    /// Whether the window is mapped
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the pointer is shown
    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Current caption
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Display limits
    pub const fn limits(&self) -> DisplayLimits {
        self.limits
    }

    fn record(&self, update: impl FnOnce(&mut DeviceStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }

    fn accepts(&self, mode: VideoMode) -> bool {
        !self.reject_all && self.limits.accepts(mode)
    }
}

impl Default for SimulatedDisplay {
    fn default() -> Self {
        Self::new(DisplayLimits::default())
    }
}

impl VideoDevice for SimulatedDisplay {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn mode_supported(&mut self, mode: VideoMode) -> bool {
        self.record(|s| s.mode_checks += 1);
        self.accepts(mode)
    }

    fn set_video_mode(&mut self, mode: VideoMode) -> DeviceResult<()> {
        self.record(|s| s.mode_sets += 1);

        if !self.accepts(mode) {
            self.record(|s| s.mode_rejections += 1);
            return Err(DeviceError::ModeUnavailable { mode });
        }

        self.current = Some(mode);
        Ok(())
    }

    fn close(&mut self) {
        if self.current.take().is_some() {
            self.visible = false;
            self.record(|s| s.closes += 1);
        }
    }

    fn is_open(&self) -> bool {
        self.current.is_some()
    }

    fn set_visible(&mut self, visible: bool) {
        self.record(|s| s.visibility_changes += 1);
        self.visible = visible && self.current.is_some();
    }

    fn show_cursor(&mut self, visible: bool) {
        self.record(|s| s.cursor_changes += 1);
        self.cursor_visible = visible;
    }

    fn set_caption(&mut self, caption: &str) {
        self.record(|s| s.caption_changes += 1);
        self.caption = caption.to_string();
    }
}
