//! Video device using GLFW
//!
//! Provides a native window with an OpenGL context. Fullscreen modes must
//! match one of the primary monitor's video modes; windowed modes are
//! accepted at any non-empty size.

use crate::window::video::{DeviceError, DeviceResult, VideoDevice, VideoMode};
use glfw::Context;

struct NativeWindow {
    window: glfw::PWindow,
    // Kept alive so GLFW keeps delivering events to this window
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    mode: VideoMode,
}

/// GLFW device with proper resource management
pub struct GlfwDevice {
    glfw: glfw::Glfw,
    native: Option<NativeWindow>,
    caption: String,
    cursor_visible: bool,
}

impl GlfwDevice {
    /// Initialize GLFW without opening a window
    pub fn new() -> DeviceResult<Self> {
        let glfw = glfw::init(glfw::log_errors)
            .map_err(|_| DeviceError::InitializationFailed)?;

        Ok(Self {
            glfw,
            native: None,
            caption: String::from("Stage"),
            cursor_visible: true,
        })
    }

    fn fullscreen_mode_exists(&mut self, width: u32, height: u32) -> bool {
        self.glfw.with_primary_monitor(|_, monitor| {
            monitor.map_or(false, |monitor| {
                monitor
                    .get_video_modes()
                    .iter()
                    .any(|vid| vid.width == width && vid.height == height)
            })
        })
    }

    fn open(&mut self, mode: VideoMode) -> DeviceResult<NativeWindow> {
        self.glfw.default_window_hints();
        self.glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        self.glfw.window_hint(glfw::WindowHint::Visible(false));
        self.glfw.window_hint(glfw::WindowHint::AccumRedBits(Some(0)));
        self.glfw.window_hint(glfw::WindowHint::AccumGreenBits(Some(0)));
        self.glfw.window_hint(glfw::WindowHint::AccumBlueBits(Some(0)));
        self.glfw.window_hint(glfw::WindowHint::AccumAlphaBits(Some(0)));

        let caption = self.caption.clone();
        let created = if mode.fullscreen {
            self.glfw.with_primary_monitor(|glfw, monitor| {
                monitor.and_then(|monitor| {
                    glfw.create_window(
                        mode.width,
                        mode.height,
                        &caption,
                        glfw::WindowMode::FullScreen(monitor),
                    )
                })
            })
        } else {
            self.glfw
                .create_window(mode.width, mode.height, &caption, glfw::WindowMode::Windowed)
        };

        let (mut window, events) = created.ok_or(DeviceError::CreationFailed)?;
        window.make_current();
        window.set_cursor_mode(cursor_mode(self.cursor_visible));

        Ok(NativeWindow {
            window,
            _events: events,
            mode,
        })
    }

    fn switch(&mut self, mode: VideoMode) -> DeviceResult<()> {
        let Some(native) = self.native.as_mut() else {
            return Err(DeviceError::CreationFailed);
        };
        let width = to_glfw_extent(mode.width)?;
        let height = to_glfw_extent(mode.height)?;

        if mode.fullscreen {
            let window = &mut native.window;
            let switched = self.glfw.with_primary_monitor(|_, monitor| {
                monitor.map_or(false, |monitor| {
                    window.set_monitor(
                        glfw::WindowMode::FullScreen(monitor),
                        0,
                        0,
                        mode.width,
                        mode.height,
                        None,
                    );
                    true
                })
            });
            if !switched {
                return Err(DeviceError::Glfw("no primary monitor".to_string()));
            }
        } else if native.mode.fullscreen {
            native
                .window
                .set_monitor(glfw::WindowMode::Windowed, 0, 0, mode.width, mode.height, None);
        } else {
            native.window.set_size(width, height);
        }

        native.mode = mode;
        Ok(())
    }
}

impl VideoDevice for GlfwDevice {
    fn name(&self) -> &'static str {
        "glfw"
    }

    fn mode_supported(&mut self, mode: VideoMode) -> bool {
        if to_glfw_extent(mode.width).is_err() || to_glfw_extent(mode.height).is_err() {
            return false;
        }
        !mode.fullscreen || self.fullscreen_mode_exists(mode.width, mode.height)
    }

    fn set_video_mode(&mut self, mode: VideoMode) -> DeviceResult<()> {
        if !self.mode_supported(mode) {
            return Err(DeviceError::ModeUnavailable { mode });
        }

        if self.native.is_some() {
            return self.switch(mode);
        }

        let native = self.open(mode)?;
        self.native = Some(native);
        Ok(())
    }

    fn close(&mut self) {
        // Dropping the window destroys it and its context
        self.native = None;
    }

    fn is_open(&self) -> bool {
        self.native.is_some()
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(native) = self.native.as_mut() {
            if visible {
                native.window.show();
            } else {
                native.window.hide();
            }
        }
    }

    fn show_cursor(&mut self, visible: bool) {
        self.cursor_visible = visible;
        if let Some(native) = self.native.as_mut() {
            native.window.set_cursor_mode(cursor_mode(visible));
        }
    }

    fn set_caption(&mut self, caption: &str) {
        caption.clone_into(&mut self.caption);
        if let Some(native) = self.native.as_mut() {
            native.window.set_title(caption);
        }
    }
}

const fn cursor_mode(visible: bool) -> glfw::CursorMode {
    if visible {
        glfw::CursorMode::Normal
    } else {
        glfw::CursorMode::Hidden
    }
}

fn to_glfw_extent(pixels: u32) -> DeviceResult<i32> {
    match i32::try_from(pixels) {
        Ok(extent) if extent > 0 => Ok(extent),
        _ => Err(DeviceError::Glfw(format!("invalid window extent {pixels}"))),
    }
}
