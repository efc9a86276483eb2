//! Stage actor
//!
//! The [`Stage`] is the scene graph's top-level node for the on-screen
//! window. It owns the canonical [`StageState`] and exactly one backend, and
//! forwards every windowing request to that backend through the
//! [`StageWindow`] contract.

pub mod state;


use crate::backends;
use crate::core::config::StageConfig;
use crate::foundation::units::ActorBox;
use crate::window::backend::StageWindow;
use crate::window::error::StageResult;
use crate::window::negotiation::ModeOutcome;
use crate::window::realization::RealizationState;

pub use state::{ActorFlags, PrivateFlags, StageProperties, StageState};

/// Top-level scene-graph node bound to a platform window
///
/// Dropping the stage unrealizes its backend.
pub struct Stage {
    state: StageState,
    backend: Box<dyn StageWindow>,
}

impl Stage {
    /// Create a stage around an existing backend
    ///
    /// A backend that is already realized marks the stage realized.
    pub fn new(properties: StageProperties, backend: Box<dyn StageWindow>) -> Self {
        let mut state = StageState::new(properties);
        state.allocate(backend.query_coordinates());
        if backend.realization_state().is_realized() {
            state.set_flags(ActorFlags::REALIZED);
        }

        log::debug!("Stage created with {} backend", backend.name());
        Self { state, backend }
    }

    /// Create a stage and its backend from configuration
    pub fn from_config(config: &StageConfig) -> StageResult<Self> {
        config.validate()?;
        let backend = backends::create(config)?;
        Ok(Self::new(config.properties(), backend))
    }

    /// Replace the backend
    ///
    /// The current backend is unrealized and dropped first. The stage comes
    /// back unmapped, and unrealized unless the new backend already is.
    pub fn set_backend(&mut self, backend: Box<dyn StageWindow>) {
        self.backend.unrealize(&mut self.state);
        log::debug!("Swapping stage backend {} -> {}", self.backend.name(), backend.name());
        self.backend = backend;
        self.state.allocate(self.backend.query_coordinates());
        if self.backend.realization_state().is_realized() {
            self.state.set_flags(ActorFlags::REALIZED);
        }
    }

    /// Name of the active backend
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Realize the stage
    ///
    /// On error the stage stays unrealized and may be realized again, for
    /// example after a smaller size has been requested.
    pub fn realize(&mut self) -> StageResult<()> {
        self.backend.realize(&mut self.state).map_err(|err| {
            log::debug!("Stage realization failed: {}", err);
            err
        })
    }

    /// Unrealize the stage; does nothing if it is not realized
    pub fn unrealize(&mut self) {
        self.backend.unrealize(&mut self.state);
    }

    /// Map the stage; it must be realized
    pub fn show(&mut self) -> StageResult<()> {
        self.backend.show(&mut self.state)
    }

    /// Unmap the stage
    pub fn hide(&mut self) {
        self.backend.hide(&mut self.state);
    }

    /// Current realized geometry
    pub fn query_coordinates(&self) -> ActorBox {
        self.backend.query_coordinates()
    }

    /// Ask for new geometry and get back the geometry actually in effect
    pub fn request_coordinates(&mut self, requested: ActorBox) -> ActorBox {
        self.backend.request_coordinates(&mut self.state, requested)
    }

    /// Ask for a new pixel size at the current origin
    pub fn set_size(&mut self, width: u32, height: u32) -> (u32, u32) {
        let requested = self.state.allocation().with_pixel_extent(width, height);
        self.request_coordinates(requested).pixel_size()
    }

    /// Switch between windowed and fullscreen
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> ModeOutcome {
        self.backend.set_fullscreen(&mut self.state, fullscreen)
    }

    /// Show or hide the pointer
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.state.properties.cursor_visible = visible;
        self.backend.set_cursor_visible(visible);
    }

    /// Set the window title
    pub fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.state.properties.title);
        self.backend.set_title(title);
    }

    /// Request or cancel an off-screen surface for the next realize
    pub fn set_offscreen(&mut self, offscreen: bool) {
        self.state.properties.offscreen = offscreen;
    }

    /// Whether REALIZED is set
    pub const fn is_realized(&self) -> bool {
        self.state.is_realized()
    }

    /// Whether MAPPED is set
    pub const fn is_mapped(&self) -> bool {
        self.state.is_mapped()
    }

    /// Current actor flags
    pub const fn flags(&self) -> ActorFlags {
        self.state.flags()
    }

    /// Backend lifecycle state
    pub fn realization_state(&self) -> RealizationState {
        self.backend.realization_state()
    }

    /// Stage properties
    pub const fn properties(&self) -> &StageProperties {
        &self.state.properties
    }

    /// Geometry last recorded by the layout bookkeeping
    pub const fn allocation(&self) -> ActorBox {
        self.state.allocation()
    }

    /// Consume the matrices-dirty signal before painting
    pub fn take_sync_matrices(&mut self) -> bool {
        self.state.take_sync_matrices()
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        self.backend.unrealize(&mut self.state);
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("backend", &self.backend.name())
            .field("state", &self.state)
            .finish()
    }
}
