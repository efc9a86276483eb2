//! Actor-side stage state
//!
//! [`StageState`] is the only place the REALIZED and MAPPED flags live.
//! Backends receive it by mutable reference for the duration of a call and
//! update it in the same step as their own native state, so the scene graph
//! and the backend can never disagree about the flags.

use crate::foundation::units::ActorBox;
use crate::window::realization::SurfaceKind;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Public actor flags shared with the scene graph
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ActorFlags: u32 {
        /// Native resources are acquired
        const REALIZED = 1 << 0;
        /// The window is visible on screen
        const MAPPED = 1 << 1;
    }
}

bitflags! {
    /// Private flags consumed by the paint loop
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PrivateFlags: u32 {
        /// Projection and view matrices must be recomputed before the next paint
        const SYNC_MATRICES = 1 << 0;
    }
}

/// Stage properties read by backends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProperties {
    /// Window title
    pub title: String,
    /// Fullscreen intent, snapshotted on realize
    pub fullscreen: bool,
    /// Render to an off-screen surface instead of a window
    pub offscreen: bool,
    /// Whether the pointer is visible over the stage
    pub cursor_visible: bool,
}

impl StageProperties {
    /// Surface kind requested by these properties
    pub const fn surface_kind(&self) -> SurfaceKind {
        if self.offscreen {
            SurfaceKind::Offscreen
        } else {
            SurfaceKind::Onscreen
        }
    }
}

impl Default for StageProperties {
    fn default() -> Self {
        Self {
            title: "Stage".to_string(),
            fullscreen: false,
            offscreen: false,
            cursor_visible: true,
        }
    }
}

/// State the stage actor owns and lends to its backend
#[derive(Debug, Clone, Default)]
pub struct StageState {
    flags: ActorFlags,
    private_flags: PrivateFlags,
    /// Properties backends read when negotiating modes
    pub properties: StageProperties,
    allocation: ActorBox,
}

impl StageState {
    /// Create state with the given properties and nothing realized
    pub fn new(properties: StageProperties) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    /// Current actor flags
    pub const fn flags(&self) -> ActorFlags {
        self.flags
    }

    /// Set actor flags
    pub fn set_flags(&mut self, flags: ActorFlags) {
        self.flags.insert(flags);
    }

    /// Clear actor flags
    pub fn unset_flags(&mut self, flags: ActorFlags) {
        self.flags.remove(flags);
    }

    /// Whether REALIZED is set
    pub const fn is_realized(&self) -> bool {
        self.flags.contains(ActorFlags::REALIZED)
    }

    /// Whether MAPPED is set
    pub const fn is_mapped(&self) -> bool {
        self.flags.contains(ActorFlags::MAPPED)
    }

    /// Current private flags
    pub const fn private_flags(&self) -> PrivateFlags {
        self.private_flags
    }

    /// Ask the paint loop to resynchronize its matrices
    pub fn queue_sync_matrices(&mut self) {
        self.private_flags.insert(PrivateFlags::SYNC_MATRICES);
    }

    /// Consume the matrices-dirty signal
    pub fn take_sync_matrices(&mut self) -> bool {
        let dirty = self.private_flags.contains(PrivateFlags::SYNC_MATRICES);
        self.private_flags.remove(PrivateFlags::SYNC_MATRICES);
        dirty
    }

    /// Geometry last accepted by the layout bookkeeping
    pub const fn allocation(&self) -> ActorBox {
        self.allocation
    }

    /// Record geometry in the layout bookkeeping
    pub fn allocate(&mut self, allocation: ActorBox) {
        self.allocation = allocation;
    }
}
