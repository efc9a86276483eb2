//! Realization state machine
//!
//! ```text
//!  Unrealized ──realize──▶ Realizing ──ok──▶ Realized
//!      ▲                      │                 │
//!      └──────── refused ─────┘             unrealize
//!      ▲                                        │
//!      └────────────── Unrealizing ◀────────────┘
//! ```
//!
//! `Realizing` and `Unrealizing` only exist while a backend call is running;
//! between calls a backend is always `Unrealized` or `Realized`.

use crate::window::error::{StageResult, StageWindowError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a backend is in its realization lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RealizationState {
    /// No native resources held
    #[default]
    Unrealized,
    /// Native acquisition in progress
    Realizing,
    /// Native window and graphics context held
    Realized,
    /// Native release in progress
    Unrealizing,
}

impl RealizationState {
    /// Whether moving from `self` to `to` is a legal transition
    pub const fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Unrealized, Self::Realizing)
                | (Self::Realizing, Self::Realized | Self::Unrealized)
                | (Self::Realized, Self::Unrealizing)
                | (Self::Unrealizing, Self::Unrealized)
        )
    }

    /// Move to `to`, refusing illegal transitions
    pub fn transition(&mut self, to: Self) -> StageResult<()> {
        if !self.can_transition(to) {
            return Err(StageWindowError::InvalidTransition { from: *self, to });
        }
        log::trace!("Realization {:?} -> {:?}", self, to);
        *self = to;
        Ok(())
    }

    /// Whether native resources are held
    pub const fn is_realized(self) -> bool {
        matches!(self, Self::Realized)
    }
}

/// Kind of surface a stage renders to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// A visible platform window
    #[default]
    Onscreen,
    /// An off-screen render target
    Offscreen,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Onscreen => f.write_str("onscreen"),
            Self::Offscreen => f.write_str("offscreen"),
        }
    }
}
