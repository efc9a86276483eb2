//! Backend-agnostic stage window contract
//!
//! This module defines the trait every platform backend implements. The stage
//! actor holds a `Box<dyn StageWindow>` and drives it exclusively through
//! this trait; it never downcasts to a concrete backend.

use crate::foundation::units::ActorBox;
use crate::stage::state::StageState;
use crate::window::error::StageResult;
use crate::window::negotiation::ModeOutcome;
use crate::window::realization::RealizationState;

/// Contract between the stage actor and a platform backend
///
/// Every call that can change the REALIZED or MAPPED flags receives the
/// actor's [`StageState`]. That reference is the backend's only way back into
/// the scene graph: it carries the flags, the property snapshot read on
/// realize, the matrices-dirty signal, and the layout bookkeeping.
///
/// # Design Philosophy
/// - **Single Source of Truth**: flags live in [`StageState`] only
/// - **Platform Authority**: the backend decides what geometry is real
/// - **No Fatal Errors**: refused modes roll back instead of failing the stage
///
/// # Thread Safety
/// No `Send` requirement. Platform windows are bound to the thread running
/// the event loop, and every call here completes before returning.
pub trait StageWindow {
    /// Short backend name for diagnostics
    fn name(&self) -> &'static str;

    /// Acquire the native window and graphics context
    ///
    /// Clears REALIZED and MAPPED first, then tries to open a window at the
    /// stored size with the fullscreen intent read from `stage` at this
    /// moment. On success REALIZED is set and the matrices are marked dirty.
    /// On failure both flags stay cleared, nothing native is left allocated,
    /// and the error says why; the stage is still usable.
    ///
    /// Must not be called twice without an intervening [`Self::unrealize`].
    fn realize(&mut self, stage: &mut StageState) -> StageResult<()>;

    /// Release native resources
    ///
    /// Safe from any state and safe to repeat.
    fn unrealize(&mut self, stage: &mut StageState);

    /// Map the window
    ///
    /// Fails with [`StageWindowError::NotRealized`](crate::window::error::StageWindowError::NotRealized)
    /// when the stage has not been realized; MAPPED is left untouched then.
    fn show(&mut self, stage: &mut StageState) -> StageResult<()>;

    /// Unmap the window
    fn hide(&mut self, stage: &mut StageState);

    /// Current realized size as an origin-anchored box
    fn query_coordinates(&self) -> ActorBox;

    /// Negotiate new geometry with the platform
    ///
    /// Returns the geometry that is actually in effect, which is `requested`
    /// when the platform accepts (or nothing had to change) and `requested`
    /// with its extent rolled back to the previous size otherwise.
    fn request_coordinates(&mut self, stage: &mut StageState, requested: ActorBox) -> ActorBox;

    /// Renegotiate the video mode with only the fullscreen bit changed
    ///
    /// The stage's `fullscreen` property follows the outcome.
    fn set_fullscreen(&mut self, stage: &mut StageState, fullscreen: bool) -> ModeOutcome;

    /// Show or hide the pointer over the window
    fn set_cursor_visible(&mut self, visible: bool);

    /// Set the window title
    fn set_title(&mut self, title: &str);

    /// Stored size in device pixels
    fn pixel_size(&self) -> (u32, u32);

    /// Where the backend is in its realization lifecycle
    fn realization_state(&self) -> RealizationState;
}
