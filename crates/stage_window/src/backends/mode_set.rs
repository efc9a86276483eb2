//! Video-mode stage backend
//!
//! The exemplar backend. It drives any [`VideoDevice`] whose only way to
//! change the window is to set a whole new video mode, which is the lowest
//! common denominator across platforms: a size or fullscreen change is always
//! a full mode switch that the platform may refuse.

use crate::foundation::units::ActorBox;
use crate::stage::state::{ActorFlags, StageState};
use crate::window::backend::StageWindow;
use crate::window::error::{StageResult, StageWindowError};
use crate::window::negotiation::{negotiate_box, offer_mode, ModeOutcome};
use crate::window::realization::{RealizationState, SurfaceKind};
use crate::window::video::{VideoDevice, VideoMode};

/// Stage backend on top of a mode-setting video device
///
/// Owns the device exclusively. The stored width and height are the last
/// size the platform accepted and the size used on the next realize.
#[derive(Debug)]
pub struct VideoModeStage<D: VideoDevice> {
    device: D,
    width: u32,
    height: u32,
    state: RealizationState,
}

impl<D: VideoDevice> VideoModeStage<D> {
    /// Initial width before any negotiation
    pub const DEFAULT_WIDTH: u32 = 640;
    /// Initial height before any negotiation
    pub const DEFAULT_HEIGHT: u32 = 480;

    /// Create an unrealized backend at the default size
    pub const fn new(device: D) -> Self {
        Self::with_size(device, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }

    /// Create an unrealized backend at the given size
    pub const fn with_size(device: D, width: u32, height: u32) -> Self {
        Self {
            device,
            width,
            height,
            state: RealizationState::Unrealized,
        }
    }

    /// The owned device
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Mutable access to the owned device
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    fn advance(&mut self, to: RealizationState) {
        let moved = self.state.transition(to);
        debug_assert!(moved.is_ok(), "{:?}", moved);
        if let Err(err) = moved {
            log::error!("{}", err);
            self.state = to;
        }
    }
}

impl<D: VideoDevice> StageWindow for VideoModeStage<D> {
    fn name(&self) -> &'static str {
        self.device.name()
    }

    fn realize(&mut self, stage: &mut StageState) -> StageResult<()> {
        if self.state.is_realized() {
            log::warn!("{} stage realized twice without unrealize; ignoring", self.name());
            stage.set_flags(ActorFlags::REALIZED);
            return Ok(());
        }

        stage.unset_flags(ActorFlags::REALIZED);
        self.advance(RealizationState::Realizing);
        log::debug!("Realizing main stage");

        let surface = stage.properties.surface_kind();
        let fullscreen = stage.properties.fullscreen;

        if surface == SurfaceKind::Offscreen {
            log::warn!("{} backend does not support offscreen rendering", self.name());
            self.advance(RealizationState::Unrealized);
            return Err(StageWindowError::UnsupportedSurface(surface));
        }

        let mode = VideoMode {
            width: self.width,
            height: self.height,
            fullscreen,
        };

        if let Err(err) = self.device.set_video_mode(mode) {
            log::debug!("{} appears not to handle mode {} - {}", self.name(), mode, err);
            self.advance(RealizationState::Unrealized);
            return Err(StageWindowError::ModeRejected {
                mode,
                reason: err.to_string(),
            });
        }

        self.advance(RealizationState::Realized);
        stage.set_flags(ActorFlags::REALIZED);

        self.device.set_caption(&stage.properties.title);
        self.device.show_cursor(stage.properties.cursor_visible);

        stage.queue_sync_matrices();
        log::info!("{} stage realized at {}", self.name(), mode);
        Ok(())
    }

    fn unrealize(&mut self, stage: &mut StageState) {
        if !self.state.is_realized() {
            return;
        }

        self.advance(RealizationState::Unrealizing);
        self.device.close();
        stage.unset_flags(ActorFlags::REALIZED | ActorFlags::MAPPED);
        self.advance(RealizationState::Unrealized);
        log::info!("{} stage unrealized", self.name());
    }

    fn show(&mut self, stage: &mut StageState) -> StageResult<()> {
        if !self.state.is_realized() || !stage.is_realized() {
            log::warn!("Refusing to show an unrealized {} stage", self.name());
            return Err(StageWindowError::NotRealized);
        }

        self.device.set_visible(true);
        stage.set_flags(ActorFlags::MAPPED);
        Ok(())
    }

    fn hide(&mut self, stage: &mut StageState) {
        if self.state.is_realized() {
            self.device.set_visible(false);
        }
        stage.unset_flags(ActorFlags::MAPPED);
    }

    fn query_coordinates(&self) -> ActorBox {
        ActorBox::from_pixel_size(self.width, self.height)
    }

    fn request_coordinates(&mut self, stage: &mut StageState, requested: ActorBox) -> ActorBox {
        let negotiation = negotiate_box(
            &mut self.device,
            self.state.is_realized(),
            (self.width, self.height),
            stage.properties.fullscreen,
            requested,
        );

        match negotiation.outcome {
            ModeOutcome::Unchanged => stage.allocate(negotiation.result),
            ModeOutcome::Applied => {
                (self.width, self.height) = negotiation.size;
                stage.queue_sync_matrices();
                stage.allocate(negotiation.result);
                log::debug!("Stage resized to {}x{}", self.width, self.height);
            }
            ModeOutcome::Rejected => {
                log::debug!(
                    "Stage resize to {:?} refused, keeping {}x{}",
                    requested.pixel_size(),
                    self.width,
                    self.height
                );
            }
        }

        negotiation.result
    }

    fn set_fullscreen(&mut self, stage: &mut StageState, fullscreen: bool) -> ModeOutcome {
        if stage.properties.fullscreen == fullscreen {
            return ModeOutcome::Unchanged;
        }

        let realized = self.state.is_realized();
        let mode = VideoMode::windowed(self.width, self.height).with_fullscreen(fullscreen);

        let outcome = offer_mode(&mut self.device, realized, mode);
        if !outcome.is_rejected() {
            stage.properties.fullscreen = fullscreen;
            if realized {
                stage.queue_sync_matrices();
            }
        }
        outcome
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        log::trace!("Cursor visible: {}", visible);
        self.device.show_cursor(visible);
    }

    fn set_title(&mut self, title: &str) {
        log::trace!("Stage title: {}", title);
        self.device.set_caption(title);
    }

    fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn realization_state(&self) -> RealizationState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::simulated::{DisplayLimits, SimulatedDisplay};
    use crate::stage::state::StageProperties;

    fn backend(limits: DisplayLimits) -> VideoModeStage<SimulatedDisplay> {
        VideoModeStage::new(SimulatedDisplay::new(limits))
    }

    #[test]
    fn test_initial_size() {
        let stage = backend(DisplayLimits::default());
        assert_eq!(stage.pixel_size(), (640, 480));
        assert_eq!(stage.query_coordinates(), ActorBox::from_pixel_size(640, 480));
        assert_eq!(stage.realization_state(), RealizationState::Unrealized);
    }

    #[test]
    fn test_realize_opens_window_with_properties() {
        let mut stage = backend(DisplayLimits::default());
        let mut state = StageState::new(StageProperties {
            title: "Main".to_string(),
            cursor_visible: false,
            ..StageProperties::default()
        });

        stage.realize(&mut state).unwrap();

        assert!(state.is_realized());
        assert!(state.take_sync_matrices());
        assert_eq!(stage.realization_state(), RealizationState::Realized);
        assert_eq!(stage.device().current_mode(), Some(VideoMode::windowed(640, 480)));
        assert_eq!(stage.device().caption(), "Main");
        assert!(!stage.device().cursor_visible());
    }

    #[test]
    fn test_realize_snapshots_fullscreen_intent() {
        let mut stage = backend(DisplayLimits::default());
        let mut state = StageState::new(StageProperties {
            fullscreen: true,
            ..StageProperties::default()
        });

        stage.realize(&mut state).unwrap();
        state.properties.fullscreen = false;

        assert_eq!(stage.device().current_mode(), Some(VideoMode::fullscreen(640, 480)));
    }

    #[test]
    fn test_refused_realize_leaves_nothing_open() {
        let mut stage = VideoModeStage::new(SimulatedDisplay::default().rejecting_all());
        let mut state = StageState::default();

        let err = stage.realize(&mut state).unwrap_err();

        assert!(matches!(err, StageWindowError::ModeRejected { .. }));
        assert!(!state.is_realized());
        assert!(!state.take_sync_matrices());
        assert!(!stage.device().is_open());
        assert_eq!(stage.realization_state(), RealizationState::Unrealized);
    }

    #[test]
    fn test_realize_twice_is_ignored() {
        let mut stage = backend(DisplayLimits::default());
        let stats = stage.device().stats();
        let mut state = StageState::default();

        stage.realize(&mut state).unwrap();
        stage.realize(&mut state).unwrap();

        assert!(state.is_realized());
        assert_eq!(stats.get().mode_sets, 1);
    }

    #[test]
    fn test_hide_clears_mapped() {
        let mut stage = backend(DisplayLimits::default());
        let mut state = StageState::default();
        stage.realize(&mut state).unwrap();
        stage.show(&mut state).unwrap();
        assert!(state.is_mapped());
        assert!(stage.device().is_visible());

        stage.hide(&mut state);

        assert!(!state.is_mapped());
        assert!(state.is_realized());
        assert!(!stage.device().is_visible());
    }

    #[test]
    fn test_fullscreen_refusal_keeps_property() {
        let mut stage = backend(DisplayLimits {
            allow_fullscreen: false,
            ..DisplayLimits::default()
        });
        let mut state = StageState::default();
        stage.realize(&mut state).unwrap();
        state.take_sync_matrices();

        let outcome = stage.set_fullscreen(&mut state, true);

        assert_eq!(outcome, ModeOutcome::Rejected);
        assert!(!state.properties.fullscreen);
        assert!(!state.take_sync_matrices());
        assert_eq!(stage.device().current_mode(), Some(VideoMode::windowed(640, 480)));
    }

    #[test]
    fn test_fullscreen_keeps_stored_size() {
        let mut stage = backend(DisplayLimits::default());
        let mut state = StageState::default();
        stage.realize(&mut state).unwrap();
        stage.request_coordinates(&mut state, ActorBox::from_pixel_size(800, 600));

        let outcome = stage.set_fullscreen(&mut state, true);

        assert_eq!(outcome, ModeOutcome::Applied);
        assert!(state.properties.fullscreen);
        assert_eq!(stage.device().current_mode(), Some(VideoMode::fullscreen(800, 600)));
        assert_eq!(stage.set_fullscreen(&mut state, true), ModeOutcome::Unchanged);
    }

    #[test]
    fn test_fullscreen_before_realize_only_probes() {
        let mut stage = backend(DisplayLimits::default());
        let stats = stage.device().stats();
        let mut state = StageState::default();

        assert_eq!(stage.set_fullscreen(&mut state, true), ModeOutcome::Applied);

        assert!(state.properties.fullscreen);
        assert!(!stage.device().is_open());
        assert_eq!(stats.get().mode_sets, 0);
        assert_eq!(stats.get().mode_checks, 1);
    }

    #[test]
    fn test_realize_twice_resyncs_flags() {
        let mut stage = backend(DisplayLimits::default());
        let stats = stage.device().stats();
        stage.realize(&mut StageState::default()).unwrap();

        let mut fresh = StageState::default();
        assert!(matches!(stage.show(&mut fresh), Err(StageWindowError::NotRealized)));
        assert!(!fresh.is_mapped());

        stage.realize(&mut fresh).unwrap();
        stage.show(&mut fresh).unwrap();

        assert!(fresh.is_realized());
        assert!(fresh.is_mapped());
        assert_eq!(stats.get().mode_sets, 1);
    }

    #[test]
    fn test_fullscreen_refused_before_realize() {
        let mut stage = backend(DisplayLimits {
            allow_fullscreen: false,
            ..DisplayLimits::default()
        });
        let stats = stage.device().stats();
        let mut state = StageState::default();

        assert_eq!(stage.set_fullscreen(&mut state, true), ModeOutcome::Rejected);

        assert!(!state.properties.fullscreen);
        assert_eq!(stats.get().mode_checks, 1);
        assert_eq!(stats.get().mode_sets, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "InvalidTransition")]
    fn test_illegal_transition_asserts() {
        let mut stage = backend(DisplayLimits::default());
        stage.state = RealizationState::Realized;
        stage.advance(RealizationState::Realizing);
    }
}
