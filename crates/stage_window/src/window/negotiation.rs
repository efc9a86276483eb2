//! Mode negotiation
//!
//! The scene graph asks for geometry; the platform decides what it gets.
//! [`negotiate_box`] turns a requested box into the box that is actually
//! true after the platform has answered, so a layout pass can use the result
//! without knowing whether its request was honoured.

use crate::foundation::units::ActorBox;
use crate::window::video::{VideoDevice, VideoMode};

/// How the platform answered a mode request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeOutcome {
    /// Nothing to change; the platform was not consulted
    Unchanged,
    /// The platform accepted the new mode
    Applied,
    /// The platform refused; the previous mode is still in effect
    Rejected,
}

impl ModeOutcome {
    /// Whether the previous mode is still in effect
    pub const fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Result of negotiating a requested box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxNegotiation {
    /// Geometry that is true after the negotiation
    pub result: ActorBox,
    /// Platform answer
    pub outcome: ModeOutcome,
    /// Pixel size in effect after the negotiation
    pub size: (u32, u32),
}

/// Offer `mode` to the platform
///
/// A realized backend applies the mode to its window. An unrealized one only
/// asks whether the mode would be accepted, since applying it would create a
/// native window behind the state machine's back.
pub fn offer_mode<D: VideoDevice + ?Sized>(device: &mut D, realized: bool, mode: VideoMode) -> ModeOutcome {
    let accepted = if realized {
        match device.set_video_mode(mode) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("{} appears not to handle this mode - {}", device.name(), err);
                false
            }
        }
    } else {
        let supported = device.mode_supported(mode);
        if !supported {
            log::debug!("{} does not support {}", device.name(), mode);
        }
        supported
    };

    if accepted {
        ModeOutcome::Applied
    } else {
        ModeOutcome::Rejected
    }
}

/// Negotiate a requested box against the current pixel size
///
/// The extent is the truncated absolute extent of `requested`, so edges may
/// come in either order. When it matches `current` the platform is never
/// consulted and `requested` comes back untouched. On refusal the returned
/// box keeps the requested origin and carries the `current` extent.
pub fn negotiate_box<D: VideoDevice + ?Sized>(
    device: &mut D,
    realized: bool,
    current: (u32, u32),
    fullscreen: bool,
    requested: ActorBox,
) -> BoxNegotiation {
    let (width, height) = requested.pixel_size();

    if (width, height) == current {
        return BoxNegotiation {
            result: requested,
            outcome: ModeOutcome::Unchanged,
            size: current,
        };
    }

    let mode = VideoMode { width, height, fullscreen };
    match offer_mode(device, realized, mode) {
        ModeOutcome::Rejected => BoxNegotiation {
            result: requested.with_pixel_extent(current.0, current.1),
            outcome: ModeOutcome::Rejected,
            size: current,
        },
        outcome => BoxNegotiation {
            result: requested,
            outcome,
            size: (width, height),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::simulated::{DisplayLimits, SimulatedDisplay};
    use crate::foundation::units::Units;

    fn display(max: u32) -> SimulatedDisplay {
        SimulatedDisplay::new(DisplayLimits {
            max_width: max,
            max_height: max,
            allow_fullscreen: true,
        })
    }

    #[test]
    fn test_unchanged_size_skips_platform() {
        let mut device = display(4096);
        let stats = device.stats();
        let requested = ActorBox::from_pixels(3, 4, 640, 480);

        let n = negotiate_box(&mut device, true, (640, 480), false, requested);

        assert_eq!(n.outcome, ModeOutcome::Unchanged);
        assert_eq!(n.result, requested);
        assert_eq!(stats.get().platform_calls(), 0);
    }

    #[test]
    fn test_accepted_size_is_returned_verbatim() {
        let mut device = display(4096);
        device.set_video_mode(VideoMode::windowed(640, 480)).unwrap();
        let requested = ActorBox::from_pixel_size(1024, 768);

        let n = negotiate_box(&mut device, true, (640, 480), false, requested);

        assert_eq!(n.outcome, ModeOutcome::Applied);
        assert_eq!(n.result, requested);
        assert_eq!(n.size, (1024, 768));
        assert_eq!(device.current_mode(), Some(VideoMode::windowed(1024, 768)));
    }

    #[test]
    fn test_rejection_rolls_back_extent_not_origin() {
        let mut device = display(800);
        let requested = ActorBox::from_pixels(10, 20, 1024, 768);

        let n = negotiate_box(&mut device, false, (640, 480), false, requested);

        assert_eq!(n.outcome, ModeOutcome::Rejected);
        assert_eq!(n.size, (640, 480));
        assert_eq!(n.result.origin(), (Units::from_pixels(10), Units::from_pixels(20)));
        assert_eq!(n.result.pixel_size(), (640, 480));
    }

    #[test]
    fn test_unrealized_offer_only_probes() {
        let mut device = display(4096);
        let stats = device.stats();

        let outcome = offer_mode(&mut device, false, VideoMode::windowed(800, 600));

        assert_eq!(outcome, ModeOutcome::Applied);
        assert_eq!(stats.get().mode_checks, 1);
        assert_eq!(stats.get().mode_sets, 0);
        assert!(!device.is_open());
    }

    #[test]
    fn test_reversed_box_negotiates_same_size() {
        let mut device = display(4096);
        let reversed = ActorBox::new(
            Units::from_pixels(1024),
            Units::from_pixels(768),
            Units::ZERO,
            Units::ZERO,
        );

        let n = negotiate_box(&mut device, false, (640, 480), false, reversed);

        assert_eq!(n.outcome, ModeOutcome::Applied);
        assert_eq!(n.size, (1024, 768));
    }
}
