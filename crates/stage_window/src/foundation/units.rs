//! Fixed-point units for box geometry
//!
//! All geometry exchanged with the scene graph is expressed in [`Units`], a
//! fixed-point scalar with 10 fractional bits. One unit is 1/1024 of a device
//! pixel. Platforms only understand whole pixels, so every conversion towards
//! the platform goes through the helpers in this module.
//!
//! # Rounding
//!
//! Origins convert with [`Units::to_pixels`] (floor). Extents convert by
//! taking the absolute difference first and truncating the result, see
//! [`ActorBox::pixel_size`]. Mixing rules drifts the realized size by a pixel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Number of fractional bits in a [`Units`] value
pub const UNITS_SHIFT: u32 = 10;

/// Units per device pixel
pub const UNITS_PER_PIXEL: i32 = 1 << UNITS_SHIFT;

/// Fixed-point scene-graph coordinate (1/1024 of a device pixel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Units(i32);

impl Units {
    /// Zero units
    pub const ZERO: Self = Self(0);

    /// Largest representable value
    pub const MAX: Self = Self(i32::MAX);

    /// Wrap a raw fixed-point value
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw fixed-point value
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Convert whole device pixels to units
    pub const fn from_pixels(pixels: i32) -> Self {
        Self(pixels << UNITS_SHIFT)
    }

    /// Convert a fractional pixel value to units, rounding to the nearest unit
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f32(pixels: f32) -> Self {
        Self((pixels * UNITS_PER_PIXEL as f32).round() as i32)
    }

    /// Convert to whole pixels, rounding towards negative infinity
    pub const fn to_pixels(self) -> i32 {
        self.0 >> UNITS_SHIFT
    }

    /// Convert to whole pixels, rounding towards positive infinity
    pub const fn to_pixels_ceil(self) -> i32 {
        -((-self.0) >> UNITS_SHIFT)
    }

    /// Convert to fractional pixels
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / UNITS_PER_PIXEL as f32
    }

    /// Absolute value, saturating at [`Units::MAX`]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Addition clamped to the representable range
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Add for Units {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Units {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Units {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}u", self.0)
    }
}

/// Rectangle in scene-graph units
///
/// Producers are expected to keep `x2 >= x1` and `y2 >= y1`, but extent
/// queries tolerate either order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorBox {
    /// Left edge
    pub x1: Units,
    /// Top edge
    pub y1: Units,
    /// Right edge
    pub x2: Units,
    /// Bottom edge
    pub y2: Units,
}

impl ActorBox {
    /// Create a box from its four edges
    pub const fn new(x1: Units, y1: Units, x2: Units, y2: Units) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a box from a pixel origin and a pixel size
    pub const fn from_pixels(x: i32, y: i32, width: u32, height: u32) -> Self {
        let x1 = Units::from_pixels(x);
        let y1 = Units::from_pixels(y);
        Self {
            x1,
            y1,
            x2: x1.saturating_add(Units::from_pixels(pixel_i32(width))),
            y2: y1.saturating_add(Units::from_pixels(pixel_i32(height))),
        }
    }

    /// Create a box of the given pixel size anchored at the origin
    pub const fn from_pixel_size(width: u32, height: u32) -> Self {
        Self::from_pixels(0, 0, width, height)
    }

    /// Top-left corner
    pub const fn origin(&self) -> (Units, Units) {
        (self.x1, self.y1)
    }

    /// Horizontal extent, independent of edge order
    ///
    /// Saturates at [`Units::MAX`] when the edges are further apart than a
    /// single value can hold.
    pub const fn width(&self) -> Units {
        Units::from_raw(saturate_i32(span(self.x1, self.x2)))
    }

    /// Vertical extent, independent of edge order
    pub const fn height(&self) -> Units {
        Units::from_raw(saturate_i32(span(self.y1, self.y2)))
    }

    /// Extent in whole device pixels
    ///
    /// Each extent is the truncated absolute difference of its edge pair, so a
    /// box and the same box with swapped edges always report the same size.
    /// The difference is taken in 64 bits and never overflows.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn pixel_size(&self) -> (u32, u32) {
        (
            (span(self.x1, self.x2) >> UNITS_SHIFT) as u32,
            (span(self.y1, self.y2) >> UNITS_SHIFT) as u32,
        )
    }

    /// Whether `x2 >= x1` and `y2 >= y1`
    pub fn is_normalized(&self) -> bool {
        self.x2 >= self.x1 && self.y2 >= self.y1
    }

    /// Same rectangle with edges ordered so that `x2 >= x1` and `y2 >= y1`
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Keep the origin and replace the extent with a pixel size
    pub const fn with_pixel_extent(&self, width: u32, height: u32) -> Self {
        Self {
            x1: self.x1,
            y1: self.y1,
            x2: self.x1.saturating_add(Units::from_pixels(pixel_i32(width))),
            y2: self.y1.saturating_add(Units::from_pixels(pixel_i32(height))),
        }
    }
}

impl fmt::Display for ActorBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}, {:.2}, {:.2}]",
            self.x1.to_f32(),
            self.y1.to_f32(),
            self.x2.to_f32(),
            self.y2.to_f32()
        )
    }
}

/// Distance between two edges in raw units
#[allow(clippy::cast_lossless)]
const fn span(a: Units, b: Units) -> u64 {
    (b.raw() as i64 - a.raw() as i64).unsigned_abs()
}

#[allow(clippy::cast_possible_truncation)]
const fn saturate_i32(raw: u64) -> i32 {
    if raw > i32::MAX as u64 {
        i32::MAX
    } else {
        raw as i32
    }
}

/// Clamp a pixel count into the range a fixed-point value can hold
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
const fn pixel_i32(pixels: u32) -> i32 {
    const MAX_PIXELS: u32 = (i32::MAX >> UNITS_SHIFT) as u32;
    if pixels > MAX_PIXELS {
        MAX_PIXELS as i32
    } else {
        pixels as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pixel_conversion() {
        assert_eq!(Units::from_pixels(1).raw(), 1024);
        assert_eq!(Units::from_pixels(640).to_pixels(), 640);
        assert_eq!(Units::from_pixels(-3).to_pixels(), -3);
    }

    #[test]
    fn test_floor_and_ceil() {
        let half = Units::from_f32(1.5);
        assert_eq!(half.to_pixels(), 1);
        assert_eq!(half.to_pixels_ceil(), 2);

        let negative = Units::from_f32(-1.5);
        assert_eq!(negative.to_pixels(), -2);
        assert_eq!(negative.to_pixels_ceil(), -1);
    }

    #[test]
    fn test_float_conversion() {
        assert_relative_eq!(Units::from_f32(12.25).to_f32(), 12.25);
        assert_relative_eq!(Units::from_raw(512).to_f32(), 0.5);
    }

    #[test]
    fn test_pixel_size_ignores_edge_order() {
        let forward = ActorBox::new(
            Units::from_f32(10.0),
            Units::from_f32(20.0),
            Units::from_f32(110.5),
            Units::from_f32(70.75),
        );
        let reversed = ActorBox::new(forward.x2, forward.y2, forward.x1, forward.y1);

        assert!(!reversed.is_normalized());
        assert_eq!(forward.pixel_size(), (100, 50));
        assert_eq!(reversed.pixel_size(), forward.pixel_size());
        assert_eq!(reversed.normalized(), forward);
    }

    #[test]
    fn test_pixel_size_truncates_fractional_extent() {
        let b = ActorBox::new(
            Units::ZERO,
            Units::ZERO,
            Units::from_f32(99.9),
            Units::from_f32(0.4),
        );
        assert_eq!(b.pixel_size(), (99, 0));
    }

    #[test]
    fn test_with_pixel_extent_keeps_origin() {
        let b = ActorBox::from_pixels(5, 7, 100, 100).with_pixel_extent(640, 480);
        assert_eq!(b.origin(), (Units::from_pixels(5), Units::from_pixels(7)));
        assert_eq!(b.pixel_size(), (640, 480));
        assert_eq!(b.x2, Units::from_pixels(645));
    }

    #[test]
    fn test_from_pixel_size_is_origin_anchored() {
        let b = ActorBox::from_pixel_size(1024, 768);
        assert_eq!(b.origin(), (Units::ZERO, Units::ZERO));
        assert_eq!(b.x2, Units::from_pixels(1024));
        assert_eq!(b.y2, Units::from_pixels(768));
    }

    #[test]
    fn test_extent_spanning_whole_range() {
        let wide = ActorBox::new(
            Units::from_pixels(-1_100_000),
            Units::ZERO,
            Units::from_pixels(1_100_000),
            Units::from_pixels(10),
        );
        let reversed = ActorBox::new(wide.x2, wide.y2, wide.x1, wide.y1);

        assert_eq!(wide.pixel_size(), (2_200_000, 10));
        assert_eq!(reversed.pixel_size(), wide.pixel_size());
        assert_eq!(wide.width(), Units::MAX);

        let extreme = ActorBox::new(
            Units::from_raw(i32::MIN),
            Units::from_raw(i32::MAX),
            Units::from_raw(i32::MAX),
            Units::from_raw(i32::MIN),
        );
        assert_eq!(extreme.pixel_size(), (u32::MAX >> UNITS_SHIFT, u32::MAX >> UNITS_SHIFT));
    }

    #[test]
    fn test_with_pixel_extent_saturates_near_edge() {
        let near_edge = ActorBox::from_pixels(2_097_000, 0, 10, 10);

        let b = near_edge.with_pixel_extent(640, 480);

        assert_eq!(b.origin(), near_edge.origin());
        assert_eq!(b.x2, Units::MAX);
        assert_eq!(b.y2, Units::from_pixels(480));
        assert_eq!(Units::from_raw(i32::MIN).abs(), Units::MAX);
    }
}
