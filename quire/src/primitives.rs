//! Core primitive types for quire.
//!
//! Sizes are expressed in abstract layout units; the engine never converts
//! them to pixels.

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing widths if none is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// A size in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Place `other` to the right of `self` (horizontal flow).
    ///
    /// Widths add up, the taller of the two wins on height.
    #[inline]
    pub fn beside(self, other: Size) -> Size {
        Size {
            width: self.width + other.width,
            height: self.height.max(other.height),
        }
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Compare two widths within `tolerance`.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beside_sums_width_and_maxes_height() {
        let size = Size::new(10.0, 4.0).beside(Size::new(5.0, 7.0));
        assert_eq!(size, Size::new(15.0, 7.0));
    }

    #[test]
    fn test_zero_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-9, DEFAULT_TOLERANCE));
        assert!(!approx_eq(1.0, 1.1, DEFAULT_TOLERANCE));
    }
}
