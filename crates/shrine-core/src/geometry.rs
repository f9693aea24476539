//! # Geometry
//!
//! Layout units shared by the catalog and the cart panel. All values are
//! density-independent units (`f32`); the renderer maps them to pixels.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{validate_dimension, ValidationResult};

// =============================================================================
// Viewport
// =============================================================================

/// The bounds the storefront is laid out in.
///
/// ## Contract
/// Width and height are finite and non-negative. Host-supplied values go
/// through [`Viewport::try_new`]; [`Viewport::new`] is for values the caller
/// already trusts and panics on a violation rather than produce negative
/// geometry downstream.
///
/// Serialize only: a deserialized viewport would bypass `try_new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport, panicking on a negative or non-finite dimension.
    ///
    /// ```rust
    /// use shrine_core::Viewport;
    ///
    /// let viewport = Viewport::new(411.0, 731.0);
    /// assert_eq!(viewport.width(), 411.0);
    /// ```
    ///
    /// ```rust,should_panic
    /// use shrine_core::Viewport;
    ///
    /// let _ = Viewport::new(-1.0, 731.0);
    /// ```
    #[track_caller]
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width.is_finite() && width >= 0.0,
            "viewport width must be finite and non-negative, got {width}"
        );
        assert!(
            height.is_finite() && height >= 0.0,
            "viewport height must be finite and non-negative, got {height}"
        );
        Viewport { width, height }
    }

    /// Checked constructor for untrusted input.
    pub fn try_new(width: f32, height: f32) -> ValidationResult<Self> {
        validate_dimension("viewport.width", width)?;
        validate_dimension("viewport.height", height)?;
        Ok(Viewport { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Axis-aligned rectangle, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True if `other` lies entirely inside `self` (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_bad_dimensions() {
        assert!(Viewport::try_new(411.0, 731.0).is_ok());
        assert!(Viewport::try_new(-0.5, 731.0).is_err());
        assert!(Viewport::try_new(411.0, f32::NAN).is_err());
    }

    #[test]
    #[should_panic(expected = "viewport height")]
    fn test_new_fails_fast_on_negative_height() {
        let _ = Viewport::new(411.0, -10.0);
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(10.0, 10.0, 90.0, 90.0)));
        assert!(!outer.contains(&Rect::new(10.0, 10.0, 91.0, 90.0)));
        assert_eq!(outer.right(), 100.0);
        assert_eq!(outer.bottom(), 100.0);
    }
}
