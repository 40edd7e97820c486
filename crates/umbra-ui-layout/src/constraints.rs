//! Layout constraint envelope handed to leaf measurement

use crate::Size;

/// Dimension at or above which a constraint maximum counts as unbounded.
///
/// Yoga-style layout engines encode "no limit" as a huge finite number rather
/// than infinity; both representations are accepted here.
pub const MAX_DIMENSION: f32 = 1.0e9;

/// The min/max size envelope imposed by parent layout and style rules.
///
/// Caller contract: `min <= max` per axis. Inverted bounds are not validated
/// on the measurement path; [`LayoutConstraints::constrain`] stays total and
/// lets the minimum win.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConstraints {
    pub min: Size,
    pub max: Size,
}

impl LayoutConstraints {
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Creates constraints with a single satisfying size.
    pub fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given size).
    pub fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// Creates constraints with no bounds at all.
    pub fn unbounded() -> Self {
        Self {
            min: Size::ZERO,
            max: Size::new(f32::INFINITY, f32::INFINITY),
        }
    }

    /// Returns true if the width maximum is a real cap rather than the
    /// unbounded sentinel.
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max.width.is_finite() && self.max.width < MAX_DIMENSION
    }

    /// Returns true if the height maximum is a real cap rather than the
    /// unbounded sentinel.
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max.height.is_finite() && self.max.height < MAX_DIMENSION
    }

    /// Returns true if width and height are both tight (min == max).
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.min.width == self.max.width && self.min.height == self.max.height
    }

    /// Clamps the provided size into the envelope.
    ///
    /// `max` is applied before `min`, so the minimum wins over an inverted
    /// maximum and no input can panic a layout pass.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max.width).max(self.min.width),
            size.height.min(self.max.height).max(self.min.height),
        )
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
