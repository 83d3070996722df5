//! Rectangle types for entity bounds

use super::Vector2;
use crate::error::{LayoutError, Result};
use std::fmt;

/// Axis-aligned rectangle on a page
///
/// Page y grows downward, so `upper_left` holds the minimum coordinates and
/// `lower_right` the maximum ones once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisAlignedRect2D {
    pub upper_left: Vector2,
    pub lower_right: Vector2,
}

impl AxisAlignedRect2D {
    /// Create a rectangle from two corners as given
    pub const fn new(upper_left: Vector2, lower_right: Vector2) -> Self {
        AxisAlignedRect2D {
            upper_left,
            lower_right,
        }
    }

    /// Create a normalized rectangle from any two opposite corners
    pub fn from_corners(a: Vector2, b: Vector2) -> Self {
        AxisAlignedRect2D {
            upper_left: a.min(&b),
            lower_right: a.max(&b),
        }
    }

    /// Create a rectangle from origin and size
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Vector2::new(x, y), Vector2::new(x + width, y + height))
    }

    /// Width (may be negative if not normalized)
    pub fn width(&self) -> f64 {
        self.lower_right.x - self.upper_left.x
    }

    /// Height (may be negative if not normalized)
    pub fn height(&self) -> f64 {
        self.lower_right.y - self.upper_left.y
    }

    /// Center point
    pub fn center(&self) -> Vector2 {
        (self.upper_left + self.lower_right) * 0.5
    }

    /// True when the rectangle has no area
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Check that the rectangle can serve as entity bounds
    ///
    /// Non-finite corners are `InvalidArgument`, zero width or height is
    /// `OutOfRange`. Returns the normalized rectangle.
    pub fn validated(&self) -> Result<AxisAlignedRect2D> {
        if !self.upper_left.is_finite() || !self.lower_right.is_finite() {
            return Err(LayoutError::InvalidArgument(format!(
                "bounds {} has non-finite corners",
                self
            )));
        }
        if self.is_degenerate() {
            return Err(LayoutError::OutOfRange(format!(
                "bounds {} has zero width or height",
                self
            )));
        }
        Ok(Self::from_corners(self.upper_left, self.lower_right))
    }

    /// Check if this rectangle contains a point
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.upper_left.x
            && point.x <= self.lower_right.x
            && point.y >= self.upper_left.y
            && point.y <= self.lower_right.y
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &AxisAlignedRect2D) -> AxisAlignedRect2D {
        AxisAlignedRect2D {
            upper_left: self.upper_left.min(&other.upper_left),
            lower_right: self.lower_right.max(&other.lower_right),
        }
    }

    /// The four corners as an oriented rectangle
    pub fn to_oriented(&self) -> OrientedRect2D {
        OrientedRect2D {
            upper_left: self.upper_left,
            upper_right: Vector2::new(self.lower_right.x, self.upper_left.y),
            lower_right: self.lower_right,
            lower_left: Vector2::new(self.upper_left.x, self.lower_right.y),
        }
    }
}

impl fmt::Display for AxisAlignedRect2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect[{} -> {}]", self.upper_left, self.lower_right)
    }
}

/// Rectangle that may be rotated or sheared, given by its four corners
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientedRect2D {
    pub upper_left: Vector2,
    pub upper_right: Vector2,
    pub lower_right: Vector2,
    pub lower_left: Vector2,
}

impl OrientedRect2D {
    /// Corners in clockwise order starting at the upper left
    pub fn corners(&self) -> [Vector2; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_right,
            self.lower_left,
        ]
    }

    /// Axis-aligned rectangle covering all four corners
    pub fn axis_aligned_bounds(&self) -> AxisAlignedRect2D {
        let corners = self.corners();
        let (min, max) = corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(lo, hi), p| (lo.min(p), hi.max(p)));
        AxisAlignedRect2D::new(min, max)
    }
}
