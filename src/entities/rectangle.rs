//! Rectangle entity

use super::EntityCommon;
use crate::error::{LayoutError, Result};
use crate::types::{AxisAlignedRect2D, Color};

/// Rectangle shape, optionally with rounded corners
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) common: EntityCommon,
    corner_radius: f64,
    /// Fill color, `None` for no fill
    pub fill: Option<Color>,
    /// Stroke color, `None` for no stroke
    pub stroke: Option<Color>,
    stroke_width: f64,
}

impl Rectangle {
    /// Default stroke width in points
    pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

    pub(crate) fn new(bounds: AxisAlignedRect2D) -> Self {
        Self {
            common: EntityCommon::new(bounds),
            corner_radius: 0.0,
            fill: None,
            stroke: Some(Color::BLACK),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn common(&self) -> &EntityCommon {
        &self.common
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Set the corner radius
    ///
    /// The radius must be non-negative and no larger than half the shorter
    /// side.
    pub fn set_corner_radius(&mut self, radius: f64) -> Result<()> {
        let b = self.common.bounds;
        let limit = b.width().abs().min(b.height().abs()) / 2.0;
        if !radius.is_finite() || radius < 0.0 || radius > limit {
            return Err(LayoutError::OutOfRange(format!(
                "corner radius {} outside [0, {}]",
                radius, limit
            )));
        }
        self.corner_radius = radius;
        Ok(())
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f64) -> Result<()> {
        if !width.is_finite() || width < 0.0 {
            return Err(LayoutError::OutOfRange(format!(
                "stroke width {} is negative",
                width
            )));
        }
        self.stroke_width = width;
        Ok(())
    }

    pub fn is_rounded(&self) -> bool {
        self.corner_radius > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rect = Rectangle::new(AxisAlignedRect2D::from_xywh(0.0, 0.0, 4.0, 2.0));
        assert_eq!(rect.corner_radius(), 0.0);
        assert!(!rect.is_rounded());
        assert_eq!(rect.stroke, Some(Color::BLACK));
        assert!(rect.fill.is_none());
    }

    #[test]
    fn test_corner_radius_limit() {
        let mut rect = Rectangle::new(AxisAlignedRect2D::from_xywh(0.0, 0.0, 4.0, 2.0));
        assert!(rect.set_corner_radius(1.0).is_ok());
        assert!(rect.is_rounded());
        assert!(rect.set_corner_radius(1.5).is_err());
        assert!(rect.set_corner_radius(-0.1).is_err());
        assert_eq!(rect.corner_radius(), 1.0);
    }

    #[test]
    fn test_stroke_width() {
        let mut rect = Rectangle::new(AxisAlignedRect2D::from_xywh(0.0, 0.0, 1.0, 1.0));
        rect.set_stroke_width(0.25).unwrap();
        assert_eq!(rect.stroke_width(), 0.25);
        assert!(rect.set_stroke_width(-1.0).is_err());
    }
}
