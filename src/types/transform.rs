//! 2D affine transforms
//!
//! A [`Transform2D`] is a 2×3 column-major matrix:
//!
//! ```text
//! | m11 m21 tx |
//! | m12 m22 ty |
//! ```
//!
//! so a point maps as `x' = m11*x + m21*y + tx`, `y' = m12*x + m22*y + ty`.
//! Composition and inversion go through `nalgebra::Matrix3`.

use super::{AxisAlignedRect2D, OrientedRect2D, Vector2};
use nalgebra::Matrix3;

/// 2D affine transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform2D {
    /// Identity transform
    pub const IDENTITY: Transform2D = Transform2D {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Create from components
    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64, tx: f64, ty: f64) -> Self {
        Transform2D {
            m11,
            m12,
            m21,
            m22,
            tx,
            ty,
        }
    }

    /// Translation
    pub const fn translation(offset: Vector2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, offset.x, offset.y)
    }

    /// Scaling about the origin
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Scaling about an arbitrary point
    pub fn scaling_about(sx: f64, sy: f64, origin: Vector2) -> Self {
        Self::translation(-origin)
            .then(&Self::scaling(sx, sy))
            .then(&Self::translation(origin))
    }

    /// Counterclockwise rotation about the origin, in radians
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Apply to a point
    pub fn apply(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            self.m11 * p.x + self.m21 * p.y + self.tx,
            self.m12 * p.x + self.m22 * p.y + self.ty,
        )
    }

    /// Apply to an axis-aligned rectangle, keeping its orientation
    pub fn apply_to_rect(&self, rect: &AxisAlignedRect2D) -> OrientedRect2D {
        let c = rect.to_oriented();
        OrientedRect2D {
            upper_left: self.apply(c.upper_left),
            upper_right: self.apply(c.upper_right),
            lower_right: self.apply(c.lower_right),
            lower_left: self.apply(c.lower_left),
        }
    }

    /// Combine with another transform (this transform applied first)
    pub fn then(&self, other: &Transform2D) -> Transform2D {
        Self::from_matrix(&(other.to_matrix() * self.to_matrix()))
    }

    /// Inverse transform, `None` when singular
    pub fn inverse(&self) -> Option<Transform2D> {
        self.to_matrix()
            .try_inverse()
            .map(|m| Self::from_matrix(&m))
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m21 * self.m12
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        [self.m11, self.m12, self.m21, self.m22, self.tx, self.ty]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Homogeneous 3×3 matrix
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.m11, self.m21, self.tx, //
            self.m12, self.m22, self.ty, //
            0.0, 0.0, 1.0,
        )
    }

    /// From a homogeneous 3×3 matrix; the last row is ignored
    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        Self::new(m[(0, 0)], m[(1, 0)], m[(0, 1)], m[(1, 1)], m[(0, 2)], m[(1, 2)])
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D::IDENTITY
    }
}
