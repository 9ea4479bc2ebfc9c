//! Immutable 3D point/vector
//!
//! Every operation returns a new value; nothing mutates its receiver.

use std::ops::{Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::PoseError;

/// Magnitudes below this are treated as zero when normalizing
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// A 3D point or direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    pub fn subtract(&self, other: &Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Right-handed cross product `self × other`
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn dot(&self, other: &Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn magnitude(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// Fails instead of producing NaN/Infinity when the magnitude is
    /// below [`DEGENERATE_EPSILON`].
    pub fn normalize(&self) -> Result<Vector3, PoseError> {
        let mag = self.magnitude();
        if !mag.is_finite() || mag < DEGENERATE_EPSILON {
            return Err(PoseError::degenerate(format!(
                "cannot normalize vector of magnitude {mag:e}"
            )));
        }
        Ok(Vector3::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Planar (x, y) direction from `self` to `other`, in degrees
    ///
    /// Uses `atan2`, so the result lies in (-180, 180]. With `absolute`
    /// the sign is dropped. Coincident points yield 0; measurements use
    /// [`Vector3::planar_angle`] instead.
    pub fn angle(&self, other: &Vector3, absolute: bool) -> f32 {
        let dy = other.y - self.y;
        let dx = other.x - self.x;
        let degrees = dy.atan2(dx).to_degrees();
        if absolute {
            degrees.abs()
        } else {
            degrees
        }
    }

    /// [`Vector3::angle`] that refuses points coinciding in the xy plane
    pub fn planar_angle(&self, other: &Vector3, absolute: bool) -> Result<f32, PoseError> {
        let distance = self.planar_distance(other);
        if !distance.is_finite() || distance < DEGENERATE_EPSILON {
            return Err(PoseError::degenerate(format!(
                "no planar direction between points {distance:e} apart"
            )));
        }
        Ok(self.angle(other, absolute))
    }

    /// Euclidean distance ignoring z
    pub fn planar_distance(&self, other: &Vector3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        self.subtract(&rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
