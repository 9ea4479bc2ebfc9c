//! Body-anchored orthonormal coordinate frame
//!
//! Built fresh for every pose frame from two body directions and an origin,
//! then used to project landmarks into body-relative coordinates so angle
//! checks do not depend on where the camera stands.

use nalgebra::{Matrix3, RowVector3};
use serde::{Deserialize, Serialize};

use super::vector::Vector3;
use crate::error::PoseError;

/// Axis label of a coordinate frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The label that is neither `a` nor `b`
    fn remaining(a: Axis, b: Axis) -> Axis {
        // a != b is checked by the caller
        Axis::ALL
            .into_iter()
            .find(|axis| *axis != a && *axis != b)
            .unwrap_or(Axis::Z)
    }
}

/// Orthonormal basis plus origin
///
/// Rows of `rotation` are the x, y and z unit axes expressed in the source
/// (world) coordinates, so `rotation * (p - origin)` projects `p`.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateFrame {
    rotation: Matrix3<f32>,
    origin: Vector3,
}

impl CoordinateFrame {
    /// Build a frame from two labelled directions and an origin
    ///
    /// `primary` is kept exactly (after normalization). The missing axis is
    /// `normalize(primary × secondary)`, and `secondary` is re-orthogonalized
    /// against both so the basis is orthonormal even when the two inputs are
    /// not perpendicular.
    ///
    /// Fails with [`PoseError::DuplicateAxis`] if both labels match and with
    /// [`PoseError::DegenerateGeometry`] if either vector is zero or the two
    /// are colinear.
    pub fn new(
        primary: (Vector3, Axis),
        secondary: (Vector3, Axis),
        origin: Vector3,
    ) -> Result<Self, PoseError> {
        let (primary_vec, primary_axis) = primary;
        let (secondary_vec, secondary_axis) = secondary;
        if primary_axis == secondary_axis {
            return Err(PoseError::DuplicateAxis { axis: primary_axis });
        }

        let a = primary_vec.normalize()?;
        let b = secondary_vec.normalize()?;
        let c = a.cross(&b).normalize().map_err(|_| {
            PoseError::degenerate(format!(
                "{primary_axis:?} and {secondary_axis:?} axis vectors are colinear"
            ))
        })?;
        let b = c.cross(&a);

        let mut axes = [Vector3::ZERO; 3];
        axes[primary_axis.index()] = a;
        axes[secondary_axis.index()] = b;
        axes[Axis::remaining(primary_axis, secondary_axis).index()] = c;

        let rows = axes.map(|axis| RowVector3::new(axis.x, axis.y, axis.z));
        Ok(Self {
            rotation: Matrix3::from_rows(&rows),
            origin,
        })
    }

    /// Project a point into frame-local coordinates
    pub fn convert(&self, point: &Vector3) -> Vector3 {
        let local = self.rotation * nalgebra::Vector3::from(point.subtract(&self.origin));
        local.into()
    }

    /// Unit axis for `label`, in source coordinates
    pub fn axis(&self, label: Axis) -> Vector3 {
        let row = self.rotation.row(label.index());
        Vector3::new(row[0], row[1], row[2])
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tilted_frame() -> CoordinateFrame {
        CoordinateFrame::new(
            (Vector3::new(0.2, -0.1, 1.0), Axis::Z),
            (Vector3::new(1.0, 0.3, 0.4), Axis::X),
            Vector3::new(0.5, 0.25, -0.3),
        )
        .unwrap()
    }

    #[test]
    fn test_axes_are_orthonormal() {
        let frame = tilted_frame();
        for a in Axis::ALL {
            assert_relative_eq!(frame.axis(a).magnitude(), 1.0, epsilon = 1e-5);
            for b in Axis::ALL {
                if a != b {
                    assert_relative_eq!(frame.axis(a).dot(&frame.axis(b)), 0.0, epsilon = 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_third_axis_takes_unused_label() {
        let frame = CoordinateFrame::new(
            (Vector3::new(0.0, 0.0, 2.0), Axis::Z),
            (Vector3::new(3.0, 0.0, 0.0), Axis::X),
            Vector3::ZERO,
        )
        .unwrap();
        assert_eq!(frame.axis(Axis::Z), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(frame.axis(Axis::X), Vector3::new(1.0, 0.0, 0.0));
        // z × x = y
        assert_eq!(frame.axis(Axis::Y), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_primary_axis_kept_exactly() {
        let frame = tilted_frame();
        let expected = Vector3::new(0.2, -0.1, 1.0).normalize().unwrap();
        let z = frame.axis(Axis::Z);
        assert_relative_eq!(z.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(z.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(z.z, expected.z, epsilon = 1e-6);
    }

    #[test]
    fn test_convert_origin_is_zero() {
        let frame = tilted_frame();
        let p = frame.convert(&frame.origin());
        assert_eq!(p, Vector3::ZERO);
    }

    #[test]
    fn test_convert_preserves_distance() {
        let frame = tilted_frame();
        let points = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.7, 0.1, 0.4),
            Vector3::new(0.0, -1.2, 0.9),
        ];
        for p in points {
            for q in points {
                let before = p.subtract(&q).magnitude();
                let after = frame.convert(&p).subtract(&frame.convert(&q)).magnitude();
                assert_relative_eq!(before, after, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_convert_is_repeatable() {
        let frame = tilted_frame();
        let p = Vector3::new(0.3, 0.6, -0.9);
        assert_eq!(frame.convert(&p), frame.convert(&p));
    }

    #[test]
    fn test_colinear_axes_rejected() {
        let err = CoordinateFrame::new(
            (Vector3::new(1.0, 2.0, 3.0), Axis::X),
            (Vector3::new(-2.0, -4.0, -6.0), Axis::Y),
            Vector3::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, PoseError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_zero_axis_rejected() {
        let err = CoordinateFrame::new(
            (Vector3::ZERO, Axis::X),
            (Vector3::new(0.0, 1.0, 0.0), Axis::Y),
            Vector3::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, PoseError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let err = CoordinateFrame::new(
            (Vector3::new(1.0, 0.0, 0.0), Axis::X),
            (Vector3::new(0.0, 1.0, 0.0), Axis::X),
            Vector3::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, PoseError::DuplicateAxis { axis: Axis::X });
    }
}
