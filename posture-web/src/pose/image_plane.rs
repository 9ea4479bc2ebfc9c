//! 2D image-plane helpers
//!
//! Pixel geometry lives here and only here. [`PixelPoint`] can only be built
//! from an image-space landmark and the image size, so metric world-space
//! vectors cannot be mixed into these computations by accident.

use super::landmarks::{Landmark, LandmarkSet};
use super::midpoints::{Joint, Side};
use crate::error::PoseError;
use crate::geometry::{arccos, ArccosOptions, DEGENERATE_EPSILON};

/// Source image dimensions in pixels, never zero in either direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, PoseError> {
        if width == 0 || height == 0 {
            return Err(PoseError::degenerate(format!(
                "image size {width}x{height} has no area"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// A point on the image plane, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    x: f32,
    y: f32,
}

impl PixelPoint {
    /// Scale a normalized image-space landmark to pixels (depth dropped)
    pub fn from_landmark(landmark: &Landmark, size: ImageSize) -> Self {
        Self {
            x: landmark.x * size.width as f32,
            y: landmark.y * size.height as f32,
        }
    }

    pub fn midpoint(&self, other: &PixelPoint) -> PixelPoint {
        PixelPoint {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    pub fn distance(&self, other: &PixelPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Angle at `vertex` of the triangle (a, vertex, b), by the law of cosines
///
/// The cosine is folded (`|cos|`) before `acos`, so the result is in
/// [0°, 90°]. Fails when either side adjacent to the vertex has no length.
pub fn vertex_angle(a: PixelPoint, vertex: PixelPoint, b: PixelPoint) -> Result<f32, PoseError> {
    let side_a = vertex.distance(&a);
    let side_b = vertex.distance(&b);
    let opposite = a.distance(&b);
    if side_a < DEGENERATE_EPSILON || side_b < DEGENERATE_EPSILON {
        return Err(PoseError::degenerate("collapsed triangle on the image plane"));
    }

    let cosine = (side_a.powi(2) + side_b.powi(2) - opposite.powi(2)) / (2.0 * side_a * side_b);
    Ok(arccos(cosine, ArccosOptions::folded()))
}

/// How far each side's support triangle is from a right angle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SupportDeviation {
    /// |90° − elbow angle| for the left shoulder/elbow/heel triangle
    pub left: f32,
    /// Same for the right side
    pub right: f32,
}

impl SupportDeviation {
    /// Measure both sides from image-space landmarks
    ///
    /// For each side the triangle is (shoulder midpoint, elbow, heel) and the
    /// angle is taken at the elbow. A grounded forearm sits under the
    /// shoulders with the body line running to the heel, which makes that
    /// angle close to 90°.
    pub fn measure(image: &LandmarkSet, size: ImageSize) -> Result<Self, PoseError> {
        let pixel = |index: usize| PixelPoint::from_landmark(&image_landmark(image, index), size);

        let (left_shoulder, right_shoulder) = Joint::Shoulders.landmarks();
        let shoulders = pixel(left_shoulder).midpoint(&pixel(right_shoulder));

        let deviation = |side: Side| -> Result<f32, PoseError> {
            let elbow = pixel(Joint::Elbows.landmark(side));
            let heel = pixel(Joint::Heels.landmark(side));
            let angle = vertex_angle(shoulders, elbow, heel)?;
            Ok((90.0 - angle).abs())
        };

        Ok(Self {
            left: deviation(Side::Left)?,
            right: deviation(Side::Right)?,
        })
    }

    /// Side whose triangle is closer to a right angle; ties go right
    pub fn grounded(&self) -> Side {
        if self.left < self.right {
            Side::Left
        } else {
            Side::Right
        }
    }
}

fn image_landmark(image: &LandmarkSet, index: usize) -> Landmark {
    image.get(index).copied().unwrap_or_default()
}

/// Which side of the body rests on the ground, from pixel geometry only
pub fn grounded_side(image: &LandmarkSet, size: ImageSize) -> Result<Side, PoseError> {
    let deviation = SupportDeviation::measure(image, size)?;
    let side = deviation.grounded();
    tracing::trace!(
        left = deviation.left,
        right = deviation.right,
        side = side.as_str(),
        "grounded side"
    );
    Ok(side)
}
