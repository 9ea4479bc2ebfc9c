//! One pose-estimation result: image-space and world-space landmark sets
//!
//! Image-space landmarks are normalized to the image (x, y in [0, 1]);
//! world-space landmarks are metric and hip-centered. Both use the same
//! 33 indices.

use super::image_plane::ImageSize;
use super::landmarks::LandmarkSet;
use crate::error::PoseError;

/// Immutable input of a single validation call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseFrame {
    pub image: LandmarkSet,
    pub world: LandmarkSet,
    pub size: ImageSize,
}

impl PoseFrame {
    pub fn new(image: LandmarkSet, world: LandmarkSet, size: ImageSize) -> Self {
        Self { image, world, size }
    }

    /// Build a frame from the flat arrays the JS host sends
    ///
    /// Each array holds 99 (x, y, z) or 132 (x, y, z, visibility) values.
    pub fn from_flat(image: &[f32], world: &[f32], width: u32, height: u32) -> Result<Self, PoseError> {
        Ok(Self {
            image: LandmarkSet::from_flat(image)?,
            world: LandmarkSet::from_flat(world)?,
            size: ImageSize::new(width, height)?,
        })
    }

    /// Reject the frame if any listed landmark is unusable in either set
    pub fn require(&self, indices: &[usize], min_visibility: f32) -> Result<(), PoseError> {
        self.image.require(indices, min_visibility)?;
        self.world.require(indices, min_visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::landmarks::*;

    #[test]
    fn test_from_flat() {
        let image = vec![0.5; 132];
        let world = vec![0.1; 99];
        let frame = PoseFrame::from_flat(&image, &world, 640, 480).unwrap();
        assert_eq!(frame.size, ImageSize::new(640, 480).unwrap());
        assert_eq!(frame.image.get(NOSE).unwrap().visibility, Some(0.5));
        assert_eq!(frame.world.get(NOSE).unwrap().visibility, None);
    }

    #[test]
    fn test_from_flat_rejects_short_world() {
        let err = PoseFrame::from_flat(&[0.5; 99], &[0.1; 60], 640, 480).unwrap_err();
        assert!(matches!(err, PoseError::MissingLandmarks { got: 60, .. }));
    }

    #[test]
    fn test_require_checks_both_sets() {
        let mut image = vec![0.5; 132];
        // LEFT_HIP visibility
        image[LEFT_HIP * 4 + 3] = 0.1;
        let frame = PoseFrame::from_flat(&image, &[0.1; 99], 640, 480).unwrap();
        assert!(frame.require(&[RIGHT_HIP], 0.5).is_ok());
        assert!(frame.require(&[LEFT_HIP], 0.5).is_err());
    }
}
