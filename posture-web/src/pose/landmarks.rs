//! Landmark dictionary and per-frame landmark storage
//!
//! Indices follow the 33-point MediaPipe Pose topology. The same indices
//! address both the image-space and the world-space landmark sets.

use serde::{Deserialize, Serialize};

use crate::error::PoseError;
use crate::geometry::Vector3;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_EYE_INNER: usize = 1;
pub const LEFT_EYE: usize = 2;
pub const LEFT_EYE_OUTER: usize = 3;
pub const RIGHT_EYE_INNER: usize = 4;
pub const RIGHT_EYE: usize = 5;
pub const RIGHT_EYE_OUTER: usize = 6;
pub const LEFT_EAR: usize = 7;
pub const RIGHT_EAR: usize = 8;
pub const MOUTH_LEFT: usize = 9;
pub const MOUTH_RIGHT: usize = 10;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_PINKY: usize = 17;
pub const RIGHT_PINKY: usize = 18;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_THUMB: usize = 21;
pub const RIGHT_THUMB: usize = 22;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Anatomical names, indexed like the constants above
pub const LANDMARK_NAMES: [&str; LANDMARK_COUNT] = [
    "NOSE",
    "LEFT_EYE_INNER", "LEFT_EYE", "LEFT_EYE_OUTER",
    "RIGHT_EYE_INNER", "RIGHT_EYE", "RIGHT_EYE_OUTER",
    "LEFT_EAR", "RIGHT_EAR",
    "MOUTH_LEFT", "MOUTH_RIGHT",
    "LEFT_SHOULDER", "RIGHT_SHOULDER",
    "LEFT_ELBOW", "RIGHT_ELBOW",
    "LEFT_WRIST", "RIGHT_WRIST",
    "LEFT_PINKY", "RIGHT_PINKY",
    "LEFT_INDEX", "RIGHT_INDEX",
    "LEFT_THUMB", "RIGHT_THUMB",
    "LEFT_HIP", "RIGHT_HIP",
    "LEFT_KNEE", "RIGHT_KNEE",
    "LEFT_ANKLE", "RIGHT_ANKLE",
    "LEFT_HEEL", "RIGHT_HEEL",
    "LEFT_FOOT_INDEX", "RIGHT_FOOT_INDEX",
];

/// Name of a landmark index, `"UNKNOWN"` outside the topology
pub fn landmark_name(index: usize) -> &'static str {
    LANDMARK_NAMES.get(index).copied().unwrap_or("UNKNOWN")
}

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single landmark as delivered by the pose estimator
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Detector confidence in [0, 1], when the host supplies it
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, visibility: None }
    }

    pub fn with_visibility(self, visibility: f32) -> Self {
        Self {
            visibility: Some(visibility),
            ..self
        }
    }

    pub fn position(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Why this landmark cannot be used, if it cannot
    fn unreliable_reason(&self, min_visibility: f32) -> Option<String> {
        if !self.position().is_finite() {
            return Some("non-finite coordinate".to_string());
        }
        match self.visibility {
            Some(v) if v.is_nan() || v < min_visibility => {
                Some(format!("visibility {v:.2} below {min_visibility:.2}"))
            }
            _ => None,
        }
    }
}

/// The full 33-landmark set of one frame, in a single coordinate space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Parse a flat array from the host
    ///
    /// Accepts 99 values (33 × x, y, z) or 132 values
    /// (33 × x, y, z, visibility).
    pub fn from_flat(data: &[f32]) -> Result<Self, PoseError> {
        let stride = match data.len() {
            n if n == LANDMARK_COUNT * 3 => 3,
            n if n == LANDMARK_COUNT * 4 => 4,
            got => {
                return Err(PoseError::MissingLandmarks {
                    expected: "99 or 132",
                    got,
                })
            }
        };

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, chunk) in landmarks.iter_mut().zip(data.chunks_exact(stride)) {
            *landmark = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: chunk.get(3).copied(),
            };
        }
        Ok(Self { landmarks })
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Position of a landmark
    ///
    /// Indices are the `pub const`s of this module; out-of-range indices
    /// are a programming error.
    pub fn point(&self, index: usize) -> Vector3 {
        self.landmarks[index].position()
    }

    /// Check that every listed landmark is finite and visible enough
    pub fn require(&self, indices: &[usize], min_visibility: f32) -> Result<(), PoseError> {
        for &index in indices {
            let landmark = self.landmarks.get(index).ok_or(PoseError::UnreliableLandmark {
                index,
                name: landmark_name(index),
                reason: "index outside the 33-point topology".to_string(),
            })?;
            if let Some(reason) = landmark.unreliable_reason(min_visibility) {
                return Err(PoseError::UnreliableLandmark {
                    index,
                    name: landmark_name(index),
                    reason,
                });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_matches_constants() {
        assert_eq!(landmark_name(NOSE), "NOSE");
        assert_eq!(landmark_name(LEFT_SHOULDER), "LEFT_SHOULDER");
        assert_eq!(landmark_name(RIGHT_HEEL), "RIGHT_HEEL");
        assert_eq!(landmark_name(RIGHT_FOOT_INDEX), "RIGHT_FOOT_INDEX");
        assert_eq!(landmark_name(33), "UNKNOWN");
    }

    #[test]
    fn test_from_flat_xyz() {
        let data: Vec<f32> = (0..99).map(|i| i as f32).collect();
        let set = LandmarkSet::from_flat(&data).unwrap();
        assert_eq!(set.point(NOSE), Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(set.point(RIGHT_FOOT_INDEX), Vector3::new(96.0, 97.0, 98.0));
        assert!(set.iter().all(|l| l.visibility.is_none()));
    }

    #[test]
    fn test_from_flat_with_visibility() {
        let data: Vec<f32> = (0..132).map(|i| (i % 4) as f32 * 0.25).collect();
        let set = LandmarkSet::from_flat(&data).unwrap();
        let hip = set.get(LEFT_HIP).unwrap();
        assert_eq!(hip.position(), Vector3::new(0.0, 0.25, 0.5));
        assert_eq!(hip.visibility, Some(0.75));
    }

    #[test]
    fn test_from_flat_wrong_length() {
        let err = LandmarkSet::from_flat(&[0.0; 98]).unwrap_err();
        assert_eq!(err, PoseError::MissingLandmarks { expected: "99 or 132", got: 98 });
    }

    #[test]
    fn test_require_rejects_low_visibility() {
        let mut landmarks = [Landmark::new(0.1, 0.2, 0.3).with_visibility(0.9); LANDMARK_COUNT];
        landmarks[LEFT_KNEE] = landmarks[LEFT_KNEE].with_visibility(0.2);
        let set = LandmarkSet::new(landmarks);

        assert!(set.require(&[LEFT_HIP, RIGHT_KNEE], 0.5).is_ok());
        let err = set.require(&[LEFT_HIP, LEFT_KNEE], 0.5).unwrap_err();
        assert!(matches!(
            err,
            PoseError::UnreliableLandmark { index: LEFT_KNEE, name: "LEFT_KNEE", .. }
        ));
    }

    #[test]
    fn test_require_rejects_nan() {
        let mut landmarks = [Landmark::new(0.1, 0.2, 0.3); LANDMARK_COUNT];
        landmarks[NOSE].y = f32::NAN;
        let set = LandmarkSet::new(landmarks);
        assert!(set.require(&[NOSE], 0.0).is_err());
    }

    #[test]
    fn test_nan_visibility_is_unreliable() {
        let landmarks = [Landmark::new(0.1, 0.2, 0.3).with_visibility(f32::NAN); LANDMARK_COUNT];
        let set = LandmarkSet::new(landmarks);
        assert!(set.require(&[NOSE], 0.5).is_err());
    }
}
