//! Error types for posture validation
//!
//! Per-frame errors (degenerate geometry, missing or unreliable landmarks)
//! mean "no feedback for this frame". Configuration errors (unknown exercise,
//! bad threshold table) should surface once, when the exercise is selected.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::geometry::Axis;

/// Errors raised by the geometry and validation core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PoseError {
    /// A vector that must be normalized has (near) zero length, or two
    /// axis-defining vectors are colinear.
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// What collapsed
        reason: String,
    },

    /// Both supplied axes of a coordinate frame carry the same label.
    #[error("both frame axes are labelled {axis:?}")]
    DuplicateAxis {
        /// The repeated label
        axis: Axis,
    },

    /// Exercise identifier outside the supported set.
    #[error("unsupported exercise: {id:?}")]
    UnsupportedExercise {
        /// Identifier that was requested
        id: String,
    },

    /// Flat landmark array has the wrong number of values.
    #[error("missing landmarks: expected {expected} values, got {got}")]
    MissingLandmarks {
        /// Accepted length(s), e.g. "99 or 132"
        expected: &'static str,
        /// Length actually received
        got: usize,
    },

    /// A required landmark is present but cannot be trusted.
    #[error("landmark {index} ({name}) unreliable: {reason}")]
    UnreliableLandmark {
        /// Landmark index in the 33-point topology
        index: usize,
        /// Anatomical name
        name: &'static str,
        /// Non-finite coordinate or low visibility
        reason: String,
    },

    /// Threshold table or rule list is unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: String,
    },
}

impl PoseError {
    /// Create a degenerate geometry error.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True for errors that only invalidate the current frame.
    ///
    /// The caller drops the frame and keeps its previous (or a neutral) state.
    pub fn is_per_frame(&self) -> bool {
        matches!(
            self,
            Self::DegenerateGeometry { .. }
                | Self::MissingLandmarks { .. }
                | Self::UnreliableLandmark { .. }
        )
    }
}

impl From<serde_json::Error> for PoseError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl From<PoseError> for JsValue {
    fn from(err: PoseError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
