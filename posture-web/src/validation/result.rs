//! Outcome of validating one frame

use serde::{Deserialize, Serialize};

use super::diagnostics::Diagnostics;
use crate::geometry::Vector3;
use crate::pose::Side;

/// Correction message plus the raw measurements behind it
///
/// An empty `message` means the posture is acceptable. Vectors and angles
/// follow the exercise's measurement order and are present either way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub message: String,
    pub diagnostic_vectors: Vec<Vector3>,
    pub diagnostic_angles: Vec<f32>,
    /// Supporting side, for side plank only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounded_side: Option<Side>,
}

impl ValidationResult {
    pub fn new(message: impl Into<String>, diagnostics: &Diagnostics) -> Self {
        Self {
            message: message.into(),
            diagnostic_vectors: diagnostics.vectors(),
            diagnostic_angles: diagnostics.angle_values(),
            grounded_side: diagnostics.grounded(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.message.is_empty()
    }
}
