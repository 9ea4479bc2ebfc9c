//! Threshold rules and the first-violation cascade
//!
//! A rule pairs one check with the message shown to the user. Rules are
//! evaluated in order and the first one that fires wins, so a table reads
//! top to bottom as "most important correction first".

use serde::{Deserialize, Serialize};

use super::diagnostics::{Diagnostics, Segment};
use super::exercise::Exercise;
use crate::error::PoseError;
use crate::pose::Joint;

/// One comparison against the frame's diagnostics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// Fires when either |dx| or |dy| of the pair's delta exceeds its limit
    Symmetry { joint: Joint, max_dx: f32, max_dy: f32 },
    /// Fires when the angle leaves [min, max]
    Band { segment: Segment, min: f32, max: f32 },
    /// Fires when `segment + margin < reference`
    NotBelow { segment: Segment, reference: Segment, margin: f32 },
    /// Fires when `segment - reference > margin`
    NotAbove { segment: Segment, reference: Segment, margin: f32 },
    /// Fires when |segment - reference| > margin
    Matches { segment: Segment, reference: Segment, margin: f32 },
    /// Fires when |target - angle| > tolerance
    Support {
        segment: Segment,
        target: f32,
        tolerance: f32,
        /// Compare |angle| instead of the signed angle
        #[serde(default)]
        absolute: bool,
    },
}

impl Check {
    /// Whether this check fires on `diagnostics`
    pub fn fires(&self, diagnostics: &Diagnostics) -> Result<bool, PoseError> {
        let angle = |segment: Segment| {
            diagnostics
                .angle(segment)
                .ok_or_else(|| PoseError::invalid_config(format!("{segment:?} was not measured")))
        };

        let fired = match *self {
            Check::Symmetry { joint, max_dx, max_dy } => {
                let delta = diagnostics.delta(joint).ok_or_else(|| {
                    PoseError::invalid_config(format!("{} were not measured", joint.as_str()))
                })?;
                delta.x.abs() > max_dx || delta.y.abs() > max_dy
            }
            Check::Band { segment, min, max } => {
                let value = angle(segment)?;
                value < min || value > max
            }
            Check::NotBelow { segment, reference, margin } => {
                angle(segment)? + margin < angle(reference)?
            }
            Check::NotAbove { segment, reference, margin } => {
                angle(segment)? - angle(reference)? > margin
            }
            Check::Matches { segment, reference, margin } => {
                (angle(segment)? - angle(reference)?).abs() > margin
            }
            Check::Support { segment, target, tolerance, absolute } => {
                let value = angle(segment)?;
                let value = if absolute { value.abs() } else { value };
                (target - value).abs() > tolerance
            }
        };
        Ok(fired)
    }

    fn joint(&self) -> Option<Joint> {
        match *self {
            Check::Symmetry { joint, .. } => Some(joint),
            _ => None,
        }
    }

    fn segments(&self) -> Vec<Segment> {
        match *self {
            Check::Symmetry { .. } => Vec::new(),
            Check::Band { segment, .. } | Check::Support { segment, .. } => vec![segment],
            Check::NotBelow { segment, reference, .. }
            | Check::NotAbove { segment, reference, .. }
            | Check::Matches { segment, reference, .. } => vec![segment, reference],
        }
    }

    fn thresholds(&self) -> Vec<f32> {
        match *self {
            Check::Symmetry { max_dx, max_dy, .. } => vec![max_dx, max_dy],
            Check::Band { min, max, .. } => vec![min, max],
            Check::NotBelow { margin, .. }
            | Check::NotAbove { margin, .. }
            | Check::Matches { margin, .. } => vec![margin],
            Check::Support { target, tolerance, .. } => vec![target, tolerance],
        }
    }

    /// Reject checks that could never be evaluated for `exercise`, or whose
    /// thresholds make no sense
    pub fn check(&self, exercise: Exercise) -> Result<(), PoseError> {
        if let Some(joint) = self.joint() {
            if !exercise.measured_joints().contains(&joint) {
                return Err(PoseError::invalid_config(format!(
                    "{exercise}: {} are not measured",
                    joint.as_str()
                )));
            }
        }
        for segment in self.segments() {
            if !exercise.measured_segments().contains(&segment) {
                return Err(PoseError::invalid_config(format!(
                    "{exercise}: {segment:?} is not measured"
                )));
            }
        }
        if self.thresholds().iter().any(|t| !t.is_finite()) {
            return Err(PoseError::invalid_config(format!(
                "{exercise}: non-finite threshold in {self:?}"
            )));
        }

        match *self {
            Check::Symmetry { max_dx, max_dy, .. } if max_dx < 0.0 || max_dy < 0.0 => Err(
                PoseError::invalid_config(format!("{exercise}: negative symmetry limit")),
            ),
            Check::Band { min, max, .. } if min > max => Err(PoseError::invalid_config(format!(
                "{exercise}: band min {min} above max {max}"
            ))),
            Check::Support { tolerance, .. } if tolerance < 0.0 => Err(
                PoseError::invalid_config(format!("{exercise}: negative support tolerance")),
            ),
            _ => Ok(()),
        }
    }
}

/// A check and the correction shown when it fires
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    pub check: Check,
    pub message: String,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

// ============================================================================
// Cascade
// ============================================================================

/// Ordered rules; evaluation stops at the first one that fires
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cascade {
    rules: Vec<Rule>,
}

impl Cascade {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Position and rule of the first violation, or None when every rule holds
    pub fn first_violation(
        &self,
        diagnostics: &Diagnostics,
    ) -> Result<Option<(usize, &Rule)>, PoseError> {
        for (position, rule) in self.rules.iter().enumerate() {
            if rule.check.fires(diagnostics)? {
                return Ok(Some((position, rule)));
            }
        }
        Ok(None)
    }
}
