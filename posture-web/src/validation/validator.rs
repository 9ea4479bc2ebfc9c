//! Per-exercise validator: gate, measure, run the cascade

use tracing::debug;

use super::config::ExerciseRules;
use super::diagnostics::Diagnostics;
use super::exercise::Exercise;
use super::result::ValidationResult;
use super::rules::Cascade;
use super::{plank, side_plank};
use crate::error::PoseError;
use crate::pose::PoseFrame;

/// Stateless checker for one exercise; the same frame always yields the
/// same result
#[derive(Clone, Debug, PartialEq)]
pub struct Validator {
    exercise: Exercise,
    min_visibility: f32,
    cascade: Cascade,
}

impl Validator {
    /// Build a validator after checking `rules` against the exercise
    pub fn new(exercise: Exercise, rules: ExerciseRules) -> Result<Self, PoseError> {
        rules.check(exercise)?;
        Ok(Self::from_checked(exercise, rules))
    }

    pub(crate) fn from_checked(exercise: Exercise, rules: ExerciseRules) -> Self {
        Self {
            exercise,
            min_visibility: rules.min_visibility,
            cascade: Cascade::new(rules.rules),
        }
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    /// Reject unusable frames, then take the exercise's measurements
    pub fn measure(&self, frame: &PoseFrame) -> Result<Diagnostics, PoseError> {
        frame.require(self.exercise.required_landmarks(), self.min_visibility)?;
        match self.exercise {
            Exercise::Plank => plank::measure(frame),
            Exercise::SidePlank => side_plank::measure(frame),
        }
    }

    /// First correction that applies to `frame`, or an empty message
    pub fn validate(&self, frame: &PoseFrame) -> Result<ValidationResult, PoseError> {
        let diagnostics = self.measure(frame)?;
        let message = match self.cascade.first_violation(&diagnostics)? {
            Some((position, rule)) => {
                debug!(
                    exercise = self.exercise.id(),
                    rule = position,
                    correction = rule.message.as_str(),
                    "posture rule fired"
                );
                rule.message.clone()
            }
            None => String::new(),
        };
        Ok(ValidationResult::new(message, &diagnostics))
    }
}
