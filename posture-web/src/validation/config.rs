//! Rule tables per exercise, loadable from JSON
//!
//! ```json
//! {
//!   "plank": {
//!     "min_visibility": 0.5,
//!     "rules": [
//!       { "kind": "band", "segment": "shoulder_hip", "min": -5, "max": 5,
//!         "message": "Align your shoulders and hips" }
//!     ]
//!   }
//! }
//! ```
//!
//! An exercise missing from the document keeps its default table.

use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use super::rules::Rule;
use super::{plank, side_plank};
use crate::error::PoseError;

/// Landmarks below this visibility reject the frame
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;

fn default_min_visibility() -> f32 {
    DEFAULT_MIN_VISIBILITY
}

/// Visibility gate and ordered rules for one exercise
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRules {
    #[serde(default = "default_min_visibility")]
    pub min_visibility: f32,
    pub rules: Vec<Rule>,
}

impl ExerciseRules {
    pub fn defaults(exercise: Exercise) -> Self {
        let rules = match exercise {
            Exercise::Plank => plank::default_rules(),
            Exercise::SidePlank => side_plank::default_rules(),
        };
        Self {
            min_visibility: DEFAULT_MIN_VISIBILITY,
            rules,
        }
    }

    /// Validate every rule against what `exercise` measures
    pub fn check(&self, exercise: Exercise) -> Result<(), PoseError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(PoseError::invalid_config(format!(
                "{exercise}: min_visibility {} outside [0, 1]",
                self.min_visibility
            )));
        }
        for (position, rule) in self.rules.iter().enumerate() {
            if rule.message.trim().is_empty() {
                return Err(PoseError::invalid_config(format!(
                    "{exercise}: rule {position} has an empty message"
                )));
            }
            rule.check.check(exercise)?;
        }
        Ok(())
    }
}

/// Rule tables for every supported exercise
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub plank: ExerciseRules,
    pub side_plank: ExerciseRules,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            plank: ExerciseRules::defaults(Exercise::Plank),
            side_plank: ExerciseRules::defaults(Exercise::SidePlank),
        }
    }
}

impl FormConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, PoseError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, PoseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn rules_for(&self, exercise: Exercise) -> &ExerciseRules {
        match exercise {
            Exercise::Plank => &self.plank,
            Exercise::SidePlank => &self.side_plank,
        }
    }

    pub fn check(&self) -> Result<(), PoseError> {
        Exercise::ALL
            .into_iter()
            .try_for_each(|exercise| self.rules_for(exercise).check(exercise))
    }
}
