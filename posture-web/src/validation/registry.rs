//! Lookup from exercise identifier to its validator
//!
//! Validators are built lazily on first use and cached, so repeated lookups
//! hand back the same instance.

use std::sync::OnceLock;

use super::config::FormConfig;
use super::exercise::Exercise;
use super::validator::Validator;
use crate::error::PoseError;

pub struct ValidatorRegistry {
    config: FormConfig,
    validators: [OnceLock<Validator>; Exercise::COUNT],
}

impl ValidatorRegistry {
    /// Registry over `config`; every table is checked up front
    pub fn new(config: FormConfig) -> Result<Self, PoseError> {
        config.check()?;
        Ok(Self {
            config,
            validators: Default::default(),
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Validator for a known exercise
    pub fn get(&self, exercise: Exercise) -> &Validator {
        self.validators[exercise.index()].get_or_init(|| {
            Validator::from_checked(exercise, self.config.rules_for(exercise).clone())
        })
    }

    /// Validator for an exercise identifier such as `"side_plank"`
    pub fn get_validator(&self, id: &str) -> Result<&Validator, PoseError> {
        let exercise: Exercise = id.parse()?;
        Ok(self.get(exercise))
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self {
            config: FormConfig::default(),
            validators: Default::default(),
        }
    }
}
