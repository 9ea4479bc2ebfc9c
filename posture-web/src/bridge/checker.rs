//! FormChecker - the JS-facing posture checker
//!
//! The host constructs one checker, selects an exercise, then calls
//! `validate` once per pose-estimation result with the flat landmark arrays
//! it already has. Frames that cannot be measured return `null` and leave a
//! warning in the browser console; configuration mistakes throw.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::error::PoseError;
use crate::pose::PoseFrame;
use crate::validation::{Exercise, FormConfig, ValidationResult, ValidatorRegistry};

// ============================================================================
// CHECKER
// ============================================================================

#[wasm_bindgen]
pub struct FormChecker {
    registry: ValidatorRegistry,
    exercise: Exercise,
}

#[wasm_bindgen]
impl FormChecker {
    /// Checker with the built-in rule tables, starting on plank
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormChecker {
        Self {
            registry: ValidatorRegistry::default(),
            exercise: Exercise::Plank,
        }
    }

    /// Checker with rule tables parsed from a JSON document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<FormChecker, JsValue> {
        Ok(Self::from_config_json(config_json)?)
    }

    #[wasm_bindgen(js_name = selectExercise)]
    pub fn select_exercise(&mut self, id: &str) -> Result<(), JsValue> {
        self.set_exercise(id)?;
        console::log_1(&format!("posture: checking {}", self.exercise.label()).into());
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn exercise(&self) -> String {
        self.exercise.id().to_string()
    }

    /// Validate one frame
    ///
    /// `image` and `world` each hold 99 (x, y, z) or 132
    /// (x, y, z, visibility) values. Returns
    /// `{ message, diagnosticVectors, diagnosticAngles }` or `null`.
    pub fn validate(
        &self,
        image: &[f32],
        world: &[f32],
        width: u32,
        height: u32,
    ) -> Result<JsValue, JsValue> {
        match self.check_frame(image, world, width, height) {
            Ok(result) => Ok(serde_wasm_bindgen::to_value(&result)?),
            Err(err) if err.is_per_frame() => {
                console::warn_1(&format!("posture: frame skipped: {err}").into());
                Ok(JsValue::NULL)
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for FormChecker {
    fn default() -> Self {
        Self::new()
    }
}

// Rust-side API, also used by the exported methods above
impl FormChecker {
    pub fn from_config_json(config_json: &str) -> Result<Self, PoseError> {
        Ok(Self {
            registry: ValidatorRegistry::new(FormConfig::from_json(config_json)?)?,
            exercise: Exercise::Plank,
        })
    }

    pub fn set_exercise(&mut self, id: &str) -> Result<(), PoseError> {
        self.exercise = self.registry.get_validator(id)?.exercise();
        Ok(())
    }

    pub fn selected(&self) -> Exercise {
        self.exercise
    }

    pub fn check_frame(
        &self,
        image: &[f32],
        world: &[f32],
        width: u32,
        height: u32,
    ) -> Result<ValidationResult, PoseError> {
        let frame = PoseFrame::from_flat(image, world, width, height)?;
        self.registry.get(self.exercise).validate(&frame)
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Built-in rule tables as pretty-printed JSON, a starting point for edits
#[wasm_bindgen(js_name = defaultConfigJson)]
pub fn default_config_json() -> Result<String, JsValue> {
    Ok(FormConfig::default().to_json()?)
}

/// Identifiers accepted by `selectExercise`
#[wasm_bindgen(js_name = supportedExercises)]
pub fn supported_exercises() -> Vec<JsValue> {
    exercise_ids().into_iter().map(JsValue::from_str).collect()
}

fn exercise_ids() -> Vec<&'static str> {
    Exercise::ALL.iter().map(Exercise::id).collect()
}
