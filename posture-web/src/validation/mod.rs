//! Validation module - exercises, rule cascades, validators, registry
//!
//! Re-exports only. All logic in submodules.

mod config;
mod diagnostics;
mod exercise;
mod plank;
mod registry;
mod result;
mod rules;
mod side_plank;
mod validator;

pub use config::{ExerciseRules, FormConfig, DEFAULT_MIN_VISIBILITY};
pub use diagnostics::{Diagnostics, Segment};
pub use exercise::Exercise;
pub use registry::ValidatorRegistry;
pub use result::ValidationResult;
pub use rules::{Cascade, Check, Rule};
pub use validator::Validator;
