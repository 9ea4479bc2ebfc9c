//! Posture Web - exercise form checking for pose-estimation output
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Re-exports and the wasm_bindgen start hook (panic hook, console logging)

mod bridge;
pub mod error;
pub mod geometry;
pub mod pose;
pub mod validation;

use tracing::Level;
use wasm_bindgen::prelude::*;

pub use bridge::{default_config_json, supported_exercises, FormChecker};
pub use error::PoseError;
pub use validation::{Exercise, FormConfig, ValidationResult, Validator, ValidatorRegistry};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Most verbose level forwarded to the browser console; rule hits log at debug
pub const LOG_LEVEL: Level = Level::DEBUG;

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(LOG_LEVEL)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
