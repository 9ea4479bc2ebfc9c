//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod checker;

pub use checker::{default_config_json, supported_exercises, FormChecker};
