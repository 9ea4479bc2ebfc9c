//! Geometry module - vector primitive, body frames, angle helpers
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod frame;
mod vector;

pub use angles::{arccos, ArccosOptions};
pub use frame::{Axis, CoordinateFrame};
pub use vector::{Vector3, DEGENERATE_EPSILON};
