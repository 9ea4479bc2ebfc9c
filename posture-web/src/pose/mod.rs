//! Pose module - landmark sets, joint pairs, image-plane support detection
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod image_plane;
pub mod landmarks;
mod midpoints;

#[cfg(test)]
pub(crate) mod fixtures;

pub use frame::PoseFrame;
pub use image_plane::{grounded_side, vertex_angle, ImageSize, PixelPoint, SupportDeviation};
pub use landmarks::{Landmark, LandmarkSet, LANDMARK_COUNT};
pub use midpoints::{bilateral_delta, joint_point, midpoint, Joint, Side};
