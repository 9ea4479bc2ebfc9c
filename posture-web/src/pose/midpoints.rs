//! Bilateral joints and body mid-line points
//!
//! Every joint pair can be read raw (world coordinates) or re-projected
//! through a [`CoordinateFrame`] before the midpoint is taken.

use serde::{Deserialize, Serialize};

use super::landmarks::*;
use crate::geometry::{CoordinateFrame, Vector3};

/// Body side, from the subject's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A left/right landmark pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Shoulders,
    Elbows,
    Wrists,
    Hips,
    Knees,
    Heels,
    FootIndices,
}

impl Joint {
    pub const ALL: [Joint; 7] = [
        Joint::Shoulders,
        Joint::Elbows,
        Joint::Wrists,
        Joint::Hips,
        Joint::Knees,
        Joint::Heels,
        Joint::FootIndices,
    ];

    /// (left, right) landmark indices
    pub fn landmarks(self) -> (usize, usize) {
        match self {
            Joint::Shoulders => (LEFT_SHOULDER, RIGHT_SHOULDER),
            Joint::Elbows => (LEFT_ELBOW, RIGHT_ELBOW),
            Joint::Wrists => (LEFT_WRIST, RIGHT_WRIST),
            Joint::Hips => (LEFT_HIP, RIGHT_HIP),
            Joint::Knees => (LEFT_KNEE, RIGHT_KNEE),
            Joint::Heels => (LEFT_HEEL, RIGHT_HEEL),
            Joint::FootIndices => (LEFT_FOOT_INDEX, RIGHT_FOOT_INDEX),
        }
    }

    pub fn landmark(self, side: Side) -> usize {
        let (left, right) = self.landmarks();
        match side {
            Side::Left => left,
            Side::Right => right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Joint::Shoulders => "shoulders",
            Joint::Elbows => "elbows",
            Joint::Wrists => "wrists",
            Joint::Hips => "hips",
            Joint::Knees => "knees",
            Joint::Heels => "heels",
            Joint::FootIndices => "foot indices",
        }
    }
}

/// One side of a joint, optionally projected into `frame`
pub fn joint_point(
    set: &LandmarkSet,
    joint: Joint,
    side: Side,
    frame: Option<&CoordinateFrame>,
) -> Vector3 {
    let point = set.point(joint.landmark(side));
    match frame {
        Some(frame) => frame.convert(&point),
        None => point,
    }
}

/// Midpoint of a joint pair, projecting both sides first when `frame` is given
pub fn midpoint(set: &LandmarkSet, joint: Joint, frame: Option<&CoordinateFrame>) -> Vector3 {
    let left = joint_point(set, joint, Side::Left, frame);
    let right = joint_point(set, joint, Side::Right, frame);
    left.midpoint(&right)
}

/// Left minus right; near zero when the pair is level in the frame
pub fn bilateral_delta(
    set: &LandmarkSet,
    joint: Joint,
    frame: Option<&CoordinateFrame>,
) -> Vector3 {
    let left = joint_point(set, joint, Side::Left, frame);
    let right = joint_point(set, joint, Side::Right, frame);
    left.subtract(&right)
}
