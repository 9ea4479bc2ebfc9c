//! Supported exercises
//!
//! A closed set: each variant knows which landmarks it reads and which
//! measurements it produces. The rule tables live in the per-exercise
//! modules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::diagnostics::Segment;
use crate::error::PoseError;
use crate::pose::landmarks::*;
use crate::pose::Joint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Plank,
    SidePlank,
}

const PLANK_LANDMARKS: [usize; 12] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_HEEL, RIGHT_HEEL,
    LEFT_FOOT_INDEX, RIGHT_FOOT_INDEX,
];

const SIDE_PLANK_LANDMARKS: [usize; 10] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_HEEL, RIGHT_HEEL,
];

impl Exercise {
    pub const COUNT: usize = 2;
    pub const ALL: [Exercise; Exercise::COUNT] = [Exercise::Plank, Exercise::SidePlank];

    pub(crate) fn index(self) -> usize {
        match self {
            Exercise::Plank => 0,
            Exercise::SidePlank => 1,
        }
    }

    /// Identifier used by the host and in configuration
    pub fn id(&self) -> &'static str {
        match self {
            Exercise::Plank => "plank",
            Exercise::SidePlank => "side_plank",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Exercise::Plank => "Plank",
            Exercise::SidePlank => "Side plank",
        }
    }

    /// Landmarks that must be present and reliable in both sets
    pub fn required_landmarks(self) -> &'static [usize] {
        match self {
            Exercise::Plank => &PLANK_LANDMARKS,
            Exercise::SidePlank => &SIDE_PLANK_LANDMARKS,
        }
    }

    /// Bilateral pairs whose left-right delta is measured, in output order
    pub fn measured_joints(self) -> &'static [Joint] {
        match self {
            Exercise::Plank => &[
                Joint::Shoulders,
                Joint::Hips,
                Joint::Knees,
                Joint::Heels,
                Joint::Elbows,
            ],
            Exercise::SidePlank => &[Joint::Hips, Joint::Knees, Joint::Heels],
        }
    }

    /// Angles that are measured, in output order
    pub fn measured_segments(self) -> &'static [Segment] {
        match self {
            Exercise::Plank => &[
                Segment::ShoulderHip,
                Segment::ShoulderKnee,
                Segment::ShoulderHeel,
                Segment::ShoulderElbow,
            ],
            Exercise::SidePlank => &[
                Segment::ShoulderHip,
                Segment::ShoulderKnee,
                Segment::ShoulderHeel,
                Segment::SupportArm,
                Segment::ShoulderElbow,
            ],
        }
    }
}

impl FromStr for Exercise {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Exercise::ALL
            .into_iter()
            .find(|exercise| exercise.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PoseError::UnsupportedExercise { id: s.to_string() })
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
