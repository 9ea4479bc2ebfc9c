//! Measurements taken from one frame, before any threshold is applied

use serde::{Deserialize, Serialize};

use crate::geometry::Vector3;
use crate::pose::{Joint, Side};

/// A measured angle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Shoulder midpoint → hip midpoint
    ShoulderHip,
    /// Shoulder midpoint → knee midpoint
    ShoulderKnee,
    /// Shoulder midpoint → heel midpoint
    ShoulderHeel,
    /// Shoulder midpoint → elbow midpoint
    ShoulderElbow,
    /// Grounded shoulder → grounded elbow, unsigned
    SupportArm,
}

impl Segment {
    /// Joint pair whose midpoint ends a mid-line segment
    pub fn midline_joint(self) -> Option<Joint> {
        match self {
            Segment::ShoulderHip => Some(Joint::Hips),
            Segment::ShoulderKnee => Some(Joint::Knees),
            Segment::ShoulderHeel => Some(Joint::Heels),
            Segment::ShoulderElbow => Some(Joint::Elbows),
            Segment::SupportArm => None,
        }
    }
}

/// Ordered bilateral deltas and angles of one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    deltas: Vec<(Joint, Vector3)>,
    angles: Vec<(Segment, f32)>,
    grounded: Option<Side>,
}

impl Diagnostics {
    pub fn push_delta(&mut self, joint: Joint, delta: Vector3) {
        self.deltas.push((joint, delta));
    }

    pub fn push_angle(&mut self, segment: Segment, degrees: f32) {
        self.angles.push((segment, degrees));
    }

    pub fn set_grounded(&mut self, side: Side) {
        self.grounded = Some(side);
    }

    /// Left-minus-right offset of a pair, in body coordinates
    pub fn delta(&self, joint: Joint) -> Option<Vector3> {
        self.deltas
            .iter()
            .find(|(j, _)| *j == joint)
            .map(|(_, delta)| *delta)
    }

    pub fn angle(&self, segment: Segment) -> Option<f32> {
        self.angles
            .iter()
            .find(|(s, _)| *s == segment)
            .map(|(_, degrees)| *degrees)
    }

    pub fn grounded(&self) -> Option<Side> {
        self.grounded
    }

    pub fn vectors(&self) -> Vec<Vector3> {
        self.deltas.iter().map(|(_, delta)| *delta).collect()
    }

    pub fn angle_values(&self) -> Vec<f32> {
        self.angles.iter().map(|(_, degrees)| *degrees).collect()
    }
}
