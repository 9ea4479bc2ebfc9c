//! Side plank: grounded-side detection, body frame, measurements, rules
//!
//! The grounded side comes from image-space landmarks (see
//! [`grounded_side`]). The body frame then uses that side's world
//! landmarks: x runs from the grounded elbow to the grounded heel and is
//! kept exactly, y follows the grounded shoulder → elbow direction. The
//! frame origin is the hip midpoint.

use super::diagnostics::{Diagnostics, Segment};
use super::exercise::Exercise;
use super::rules::{Check, Rule};
use crate::error::PoseError;
use crate::geometry::{Axis, CoordinateFrame};
use crate::pose::{bilateral_delta, grounded_side, midpoint, Joint, PoseFrame, Side};

/// Frame of the side-plank body resting on `side`
pub fn body_frame(frame: &PoseFrame, side: Side) -> Result<CoordinateFrame, PoseError> {
    let world = &frame.world;
    let shoulder = world.point(Joint::Shoulders.landmark(side));
    let elbow = world.point(Joint::Elbows.landmark(side));
    let heel = world.point(Joint::Heels.landmark(side));
    CoordinateFrame::new(
        (heel - elbow, Axis::X),
        (elbow - shoulder, Axis::Y),
        midpoint(world, Joint::Hips, None),
    )
}

/// Bilateral deltas, mid-line angles and support-arm angle of one frame
///
/// Angles come out as shoulder → hip, knee, heel, the support arm, then
/// shoulder → elbow midpoints.
pub fn measure(frame: &PoseFrame) -> Result<Diagnostics, PoseError> {
    let side = grounded_side(&frame.image, frame.size)?;
    let body = body_frame(frame, side)?;
    let world = &frame.world;

    let mut diagnostics = Diagnostics::default();
    diagnostics.set_grounded(side);
    for &joint in Exercise::SidePlank.measured_joints() {
        diagnostics.push_delta(joint, bilateral_delta(world, joint, Some(&body)));
    }

    let shoulders = midpoint(world, Joint::Shoulders, Some(&body));
    for &segment in Exercise::SidePlank.measured_segments() {
        let angle = match segment.midline_joint() {
            Some(joint) => shoulders.planar_angle(&midpoint(world, joint, Some(&body)), false)?,
            None => {
                let shoulder = body.convert(&world.point(Joint::Shoulders.landmark(side)));
                let elbow = body.convert(&world.point(Joint::Elbows.landmark(side)));
                shoulder.planar_angle(&elbow, true)?
            }
        };
        diagnostics.push_angle(segment, angle);
    }
    Ok(diagnostics)
}

/// Default side-plank corrections, most important first
pub fn default_rules() -> Vec<Rule> {
    let symmetry = |joint| Check::Symmetry { joint, max_dx: 0.1, max_dy: 0.2 };
    let band = |segment| Check::Band { segment, min: 10.0, max: 30.0 };
    vec![
        Rule::new(symmetry(Joint::Hips), "Stack your hips"),
        Rule::new(symmetry(Joint::Knees), "Stack your knees"),
        Rule::new(symmetry(Joint::Heels), "Stack your heels"),
        Rule::new(band(Segment::ShoulderHip), "Align your shoulders and hips"),
        Rule::new(band(Segment::ShoulderKnee), "Align your shoulders and knees"),
        Rule::new(
            Check::NotBelow {
                segment: Segment::ShoulderKnee,
                reference: Segment::ShoulderHip,
                margin: 2.0,
            },
            "Lower your knees",
        ),
        Rule::new(
            Check::NotAbove {
                segment: Segment::ShoulderKnee,
                reference: Segment::ShoulderHip,
                margin: 5.0,
            },
            "Raise your knees",
        ),
        Rule::new(band(Segment::ShoulderHeel), "Align your shoulders and heels"),
        Rule::new(
            Check::Matches {
                segment: Segment::ShoulderHeel,
                reference: Segment::ShoulderHip,
                margin: 5.0,
            },
            "Align your hips and heels",
        ),
        Rule::new(
            Check::Support {
                segment: Segment::SupportArm,
                target: 90.0,
                tolerance: 20.0,
                absolute: false,
            },
            "Keep your elbow under your shoulder",
        ),
    ]
}
