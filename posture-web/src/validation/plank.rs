//! Plank: body frame, measurements and default rule table
//!
//! The body frame is anchored at the hip midpoint. Its z axis runs from the
//! left hip to the right hip and is kept exactly; x follows the elbows →
//! feet direction after re-orthogonalization. Mid-line angles are taken in
//! that frame so they are independent of camera placement.

use super::diagnostics::{Diagnostics, Segment};
use super::exercise::Exercise;
use super::rules::{Check, Rule};
use crate::error::PoseError;
use crate::geometry::{Axis, CoordinateFrame};
use crate::pose::landmarks::{LEFT_HIP, RIGHT_HIP};
use crate::pose::{bilateral_delta, midpoint, Joint, PoseFrame};

/// Frame of the plank body, from world landmarks
pub fn body_frame(frame: &PoseFrame) -> Result<CoordinateFrame, PoseError> {
    let world = &frame.world;
    let left_hip = world.point(LEFT_HIP);
    let right_hip = world.point(RIGHT_HIP);
    let hip_axis = right_hip - left_hip;
    let body_axis = midpoint(world, Joint::FootIndices, None) - midpoint(world, Joint::Elbows, None);
    CoordinateFrame::new((hip_axis, Axis::Z), (body_axis, Axis::X), left_hip.midpoint(&right_hip))
}

/// Bilateral deltas and mid-line angles of one plank frame
pub fn measure(frame: &PoseFrame) -> Result<Diagnostics, PoseError> {
    let body = body_frame(frame)?;
    let world = &frame.world;

    let mut diagnostics = Diagnostics::default();
    for &joint in Exercise::Plank.measured_joints() {
        diagnostics.push_delta(joint, bilateral_delta(world, joint, Some(&body)));
    }

    let shoulders = midpoint(world, Joint::Shoulders, Some(&body));
    for &segment in Exercise::Plank.measured_segments() {
        let joint = segment.midline_joint().ok_or_else(|| {
            PoseError::invalid_config(format!("plank cannot measure {segment:?}"))
        })?;
        let end = midpoint(world, joint, Some(&body));
        diagnostics.push_angle(segment, shoulders.planar_angle(&end, false)?);
    }
    Ok(diagnostics)
}

/// Default plank corrections, most important first
pub fn default_rules() -> Vec<Rule> {
    let symmetry = |joint| Check::Symmetry { joint, max_dx: 0.11, max_dy: 0.11 };
    vec![
        Rule::new(symmetry(Joint::Shoulders), "Align your shoulders"),
        Rule::new(symmetry(Joint::Hips), "Align your hips"),
        Rule::new(symmetry(Joint::Knees), "Align your knees"),
        Rule::new(symmetry(Joint::Heels), "Align your heels"),
        Rule::new(symmetry(Joint::Elbows), "Align your elbows"),
        Rule::new(
            Check::Band { segment: Segment::ShoulderHip, min: -5.0, max: 5.0 },
            "Align your shoulders and hips",
        ),
        Rule::new(
            Check::Band { segment: Segment::ShoulderKnee, min: 0.0, max: 10.0 },
            "Align your shoulders and knees",
        ),
        Rule::new(
            Check::NotBelow {
                segment: Segment::ShoulderKnee,
                reference: Segment::ShoulderHip,
                margin: 2.0,
            },
            "Raise your hips",
        ),
        Rule::new(
            Check::Band { segment: Segment::ShoulderHeel, min: 0.0, max: 10.0 },
            "Align your shoulders and heels",
        ),
        Rule::new(
            Check::NotBelow {
                segment: Segment::ShoulderHeel,
                reference: Segment::ShoulderKnee,
                margin: 1.0,
            },
            "Raise your knees",
        ),
        Rule::new(
            Check::Support {
                segment: Segment::ShoulderElbow,
                target: 90.0,
                tolerance: 20.0,
                absolute: true,
            },
            "Keep your elbows under your shoulders",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector3;
    use crate::pose::{fixtures, Side};
    use approx::assert_relative_eq;

    #[test]
    fn test_body_frame_axes() {
        let body = body_frame(&fixtures::plank()).unwrap();
        // left hip is at +z in the fixture, so hip axis points to -z
        assert_relative_eq!(body.axis(Axis::Z).z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(body.axis(Axis::X).x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(body.origin().x, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_level_plank_measurements() {
        let d = measure(&fixtures::plank()).unwrap();
        assert_eq!(d.vectors().len(), 5);
        for &joint in Exercise::Plank.measured_joints() {
            let delta = d.delta(joint).unwrap();
            assert_relative_eq!(delta.x, 0.0, epsilon = 1e-5);
            assert_relative_eq!(delta.y, 0.0, epsilon = 1e-5);
        }
        assert_relative_eq!(d.angle(Segment::ShoulderHip).unwrap(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(d.angle(Segment::ShoulderKnee).unwrap(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(d.angle(Segment::ShoulderHeel).unwrap(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(d.angle(Segment::ShoulderElbow).unwrap().abs(), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_measurements_ignore_camera_rotation() {
        // Rotate the whole world set 30° about the vertical axis
        let (sin, cos) = 30f32.to_radians().sin_cos();
        let rotated = fixtures::plank_with(|points| {
            for p in points.iter_mut() {
                *p = Vector3::new(cos * p.x + sin * p.z, p.y, -sin * p.x + cos * p.z);
            }
        });
        let base = measure(&fixtures::plank()).unwrap();
        let turned = measure(&rotated).unwrap();
        for (a, b) in base.angle_values().iter().zip(turned.angle_values()) {
            assert_relative_eq!(*a, b, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_coincident_hips_are_degenerate() {
        let frame = fixtures::plank_with(|points| points[RIGHT_HIP] = points[LEFT_HIP]);
        assert!(matches!(measure(&frame), Err(PoseError::DegenerateGeometry { .. })));
    }

    #[test]
    fn test_collapsed_body_is_degenerate() {
        // shoulders, knees and heels on the hips, elbows straight below them
        let frame = fixtures::plank_with(|points| {
            for side in [Side::Left, Side::Right] {
                let hip = points[Joint::Hips.landmark(side)];
                for joint in [Joint::Shoulders, Joint::Knees, Joint::Heels] {
                    points[joint.landmark(side)] = hip;
                }
                points[Joint::Elbows.landmark(side)] = Vector3::new(hip.x, 0.0, hip.z);
            }
        });
        assert!(matches!(measure(&frame), Err(PoseError::DegenerateGeometry { .. })));
    }

    #[test]
    fn test_default_rules_are_valid() {
        for rule in default_rules() {
            rule.check.check(Exercise::Plank).unwrap();
        }
    }
}
