//! Synthetic pose frames for tests
//!
//! World coordinates here use metres with y pointing up and the body lying
//! along +x (shoulders near x = 0, feet near x = 1.5). Image coordinates are
//! derived with one uniform scale so pixel angles match world angles.

use super::frame::PoseFrame;
use super::image_plane::ImageSize;
use super::landmarks::*;
use super::midpoints::{Joint, Side};
use crate::geometry::Vector3;

pub const VISIBILITY: f32 = 0.99;

/// Body slope of the side-plank fixture, in degrees below horizontal
pub const SIDE_PLANK_SLOPE: f32 = 15.0;

pub fn size() -> ImageSize {
    ImageSize::new(640, 480).unwrap()
}

/// Map a world point onto the normalized image (192 px per metre both ways)
fn to_image(p: Vector3) -> Landmark {
    Landmark::new(0.1 + 0.3 * p.x, 0.9 - 0.4 * p.y, p.z).with_visibility(VISIBILITY)
}

fn build(world: &[Vector3; LANDMARK_COUNT], image_from: &[Vector3; LANDMARK_COUNT]) -> PoseFrame {
    let world_set = LandmarkSet::new(
        world.map(|p| Landmark::new(p.x, p.y, p.z).with_visibility(VISIBILITY)),
    );
    let image_set = LandmarkSet::new(image_from.map(to_image));
    PoseFrame::new(image_set, world_set, size())
}

fn set_pair(points: &mut [Vector3; LANDMARK_COUNT], joint: Joint, left: Vector3, right: Vector3) {
    points[joint.landmark(Side::Left)] = left;
    points[joint.landmark(Side::Right)] = right;
}

fn plank_points() -> [Vector3; LANDMARK_COUNT] {
    let mut p = [Vector3::new(-0.2, 0.35, 0.0); LANDMARK_COUNT];
    // (x, height, half-width); left side at +z
    let pairs = [
        (Joint::Shoulders, 0.0, 0.30, 0.18),
        (Joint::Elbows, 0.0, 0.0, 0.15),
        (Joint::Wrists, 0.25, 0.0, 0.10),
        (Joint::Hips, 0.6, 0.30, 0.12),
        (Joint::Knees, 1.05, 0.30, 0.10),
        (Joint::Heels, 1.5, 0.30, 0.08),
        (Joint::FootIndices, 1.6, 0.0, 0.08),
    ];
    for (joint, x, y, half) in pairs {
        set_pair(&mut p, joint, Vector3::new(x, y, half), Vector3::new(x, y, -half));
    }
    p
}

/// Plank with a level, symmetric body line
pub fn plank() -> PoseFrame {
    plank_with(|_| {})
}

/// Plank fixture with world landmarks edited by `edit`; image follows world
pub fn plank_with(edit: impl FnOnce(&mut [Vector3; LANDMARK_COUNT])) -> PoseFrame {
    let mut world = plank_points();
    edit(&mut world);
    build(&world, &world)
}

fn side_plank_points(grounded: Side) -> [Vector3; LANDMARK_COUNT] {
    let mut p = [Vector3::new(-0.2, 0.5, 0.0); LANDMARK_COUNT];
    let slope = SIDE_PLANK_SLOPE.to_radians().tan();
    let shoulder_height = 0.45;
    // (x along body, vertical half-separation of the pair)
    let line = [
        (Joint::Shoulders, 0.0, 0.15),
        (Joint::Hips, 0.6, 0.08),
        (Joint::Knees, 1.05, 0.07),
        (Joint::Heels, 1.5, 0.04),
        (Joint::FootIndices, 1.6, 0.04),
    ];
    for (joint, x, half) in line {
        let mid = Vector3::new(x, shoulder_height - slope * x, 0.0);
        let lower = Vector3::new(mid.x, mid.y - half, 0.0);
        let upper = Vector3::new(mid.x, mid.y + half, 0.0);
        points_for_side(&mut p, joint, grounded, lower, upper);
    }

    // Grounded forearm straight under its shoulder; free hand on the hip
    let grounded_shoulder = p[Joint::Shoulders.landmark(grounded)];
    points_for_side(
        &mut p,
        Joint::Elbows,
        grounded,
        Vector3::new(grounded_shoulder.x, 0.0, 0.0),
        Vector3::new(0.4, 0.7, 0.0),
    );
    points_for_side(
        &mut p,
        Joint::Wrists,
        grounded,
        Vector3::new(0.25, 0.0, 0.0),
        Vector3::new(0.6, 0.5, 0.0),
    );
    p
}

fn points_for_side(
    points: &mut [Vector3; LANDMARK_COUNT],
    joint: Joint,
    grounded: Side,
    on_ground: Vector3,
    raised: Vector3,
) {
    points[joint.landmark(grounded)] = on_ground;
    points[joint.landmark(grounded.opposite())] = raised;
}

/// Side plank resting on `grounded`, body sloping [`SIDE_PLANK_SLOPE`]
pub fn side_plank(grounded: Side) -> PoseFrame {
    side_plank_with(grounded, |_| {})
}

/// Side-plank fixture whose world landmarks are edited after the image set
/// was derived, so edits never change grounded-side detection
pub fn side_plank_with(grounded: Side, edit: impl FnOnce(&mut [Vector3; LANDMARK_COUNT])) -> PoseFrame {
    let image_from = side_plank_points(grounded);
    let mut world = image_from;
    edit(&mut world);
    build(&world, &image_from)
}
