//! Arccosine helper
//!
//! Law-of-cosines and dot-product angles can overshoot ±1 by a few ulps,
//! which would turn `acos` into NaN. The cosine is clamped first.

/// Output options for [`arccos`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArccosOptions {
    /// Return degrees instead of radians
    pub degrees: bool,
    /// Take |cos| before `acos`, folding obtuse angles onto acute ones
    pub abs: bool,
}

impl Default for ArccosOptions {
    fn default() -> Self {
        Self {
            degrees: true,
            abs: false,
        }
    }
}

impl ArccosOptions {
    /// Degrees, with the absolute-value step enabled
    pub fn folded() -> Self {
        Self {
            abs: true,
            ..Self::default()
        }
    }
}

/// Angle whose cosine is `cosine`
///
/// Returns the angle in degrees by default:
/// - 0° = same direction
/// - 90° = perpendicular
/// - 180° = opposite (never with `abs`)
pub fn arccos(cosine: f32, options: ArccosOptions) -> f32 {
    let cosine = if options.abs { cosine.abs() } else { cosine };
    let angle = cosine.clamp(-1.0, 1.0).acos();
    if options.degrees {
        angle.to_degrees()
    } else {
        angle
    }
}
