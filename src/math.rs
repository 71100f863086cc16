//! Geometric math utilities.
//!
//! Stateless helpers the flattening filter relies on for every geometric
//! decision: distances, linear interpolation, cubic Bezier evaluation and a
//! cubic arc-length estimate.

use crate::basics::PointD;

// ============================================================================
// Constants
// ============================================================================

/// Number of equal parameter steps used to sample a cubic when estimating
/// its length.
pub const CUBIC_LENGTH_PRECISION: u32 = 10;

// ============================================================================
// Distance and interpolation
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(a: PointD, b: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Linear interpolation `a + (b - a) * t`, per coordinate.
#[inline]
pub fn interpolate(a: PointD, b: PointD, t: f64) -> PointD {
    PointD::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

// ============================================================================
// Cubic Bezier
// ============================================================================

/// Evaluate the cubic Bezier `p0, p1, p2, p3` at parameter `t`.
///
/// `(1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3`
#[inline]
pub fn cubic_point_at(t: f64, p0: PointD, p1: PointD, p2: PointD, p3: PointD) -> PointD {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    PointD::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Estimate the arc length of a cubic Bezier.
///
/// Samples the curve at `CUBIC_LENGTH_PRECISION` equal parameter steps and
/// sums the chords. For a curve whose control points lie on the chord this is
/// the chord length.
pub fn estimate_cubic_length(p0: PointD, p1: PointD, p2: PointD, p3: PointD) -> f64 {
    estimate_cubic_length_with_precision(p0, p1, p2, p3, CUBIC_LENGTH_PRECISION)
}

/// Same as [`estimate_cubic_length`] with an explicit sample count.
/// A `precision` of 0 is treated as 1 (the chord).
pub fn estimate_cubic_length_with_precision(
    p0: PointD,
    p1: PointD,
    p2: PointD,
    p3: PointD,
    precision: u32,
) -> f64 {
    let n = precision.max(1);
    let mut length = 0.0;
    let mut prev = p0;
    for i in 1..=n {
        let pt = if i == n {
            p3
        } else {
            cubic_point_at(i as f64 / n as f64, p0, p1, p2, p3)
        };
        length += calc_distance(prev, pt);
        prev = pt;
    }
    length
}

/// Degree-elevate the quadratic `p0, q, p2` into cubic control points.
/// The cubic runs through the same start and end points.
#[inline]
pub fn quad_to_cubic(p0: PointD, q: PointD, p2: PointD) -> (PointD, PointD) {
    let k = 2.0 / 3.0;
    (interpolate(p0, q, k), interpolate(p2, q, k))
}

// ============================================================================
// Tests
// ============================================================================
