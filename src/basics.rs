//! Foundation types: points, step rounding, and the path consumer protocol.
//!
//! Everything else in the crate depends on these. A `PathConsumer` ("pen")
//! receives an ordered sequence of path-construction calls; filters such as
//! `FlattenPen` both implement it and drive another one downstream.

use crate::error::PenError;
use crate::trans_affine::TransAffine;

// ============================================================================
// Rounding
// ============================================================================

/// Round a subdivision ratio to a whole number of steps.
///
/// Ties round to the nearest even count, so a line of exactly 2.5 segment
/// lengths becomes 2 steps, not 3. Returns `None` for NaN and infinities,
/// which callers treat as "cannot subdivide".
#[inline]
pub fn round_steps(v: f64) -> Option<u64> {
    if !v.is_finite() {
        return None;
    }
    let r = v.round_ties_even();
    if r < 0.0 {
        Some(0)
    } else {
        Some(r as u64)
    }
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
///
/// Equality is exact and component-wise; no epsilon is involved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> From<(T, T)> for PointBase<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

pub type PointF = PointBase<f32>;
pub type PointD = PointBase<f64>;

impl From<PointF> for PointD {
    fn from(p: PointF) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

// ============================================================================
// PathConsumer trait
// ============================================================================

/// The path consumer ("pen") interface.
///
/// Grammar: each subpath is one `move_to`, then zero or more `line_to` /
/// `curve_to`, then exactly one `close_path` or `end_path`. `add_component`
/// may appear between subpaths.
///
/// Every method is fallible so that filters can reject malformed sequences
/// instead of operating on an undefined current point.
pub trait PathConsumer {
    /// Start a new subpath at `pt`.
    fn move_to(&mut self, pt: PointD) -> Result<(), PenError>;

    /// Straight segment from the current point to `pt`.
    fn line_to(&mut self, pt: PointD) -> Result<(), PenError>;

    /// Cubic Bezier segment from the current point through control points
    /// `c1`, `c2` to `end`.
    fn curve_to(&mut self, c1: PointD, c2: PointD, end: PointD) -> Result<(), PenError>;

    /// Close the current subpath with an implied edge back to its start.
    fn close_path(&mut self) -> Result<(), PenError>;

    /// End the current subpath without closing it.
    fn end_path(&mut self) -> Result<(), PenError>;

    /// Place a reference to another outline, named `glyph_name`, with the
    /// given transformation.
    fn add_component(&mut self, glyph_name: &str, transform: TransAffine)
        -> Result<(), PenError>;
}

/// Blanket implementation so `&mut T` can be used as a PathConsumer.
/// This allows filters to borrow their downstream consumer instead of owning it.
impl<T: PathConsumer + ?Sized> PathConsumer for &mut T {
    fn move_to(&mut self, pt: PointD) -> Result<(), PenError> {
        (**self).move_to(pt)
    }

    fn line_to(&mut self, pt: PointD) -> Result<(), PenError> {
        (**self).line_to(pt)
    }

    fn curve_to(&mut self, c1: PointD, c2: PointD, end: PointD) -> Result<(), PenError> {
        (**self).curve_to(c1, c2, end)
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        (**self).close_path()
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        (**self).end_path()
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: TransAffine,
    ) -> Result<(), PenError> {
        (**self).add_component(glyph_name, transform)
    }
}

// ============================================================================
// Tests
// ============================================================================
