//! Component transformation matrix.
//!
//! The six-component affine matrix carried by `add_component`. Filters pass
//! it through untouched; it is modelled here so that recorded components keep
//! their placement exactly.

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// matrix:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
///
/// The component order matches the font-tools `(xx, xy, yx, yy, dx, dy)`
/// convention, so [`TransAffine::from_array`] accepts such a tuple directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    /// Identity matrix.
    pub fn new() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Construct from `[xx, xy, yx, yy, dx, dy]`.
    pub fn from_array(m: &[f64; 6]) -> Self {
        Self {
            sx: m[0],
            shy: m[1],
            shx: m[2],
            sy: m[3],
            tx: m[4],
            ty: m[5],
        }
    }

    pub fn new_translation(x: f64, y: f64) -> Self {
        Self {
            tx: x,
            ty: y,
            ..Self::new()
        }
    }

    pub fn new_scaling(x: f64, y: f64) -> Self {
        Self {
            sx: x,
            sy: y,
            ..Self::new()
        }
    }

    /// The components as `[xx, xy, yx, yy, dx, dy]`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.sx, self.shy, self.shx, self.sy, self.tx, self.ty]
    }

    /// Apply the transformation to a point.
    #[inline]
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.sx + y * self.shx + self.tx,
            x * self.shy + y * self.sy + self.ty,
        )
    }

    /// Exact identity check.
    pub fn is_identity(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
