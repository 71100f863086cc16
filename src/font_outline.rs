//! Glyph outlines from TrueType/OpenType data using `ttf-parser`.
//!
//! Exposes each glyph as a `Drawable` path source so it can be streamed
//! through a `FlattenPen`. Quadratic TrueType segments are degree-elevated to
//! cubics on the way out, since the path protocol only carries cubics.

use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::basics::{PathConsumer, PointD, PointF};
use crate::config::FlattenConfig;
use crate::conv_flatten::FlattenPen;
use crate::error::PenError;
use crate::flatten_outline::Drawable;
use crate::math::quad_to_cubic;
use crate::path_storage::PathStorage;

/// A parsed font face, kept as owned bytes.
pub struct FontOutline {
    face_data: Vec<u8>,
    face_index: u32,
}

impl FontOutline {
    /// Load a font from raw TTF/OTF data.
    ///
    /// `face_index` selects the face in a font collection (use 0 for single fonts).
    pub fn from_data(data: Vec<u8>, face_index: u32) -> Result<Self, PenError> {
        Face::parse(&data, face_index).map_err(|e| PenError::FontParse(e.to_string()))?;
        Ok(Self {
            face_data: data,
            face_index,
        })
    }

    fn face(&self) -> Result<Face<'_>, PenError> {
        Face::parse(&self.face_data, self.face_index)
            .map_err(|e| PenError::FontParse(e.to_string()))
    }

    pub fn units_per_em(&self) -> Result<u16, PenError> {
        Ok(self.face()?.units_per_em())
    }

    /// Glyph id mapped to `ch` by the cmap, if any.
    pub fn glyph_index(&self, ch: char) -> Option<u16> {
        let face = self.face().ok()?;
        face.glyph_index(ch).map(|id| id.0)
    }

    pub fn glyph(&self, glyph_id: u16) -> GlyphOutline<'_> {
        GlyphOutline {
            font: self,
            glyph_id,
        }
    }

    /// Flatten one glyph into a fresh, verbatim `PathStorage`.
    pub fn flatten_glyph(
        &self,
        glyph_id: u16,
        config: FlattenConfig,
    ) -> Result<PathStorage, PenError> {
        let mut storage = PathStorage::new();
        let mut filter = FlattenPen::new(&mut storage, config)?;
        self.glyph(glyph_id).draw(&mut filter)?;
        Ok(storage)
    }
}

/// One glyph of a `FontOutline`.
#[derive(Clone, Copy)]
pub struct GlyphOutline<'a> {
    font: &'a FontOutline,
    glyph_id: u16,
}

impl GlyphOutline<'_> {
    pub fn glyph_id(&self) -> u16 {
        self.glyph_id
    }
}

impl Drawable for GlyphOutline<'_> {
    fn is_empty(&self) -> bool {
        let Ok(face) = self.font.face() else {
            return true;
        };
        let mut counter = SegmentCounter::default();
        face.outline_glyph(GlyphId(self.glyph_id), &mut counter);
        counter.count == 0
    }

    fn draw<P: PathConsumer + ?Sized>(&self, pen: &mut P) -> Result<(), PenError> {
        let face = self.font.face()?;
        let mut forwarder = OutlineForwarder::new(pen);
        face.outline_glyph(GlyphId(self.glyph_id), &mut forwarder);
        forwarder.finish()
    }
}

// ============================================================================
// OutlineForwarder: implements ttf_parser::OutlineBuilder
// ============================================================================

/// Forwards `ttf-parser` outline callbacks to a `PathConsumer`.
///
/// The builder callbacks cannot fail, so the first consumer error is kept and
/// every later callback is ignored; `finish` reports it.
struct OutlineForwarder<'p, P: PathConsumer + ?Sized> {
    pen: &'p mut P,
    current: PointD,
    error: Option<PenError>,
}

impl<'p, P: PathConsumer + ?Sized> OutlineForwarder<'p, P> {
    fn new(pen: &'p mut P) -> Self {
        Self {
            pen,
            current: PointD::default(),
            error: None,
        }
    }

    fn forward<F>(&mut self, f: F)
    where
        F: FnOnce(&mut P) -> Result<(), PenError>,
    {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = f(&mut *self.pen) {
            self.error = Some(e);
        }
    }

    fn finish(self) -> Result<(), PenError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[inline]
fn point(x: f32, y: f32) -> PointD {
    PointF::new(x, y).into()
}

impl<P: PathConsumer + ?Sized> OutlineBuilder for OutlineForwarder<'_, P> {
    fn move_to(&mut self, x: f32, y: f32) {
        let pt = point(x, y);
        self.current = pt;
        self.forward(|pen| pen.move_to(pt));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let pt = point(x, y);
        self.current = pt;
        self.forward(|pen| pen.line_to(pt));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let end = point(x, y);
        let (c1, c2) = quad_to_cubic(self.current, point(x1, y1), end);
        self.current = end;
        self.forward(|pen| pen.curve_to(c1, c2, end));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, end) = (point(x1, y1), point(x2, y2), point(x, y));
        self.current = end;
        self.forward(|pen| pen.curve_to(c1, c2, end));
    }

    fn close(&mut self) {
        self.forward(|pen| pen.close_path());
    }
}

/// Counts outline callbacks; used to detect glyphs without contours.
#[derive(Default)]
struct SegmentCounter {
    count: usize,
}

impl OutlineBuilder for SegmentCounter {
    fn move_to(&mut self, _x: f32, _y: f32) {
        self.count += 1;
    }

    fn line_to(&mut self, _x: f32, _y: f32) {
        self.count += 1;
    }

    fn quad_to(&mut self, _x1: f32, _y1: f32, _x: f32, _y: f32) {
        self.count += 1;
    }

    fn curve_to(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _x: f32, _y: f32) {
        self.count += 1;
    }

    fn close(&mut self) {
        self.count += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
