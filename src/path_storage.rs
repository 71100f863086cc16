//! Path storage: a recording path consumer.
//!
//! Stores every call it receives as a `PathEvent` and can replay them into
//! any other consumer. Used as the intermediate buffer of the batch flattening
//! wrapper and as a simple in-memory outline.

use std::fmt;

use crate::basics::{PathConsumer, PointD};
use crate::error::PenError;
use crate::flatten_outline::{Drawable, Rebuildable};
use crate::trans_affine::TransAffine;

/// One recorded path-construction call.
#[derive(Debug, Clone, PartialEq)]
pub enum PathEvent {
    MoveTo(PointD),
    LineTo(PointD),
    CurveTo(PointD, PointD, PointD),
    ClosePath,
    EndPath,
    AddComponent {
        glyph_name: String,
        transform: TransAffine,
    },
}

impl PathEvent {
    /// Forward this event to `pen`.
    pub fn send<P: PathConsumer + ?Sized>(&self, pen: &mut P) -> Result<(), PenError> {
        match self {
            PathEvent::MoveTo(pt) => pen.move_to(*pt),
            PathEvent::LineTo(pt) => pen.line_to(*pt),
            PathEvent::CurveTo(c1, c2, end) => pen.curve_to(*c1, *c2, *end),
            PathEvent::ClosePath => pen.close_path(),
            PathEvent::EndPath => pen.end_path(),
            PathEvent::AddComponent {
                glyph_name,
                transform,
            } => pen.add_component(glyph_name, *transform),
        }
    }

    /// The on-curve point this event ends at, if any.
    pub fn end_point(&self) -> Option<PointD> {
        match self {
            PathEvent::MoveTo(pt) | PathEvent::LineTo(pt) | PathEvent::CurveTo(_, _, pt) => {
                Some(*pt)
            }
            _ => None,
        }
    }
}

fn fmt_pt(f: &mut fmt::Formatter<'_>, pt: &PointD) -> fmt::Result {
    write!(f, "({:?}, {:?})", pt.x, pt.y)
}

/// Prints events the way a printing pen would log the calls, e.g.
/// `pen.lineTo((10.0, 20.0))`.
impl fmt::Display for PathEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathEvent::MoveTo(pt) => {
                f.write_str("pen.moveTo(")?;
                fmt_pt(f, pt)?;
                f.write_str(")")
            }
            PathEvent::LineTo(pt) => {
                f.write_str("pen.lineTo(")?;
                fmt_pt(f, pt)?;
                f.write_str(")")
            }
            PathEvent::CurveTo(c1, c2, end) => {
                f.write_str("pen.curveTo(")?;
                fmt_pt(f, c1)?;
                f.write_str(", ")?;
                fmt_pt(f, c2)?;
                f.write_str(", ")?;
                fmt_pt(f, end)?;
                f.write_str(")")
            }
            PathEvent::ClosePath => f.write_str("pen.closePath()"),
            PathEvent::EndPath => f.write_str("pen.endPath()"),
            PathEvent::AddComponent {
                glyph_name,
                transform,
            } => {
                let m = transform.to_array();
                write!(
                    f,
                    "pen.addComponent('{}', ({:?}, {:?}, {:?}, {:?}, {:?}, {:?}))",
                    glyph_name, m[0], m[1], m[2], m[3], m[4], m[5]
                )
            }
        }
    }
}

/// Path storage: the recording consumer.
///
/// In point style, a closing `line_to` that lands back on the subpath's
/// start point is dropped when `close_path` arrives, because the close
/// already implies that edge. Only straight closing segments are dropped;
/// a closing curve is kept.
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    events: Vec<PathEvent>,
    subpath_start: Option<usize>,
    point_style: bool,
}

impl PathStorage {
    /// Create an empty storage that records calls verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty storage that drops redundant closing lines.
    pub fn point_style() -> Self {
        Self {
            point_style: true,
            ..Self::default()
        }
    }

    pub fn is_point_style(&self) -> bool {
        self.point_style
    }

    /// Remove all recorded events (keeps allocated memory).
    pub fn remove_all(&mut self) {
        self.events.clear();
        self.subpath_start = None;
    }

    pub fn events(&self) -> &[PathEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<PathEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The last on-curve point recorded, if any.
    pub fn last_point(&self) -> Option<PointD> {
        self.events.iter().rev().find_map(PathEvent::end_point)
    }

    /// Replay every recorded event, in order, into `pen`.
    pub fn replay<P: PathConsumer + ?Sized>(&self, pen: &mut P) -> Result<(), PenError> {
        for event in &self.events {
            event.send(pen)?;
        }
        Ok(())
    }

    fn drop_closing_duplicate(&mut self) {
        let Some(start) = self.subpath_start else {
            return;
        };
        if self.events.len() < start + 2 {
            return;
        }
        let first = match self.events[start] {
            PathEvent::MoveTo(pt) => pt,
            _ => return,
        };
        if let Some(PathEvent::LineTo(last)) = self.events.last() {
            if *last == first {
                self.events.pop();
            }
        }
    }
}

impl PathConsumer for PathStorage {
    fn move_to(&mut self, pt: PointD) -> Result<(), PenError> {
        self.subpath_start = Some(self.events.len());
        self.events.push(PathEvent::MoveTo(pt));
        Ok(())
    }

    fn line_to(&mut self, pt: PointD) -> Result<(), PenError> {
        self.events.push(PathEvent::LineTo(pt));
        Ok(())
    }

    fn curve_to(&mut self, c1: PointD, c2: PointD, end: PointD) -> Result<(), PenError> {
        self.events.push(PathEvent::CurveTo(c1, c2, end));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        if self.point_style {
            self.drop_closing_duplicate();
        }
        self.events.push(PathEvent::ClosePath);
        self.subpath_start = None;
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        self.events.push(PathEvent::EndPath);
        self.subpath_start = None;
        Ok(())
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: TransAffine,
    ) -> Result<(), PenError> {
        self.events.push(PathEvent::AddComponent {
            glyph_name: glyph_name.to_owned(),
            transform,
        });
        Ok(())
    }
}

impl Drawable for PathStorage {
    fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn draw<P: PathConsumer + ?Sized>(&self, pen: &mut P) -> Result<(), PenError> {
        self.replay(pen)
    }
}

impl Rebuildable for PathStorage {
    fn clear(&mut self) {
        self.remove_all();
    }

    fn rebuild_pen(&mut self) -> &mut dyn PathConsumer {
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    #[test]
    fn test_new_empty() {
        let ps = PathStorage::new();
        assert!(ps.is_empty());
        assert_eq!(ps.len(), 0);
        assert_eq!(ps.last_point(), None);
        assert!(!ps.is_point_style());
    }

    #[test]
    fn test_records_in_order() {
        let mut ps = PathStorage::new();
        ps.move_to(pt(10.0, 20.0)).unwrap();
        ps.line_to(pt(30.0, 40.0)).unwrap();
        ps.curve_to(pt(1.0, 2.0), pt(3.0, 4.0), pt(5.0, 6.0)).unwrap();
        ps.end_path().unwrap();

        assert_eq!(
            ps.events(),
            &[
                PathEvent::MoveTo(pt(10.0, 20.0)),
                PathEvent::LineTo(pt(30.0, 40.0)),
                PathEvent::CurveTo(pt(1.0, 2.0), pt(3.0, 4.0), pt(5.0, 6.0)),
                PathEvent::EndPath,
            ]
        );
        assert_eq!(ps.last_point(), Some(pt(5.0, 6.0)));
    }

    #[test]
    fn test_verbatim_keeps_closing_duplicate() {
        let mut ps = PathStorage::new();
        ps.move_to(pt(0.0, 0.0)).unwrap();
        ps.line_to(pt(10.0, 0.0)).unwrap();
        ps.line_to(pt(0.0, 0.0)).unwrap();
        ps.close_path().unwrap();
        assert_eq!(ps.len(), 4);
    }

    #[test]
    fn test_point_style_drops_closing_duplicate() {
        let mut ps = PathStorage::point_style();
        ps.move_to(pt(0.0, 0.0)).unwrap();
        ps.line_to(pt(10.0, 0.0)).unwrap();
        ps.line_to(pt(0.0, 0.0)).unwrap();
        ps.close_path().unwrap();
        assert_eq!(
            ps.events(),
            &[
                PathEvent::MoveTo(pt(0.0, 0.0)),
                PathEvent::LineTo(pt(10.0, 0.0)),
                PathEvent::ClosePath,
            ]
        );
    }

    #[test]
    fn test_point_style_keeps_closing_curve() {
        let mut ps = PathStorage::point_style();
        ps.move_to(pt(0.0, 0.0)).unwrap();
        ps.line_to(pt(10.0, 0.0)).unwrap();
        ps.curve_to(pt(10.0, 10.0), pt(0.0, 10.0), pt(0.0, 0.0))
            .unwrap();
        ps.close_path().unwrap();
        assert_eq!(ps.len(), 4);
    }

    #[test]
    fn test_point_style_only_checks_current_subpath() {
        let mut ps = PathStorage::point_style();
        ps.move_to(pt(0.0, 0.0)).unwrap();
        ps.line_to(pt(5.0, 5.0)).unwrap();
        ps.end_path().unwrap();
        ps.move_to(pt(5.0, 5.0)).unwrap();
        ps.close_path().unwrap();
        // A lone move followed by close has nothing to drop.
        assert_eq!(ps.len(), 5);
    }

    #[test]
    fn test_replay() {
        let mut src = PathStorage::new();
        src.move_to(pt(1.0, 1.0)).unwrap();
        src.line_to(pt(2.0, 2.0)).unwrap();
        src.close_path().unwrap();
        src.add_component("acute", TransAffine::new_translation(50.0, 0.0))
            .unwrap();

        let mut dst = PathStorage::new();
        src.replay(&mut dst).unwrap();
        assert_eq!(src.events(), dst.events());
    }

    #[test]
    fn test_remove_all() {
        let mut ps = PathStorage::point_style();
        ps.move_to(pt(1.0, 1.0)).unwrap();
        ps.remove_all();
        assert!(ps.is_empty());
        assert!(ps.is_point_style());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PathEvent::MoveTo(pt(10.0, 10.0)).to_string(),
            "pen.moveTo((10.0, 10.0))"
        );
        assert_eq!(
            PathEvent::LineTo(pt(10.0, 20.5)).to_string(),
            "pen.lineTo((10.0, 20.5))"
        );
        assert_eq!(
            PathEvent::CurveTo(pt(1.0, 2.0), pt(3.0, 4.0), pt(5.0, 6.0)).to_string(),
            "pen.curveTo((1.0, 2.0), (3.0, 4.0), (5.0, 6.0))"
        );
        assert_eq!(PathEvent::ClosePath.to_string(), "pen.closePath()");
        assert_eq!(PathEvent::EndPath.to_string(), "pen.endPath()");
        let comp = PathEvent::AddComponent {
            glyph_name: "a".to_owned(),
            transform: TransAffine::new(),
        };
        assert_eq!(
            comp.to_string(),
            "pen.addComponent('a', (1.0, 0.0, 0.0, 1.0, 0.0, 0.0))"
        );
    }
}
