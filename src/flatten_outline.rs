//! Whole-outline flattening.
//!
//! Drives a complete outline through a `FlattenPen` into a buffer, then
//! clears the outline and rebuilds it from the buffer. The outline itself is
//! an external object; it only has to provide the two capabilities below.

use log::debug;

use crate::basics::PathConsumer;
use crate::config::FlattenConfig;
use crate::conv_flatten::FlattenPen;
use crate::error::PenError;
use crate::path_storage::PathStorage;

/// Default segment length used by [`flatten_outline_default`].
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// An outline that can stream itself into a path consumer.
pub trait Drawable {
    /// True when drawing would produce no calls at all.
    fn is_empty(&self) -> bool;

    fn draw<P: PathConsumer + ?Sized>(&self, pen: &mut P) -> Result<(), PenError>;
}

/// An outline that can be cleared and then rebuilt through a consumer.
pub trait Rebuildable {
    fn clear(&mut self);

    /// Consumer that appends to this outline.
    fn rebuild_pen(&mut self) -> &mut dyn PathConsumer;
}

/// Replace the contents of `outline` with its flattened version.
///
/// Every segment is cut into lines of roughly `threshold` units; straight
/// lines are cut too when `segment_lines` is set. An empty outline is left
/// untouched. On error the outline is only modified if the failure happened
/// while rebuilding.
pub fn flatten_outline<G>(
    outline: &mut G,
    threshold: f64,
    segment_lines: bool,
) -> Result<(), PenError>
where
    G: Drawable + Rebuildable + ?Sized,
{
    if outline.is_empty() {
        return Ok(());
    }

    let config = FlattenConfig::new(threshold).with_segment_lines(segment_lines);
    let mut data = PathStorage::point_style();
    {
        let mut filter = FlattenPen::new(&mut data, config)?;
        outline.draw(&mut filter)?;
    }
    debug!("flattened outline into {} events", data.len());

    outline.clear();
    data.replay(outline.rebuild_pen())
}

/// [`flatten_outline`] with a threshold of 10 units and line segmenting on.
pub fn flatten_outline_default<G>(outline: &mut G) -> Result<(), PenError>
where
    G: Drawable + Rebuildable + ?Sized,
{
    flatten_outline(outline, DEFAULT_THRESHOLD, true)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PointD;
    use crate::path_storage::PathEvent;
    use crate::trans_affine::TransAffine;

    fn pt(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    fn square() -> PathStorage {
        let mut glyph = PathStorage::new();
        glyph.move_to(pt(10.0, 10.0)).unwrap();
        glyph.line_to(pt(10.0, 30.0)).unwrap();
        glyph.line_to(pt(30.0, 30.0)).unwrap();
        glyph.line_to(pt(30.0, 10.0)).unwrap();
        glyph.close_path().unwrap();
        glyph
    }

    #[test]
    fn test_flatten_square() {
        let mut glyph = square();
        flatten_outline_default(&mut glyph).unwrap();

        let printed: Vec<String> = glyph.events().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            printed,
            vec![
                "pen.moveTo((10.0, 10.0))",
                "pen.lineTo((10.0, 20.0))",
                "pen.lineTo((10.0, 30.0))",
                "pen.lineTo((20.0, 30.0))",
                "pen.lineTo((30.0, 30.0))",
                "pen.lineTo((30.0, 20.0))",
                "pen.lineTo((30.0, 10.0))",
                "pen.lineTo((20.0, 10.0))",
                "pen.closePath()",
            ]
        );
    }

    #[test]
    fn test_empty_outline_is_untouched() {
        let mut glyph = PathStorage::new();
        flatten_outline_default(&mut glyph).unwrap();
        assert!(glyph.is_empty());
    }

    #[test]
    fn test_lines_kept_without_segment_lines() {
        let mut glyph = square();
        flatten_outline(&mut glyph, 1.0, false).unwrap();
        // The closing edge is implied by closePath.
        assert_eq!(glyph.len(), 5);
        assert_eq!(glyph.last_point(), Some(pt(30.0, 10.0)));
    }

    #[test]
    fn test_curves_and_components() {
        let mut glyph = PathStorage::new();
        glyph.move_to(pt(0.0, 0.0)).unwrap();
        glyph
            .curve_to(pt(0.0, 50.0), pt(50.0, 100.0), pt(100.0, 100.0))
            .unwrap();
        glyph.end_path().unwrap();
        glyph
            .add_component("ring", TransAffine::new_translation(10.0, 0.0))
            .unwrap();

        flatten_outline(&mut glyph, 5.0, true).unwrap();

        let events = glyph.events();
        assert!(events.len() > 10);
        assert!(events.iter().all(|e| !matches!(e, PathEvent::CurveTo(..))));
        assert_eq!(events[0], PathEvent::MoveTo(pt(0.0, 0.0)));
        assert_eq!(events[events.len() - 3], PathEvent::LineTo(pt(100.0, 100.0)));
        assert_eq!(events[events.len() - 2], PathEvent::EndPath);
        assert_eq!(
            events[events.len() - 1],
            PathEvent::AddComponent {
                glyph_name: "ring".to_owned(),
                transform: TransAffine::new_translation(10.0, 0.0),
            }
        );
    }

    #[test]
    fn test_malformed_outline_is_left_untouched() {
        let mut glyph = PathStorage::new();
        glyph.line_to(pt(1.0, 1.0)).unwrap();
        let before = glyph.events().to_vec();

        let err = flatten_outline_default(&mut glyph).unwrap_err();
        assert!(matches!(err, PenError::MissingCurrentPoint { .. }));
        assert_eq!(glyph.events(), &before[..]);
    }

    #[test]
    fn test_invalid_threshold() {
        let mut glyph = square();
        assert!(matches!(
            flatten_outline(&mut glyph, -1.0, true),
            Err(PenError::InvalidSegmentLength(_))
        ));
        assert_eq!(glyph.len(), 5);
    }
}
