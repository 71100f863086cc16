//! Curve flattening filter.
//!
//! `FlattenPen` sits between a path producer and a downstream consumer and
//! replaces every cubic segment (and, optionally, every long straight line)
//! with a run of `line_to` calls whose length approximates the configured
//! segment length. Subpaths, closures and component references pass through
//! with the same structure; `curve_to` is never emitted downstream.

use log::{debug, trace, warn};

use crate::basics::{round_steps, PathConsumer, PointD};
use crate::config::FlattenConfig;
use crate::error::PenError;
use crate::math::{calc_distance, cubic_point_at, estimate_cubic_length, interpolate};
use crate::trans_affine::TransAffine;

// ============================================================================
// FlattenPen
// ============================================================================

/// Curve flattening filter pen.
///
/// Wraps a downstream `PathConsumer` and forwards a curve-free, structurally
/// equivalent call stream to it. Holds no state besides its configuration and
/// the current subpath's start and current points. Pass `&mut consumer` to
/// borrow the downstream consumer instead of moving it in.
pub struct FlattenPen<P: PathConsumer> {
    pen: P,
    config: FlattenConfig,
    current: Option<PointD>,
    first: Option<PointD>,
}

impl<P: PathConsumer> FlattenPen<P> {
    /// Create a filter drawing into `pen`. Fails if the configured segment
    /// length is not positive and finite.
    pub fn new(pen: P, config: FlattenConfig) -> Result<Self, PenError> {
        config.validate()?;
        Ok(Self {
            pen,
            config,
            current: None,
            first: None,
        })
    }

    /// Create a filter with the default policy and the given segment length.
    pub fn with_segment_length(pen: P, approximate_segment_length: f64) -> Result<Self, PenError> {
        Self::new(pen, FlattenConfig::new(approximate_segment_length))
    }

    pub fn config(&self) -> &FlattenConfig {
        &self.config
    }

    pub fn approximate_segment_length(&self) -> f64 {
        self.config.approximate_segment_length
    }

    pub fn segment_lines(&self) -> bool {
        self.config.segment_lines
    }

    pub fn filter_doubles(&self) -> bool {
        self.config.filter_doubles
    }

    /// The point the next segment starts from, if a subpath is open.
    pub fn current_point(&self) -> Option<PointD> {
        self.current
    }

    pub fn pen(&self) -> &P {
        &self.pen
    }

    pub fn pen_mut(&mut self) -> &mut P {
        &mut self.pen
    }

    /// Consume the filter and return the downstream consumer.
    pub fn into_inner(self) -> P {
        self.pen
    }

    fn require_current(&self, operation: &'static str) -> Result<PointD, PenError> {
        self.current.ok_or_else(|| {
            warn!("{operation} without a current point");
            PenError::MissingCurrentPoint { operation }
        })
    }

    fn reset_subpath(&mut self) {
        self.current = None;
        self.first = None;
    }

    /// Emit `line_to` for each of `steps` samples produced by `sample`, with
    /// the final sample replaced by `end` exactly.
    fn emit_steps<F>(&mut self, steps: u64, end: PointD, sample: F) -> Result<(), PenError>
    where
        F: Fn(f64) -> PointD,
    {
        let n = steps as f64;
        for i in 1..=steps {
            let pt = if i == steps {
                end
            } else {
                sample(i as f64 / n)
            };
            self.pen.line_to(pt)?;
        }
        Ok(())
    }
}

impl<P: PathConsumer> PathConsumer for FlattenPen<P> {
    fn move_to(&mut self, pt: PointD) -> Result<(), PenError> {
        if self.current.is_some() {
            warn!("move_to while a subpath is still open");
            return Err(PenError::UnterminatedSubpath);
        }
        self.pen.move_to(pt)?;
        self.current = Some(pt);
        self.first = Some(pt);
        Ok(())
    }

    fn line_to(&mut self, pt: PointD) -> Result<(), PenError> {
        let current = self.require_current("line_to")?;

        if self.config.filter_doubles && pt == current {
            trace!("dropping zero-length line at ({}, {})", pt.x, pt.y);
            return Ok(());
        }

        if !self.config.segment_lines {
            self.pen.line_to(pt)?;
            self.current = Some(pt);
            return Ok(());
        }

        let d = calc_distance(current, pt);
        match round_steps(d / self.config.approximate_segment_length) {
            Some(steps) if steps >= 1 => {
                trace!("line of length {d} split into {steps} steps");
                self.emit_steps(steps, pt, |t| interpolate(current, pt, t))?;
            }
            _ => self.pen.line_to(pt)?,
        }
        // Always the exact target, never the last interpolated value.
        self.current = Some(pt);
        Ok(())
    }

    fn curve_to(&mut self, c1: PointD, c2: PointD, end: PointD) -> Result<(), PenError> {
        let current = self.require_current("curve_to")?;

        let estimated = estimate_cubic_length(current, c1, c2, end);
        let steps = round_steps(estimated / self.config.approximate_segment_length);
        let false_curve = c1 == current && c2 == end;

        match steps {
            Some(steps) if steps >= 1 && !false_curve => {
                trace!("curve of estimated length {estimated} split into {steps} steps");
                self.emit_steps(steps, end, |t| cubic_point_at(t, current, c1, c2, end))?;
            }
            _ => {
                if false_curve {
                    debug!("straight cubic to ({}, {}) emitted as a line", end.x, end.y);
                }
                self.pen.line_to(end)?;
            }
        }
        self.current = Some(end);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        self.require_current("close_path")?;
        let first = self
            .first
            .ok_or(PenError::MissingCurrentPoint {
                operation: "close_path",
            })?;
        // The closing edge obeys the same doubles/segmenting policy as any line.
        self.line_to(first)?;
        self.pen.close_path()?;
        self.reset_subpath();
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        self.pen.end_path()?;
        self.reset_subpath();
        Ok(())
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: TransAffine,
    ) -> Result<(), PenError> {
        self.pen.add_component(glyph_name, transform)
    }
}

// ============================================================================
// Tests
// ============================================================================
