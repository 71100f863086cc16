use crate::error::PenError;

/// Flattening parameters, fixed for the lifetime of one `FlattenPen`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenConfig {
    /// Target length of the emitted line segments (roughly).
    /// Must be positive and finite.
    pub approximate_segment_length: f64,
    /// Whether straight lines are cut into segments as well.
    /// When false, lines are forwarded unsplit.
    pub segment_lines: bool,
    /// Drop a line whose target equals the current point.
    pub filter_doubles: bool,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            approximate_segment_length: 5.0,
            segment_lines: false,
            filter_doubles: true,
        }
    }
}

impl FlattenConfig {
    pub fn new(approximate_segment_length: f64) -> Self {
        Self {
            approximate_segment_length,
            ..Self::default()
        }
    }

    pub fn with_segment_lines(mut self, segment_lines: bool) -> Self {
        self.segment_lines = segment_lines;
        self
    }

    pub fn with_filter_doubles(mut self, filter_doubles: bool) -> Self {
        self.filter_doubles = filter_doubles;
        self
    }

    /// Check that the segment length can drive a subdivision.
    pub fn validate(&self) -> Result<(), PenError> {
        let len = self.approximate_segment_length;
        if len.is_finite() && len > 0.0 {
            Ok(())
        } else {
            Err(PenError::InvalidSegmentLength(len))
        }
    }
}
