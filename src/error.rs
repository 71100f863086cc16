use thiserror::Error;

/// Errors raised while driving a path consumer.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PenError {
    /// A drawing call arrived while no subpath was open.
    #[error("{operation} called without a current point (missing move_to)")]
    MissingCurrentPoint { operation: &'static str },

    /// A `move_to` arrived before the previous subpath was closed or ended.
    #[error("move_to called while a subpath is still open (missing close_path or end_path)")]
    UnterminatedSubpath,

    #[error("approximate segment length must be positive and finite, got {0}")]
    InvalidSegmentLength(f64),

    #[cfg(feature = "font")]
    #[error("failed to parse font: {0}")]
    FontParse(String),
}
