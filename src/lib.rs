//! # flatten-pen
//!
//! A streaming path filter that turns curved outline segments into runs of
//! straight lines whose length approximates a caller-chosen target, while
//! keeping the structure of the outline (subpaths, closures, component
//! references) intact.
//!
//! ## Architecture
//!
//! Path data flows through a chain of pens:
//!
//! 1. **Producer**: an outline drawing itself (`Drawable`), e.g. a
//!    `PathStorage` or, with the `font` feature, a glyph from a font file
//! 2. **Filter**: `FlattenPen`, which implements `PathConsumer` and
//!    replaces every `curve_to` (and optionally every long `line_to`) with
//!    a run of `line_to` calls
//! 3. **Consumer**: any downstream `PathConsumer`
//!
//! ```
//! use flatten_pen::{FlattenConfig, FlattenPen, PathConsumer, PathStorage, PointD};
//!
//! let mut out = PathStorage::new();
//! let config = FlattenConfig::new(10.0).with_segment_lines(true);
//! let mut pen = FlattenPen::new(&mut out, config)?;
//! pen.move_to(PointD::new(10.0, 10.0))?;
//! pen.line_to(PointD::new(10.0, 30.0))?;
//! pen.end_path()?;
//! assert_eq!(out.len(), 4);
//! # Ok::<(), flatten_pen::PenError>(())
//! ```

pub mod basics;
pub mod config;
pub mod conv_flatten;
pub mod error;
pub mod flatten_outline;
pub mod math;
pub mod path_storage;
pub mod trans_affine;

#[cfg(feature = "font")]
pub mod font_outline;

pub use basics::{PathConsumer, PointD};
pub use config::FlattenConfig;
pub use conv_flatten::FlattenPen;
pub use error::PenError;
pub use flatten_outline::{flatten_outline, flatten_outline_default, Drawable, Rebuildable};
pub use path_storage::{PathEvent, PathStorage};
pub use trans_affine::TransAffine;

#[cfg(feature = "font")]
pub use font_outline::{FontOutline, GlyphOutline};
