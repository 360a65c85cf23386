//! # mandala
//!
//! Façade crate that re-exports everything from [`mandala_segment`]. Pull this crate into your
//! application to cut free text into the eight outer cells of a 3x3 grid, with a generated
//! summary in the center.
//!
//! ## What's inside?
//!
//! - [`segment`] and [`segment_with`] turn raw text into a [`GridDocument`].
//! - [`GridDocument::to_markdown`] and [`GridDocument::report`] give the export and the status
//!   lines.
//! - [`Thresholds`] and [`SegmentConfig`] describe the sweet spot and the hard limits.
//! - [`chunking`] exposes the individual splitters and [`GridChunker`].
//!
//! ## Example
//!
//! ```rust
//! use mandala::{SegmentConfig, Thresholds, segment_with};
//!
//! let config = SegmentConfig::builder()
//!     .thresholds(Thresholds::new(60, 900, 40, 1200)?)
//!     .heading("Reading notes")
//!     .build();
//!
//! let doc = segment_with("Why chunk?\n\nBecause files are too big.", &config)?;
//! for cell in doc.side_cells() {
//!     println!("{} {}", cell.id, cell.title);
//! }
//! println!("{}", doc.report());
//! # Ok::<(), mandala::SegmentError>(())
//! ```
//!
//! ## Modules
//!
//! - [`mandala_segment::chunking`] — paragraph, sentence and hard-wrap splitting plus normalization.
//! - [`mandala_segment::classify`] — sweet / usable / out-of-range labels.
//! - [`mandala_segment::report`] — grid layout, Markdown export and status report.

pub use mandala_segment::*;
