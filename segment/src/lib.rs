//! Sweet-length segmentation for a 3x3 grid.
//!
//! The crate cuts one block of free text into exactly eight chunks for the
//! outer cells of a nine-grid; the center cell holds a generated summary of
//! the run. Splitting is driven only by length and punctuation:
//!
//! 1. blank lines separate paragraphs,
//! 2. paragraphs over the hard maximum are regrouped by sentence,
//! 3. sentences that are still too long are wrapped into fixed windows,
//! 4. the list is merged from the tail or padded until eight remain.
//!
//! Lengths are *visible* lengths: whitespace does not count.
//!
//! ```rust
//! use mandala_segment::{Classification, segment};
//!
//! let doc = segment("First paragraph.\n\nSecond paragraph.").unwrap();
//! assert_eq!(doc.side_cells().count(), 8);
//! assert_eq!(doc.chunks[0].text, "First paragraph.");
//! assert_eq!(doc.chunks[0].classification, Classification::OutOfRange);
//! println!("{}", doc.report());
//! ```
//!
//! Everything here is a pure function of its input and configuration, so
//! documents can be rebuilt from any thread at any time.

pub mod chunking;
pub mod classify;
pub mod config;
pub mod dedup;
pub mod error;
pub mod measure;
pub mod report;
pub mod types;

pub use chunking::{
    GridChunker, HardWrapper, ParagraphSplitter, SIDE_CELL_COUNT, SentenceSplitter,
};
pub use classify::Classification;
pub use config::{SegmentConfig, SegmentConfigBuilder, Thresholds};
pub use error::{Result, SegmentError};
pub use measure::visible_length;
pub use report::{
    CENTER_SLOT, GRID_CELL_COUNT, GridDocument, Report, ReportBuilder, SIDE_SLOTS, StatusLevel,
    display_title,
};
pub use types::{Cell, Chunk, GridStats, Piece, Provenance};

/// Segments `raw` with the default configuration.
///
/// # Errors
/// Returns [`SegmentError::EmptyInput`] when `raw` is blank.
pub fn segment(raw: &str) -> Result<GridDocument> {
    segment_with(raw, &SegmentConfig::default())
}

/// Segments `raw` with an explicit configuration.
///
/// # Errors
/// Returns [`SegmentError::EmptyInput`] when `raw` is blank.
pub fn segment_with(raw: &str, config: &SegmentConfig) -> Result<GridDocument> {
    ReportBuilder::new(config.clone()).build(raw)
}
