//! Raw text to exactly eight grid pieces.

use crate::config::SegmentConfig;
use crate::error::{Result, SegmentError};
use crate::types::{Piece, Provenance};

use super::ParagraphSplitter;

/// Number of outer cells of the 3x3 grid, and the chunk count of every run.
pub const SIDE_CELL_COUNT: usize = 8;

/// Output of [`GridChunker::chunk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunked {
    /// Exactly [`SIDE_CELL_COUNT`] pieces in reading order.
    pub pieces: Vec<Piece>,
    /// Number of pieces before normalization.
    pub candidate_count: usize,
}

/// Splits raw input into paragraphs, splits oversize paragraphs, then
/// normalizes the result to [`SIDE_CELL_COUNT`] pieces.
#[derive(Debug, Clone)]
pub struct GridChunker {
    splitter: ParagraphSplitter,
    placeholder: String,
}

impl GridChunker {
    /// Creates a chunker using the configured hard maximum as ceiling.
    #[must_use]
    pub fn new(config: &SegmentConfig) -> Self {
        Self {
            splitter: ParagraphSplitter::new(config.thresholds.hard_max()),
            placeholder: config.placeholder.clone(),
        }
    }

    /// Splits `raw` into pieces without normalizing their count.
    #[must_use]
    pub fn candidates(&self, raw: &str) -> Vec<Piece> {
        split_paragraphs(raw)
            .into_iter()
            .flat_map(|paragraph| self.splitter.pieces(paragraph))
            .collect()
    }

    /// Produces exactly [`SIDE_CELL_COUNT`] pieces from `raw`.
    ///
    /// # Errors
    /// Returns [`SegmentError::EmptyInput`] when `raw` is blank.
    pub fn chunk(&self, raw: &str) -> Result<Chunked> {
        let source = raw.trim();
        if source.is_empty() {
            return Err(SegmentError::EmptyInput);
        }

        let candidates = self.candidates(source);
        let candidate_count = candidates.len();
        let pieces = normalize(candidates, SIDE_CELL_COUNT, &self.placeholder);

        Ok(Chunked {
            pieces,
            candidate_count,
        })
    }
}

/// Splits text into trimmed, non-empty paragraphs.
///
/// Paragraphs are separated by any whitespace run holding at least two line
/// feeds, so `"\n\n"`, `"\r\n\r\n"` and `"\n   \n\n"` all count as blank lines.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut gap_start: Option<usize> = None;
    let mut line_feeds = 0usize;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if gap_start.is_none() {
                gap_start = Some(i);
                line_feeds = 0;
            }
            if c == '\n' {
                line_feeds += 1;
            }
        } else if let Some(gap) = gap_start.take() {
            if line_feeds >= 2 {
                push_paragraph(&mut out, &text[start..gap]);
                start = i;
            }
        }
    }
    push_paragraph(&mut out, &text[start..]);

    out
}

fn push_paragraph<'a>(out: &mut Vec<&'a str>, paragraph: &'a str) {
    let paragraph = paragraph.trim();
    if !paragraph.is_empty() {
        out.push(paragraph);
    }
}

/// Forces `pieces` to exactly `target` items.
///
/// Surplus pieces are folded into the last kept piece, joined by blank lines
/// and in order; the head is never touched. Missing pieces are filled with
/// `placeholder`.
#[must_use]
pub fn normalize(mut pieces: Vec<Piece>, target: usize, placeholder: &str) -> Vec<Piece> {
    if target == 0 {
        return Vec::new();
    }

    if pieces.len() > target {
        let surplus = pieces.len() - target;
        // Same text as collapsing the tail one piece at a time.
        let tail: Vec<String> = pieces
            .drain(target - 1..)
            .map(|piece| piece.text)
            .collect();
        tracing::debug!(surplus, target, "merging overflow pieces into the last cell");
        pieces.push(Piece::new(tail.join("\n\n"), Provenance::Merged));
    } else if pieces.len() < target {
        let missing = target - pieces.len();
        tracing::debug!(missing, target, "padding with placeholder cells");
        pieces.extend((0..missing).map(|_| Piece::new(placeholder, Provenance::Placeholder)));
    }

    pieces
}
