//! Core types for the segmentation crate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::Classification;

/// How a piece of text ended up in its chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// A whole paragraph that already fit under the ceiling.
    Paragraph,
    /// Consecutive sentences regrouped from an oversize paragraph.
    Sentences,
    /// A window cut out of a sentence that alone exceeded the ceiling.
    HardWrap,
    /// A chunk that absorbed overflow pieces from the tail.
    Merged,
    /// Filler added to reach the target count.
    Placeholder,
}

/// Transient text fragment produced while splitting and normalizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Text of the piece, already trimmed.
    pub text: String,
    /// How the piece was produced.
    pub provenance: Provenance,
}

impl Piece {
    /// Creates a new piece.
    #[must_use]
    pub fn new(text: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            text: text.into(),
            provenance,
        }
    }
}

/// One of the eight derived chunks of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Chunk {
    /// 1-based position among the eight chunks.
    pub position: usize,
    /// Chunk text.
    pub text: String,
    /// Visible length of `text`.
    pub visible_length: usize,
    /// Length label of the chunk.
    pub classification: Classification,
    /// How the chunk was produced.
    pub provenance: Provenance,
}

/// A cell of the 3x3 grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Cell {
    /// Slot index in reading order, `0..9`; slot 4 is the center.
    pub slot: usize,
    /// Display label.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Full body text.
    pub body: String,
    /// Position of the chunk shown in this cell, `None` for the center.
    pub chunk: Option<usize>,
}

impl Cell {
    /// Returns true for the synthesized center cell.
    #[must_use]
    pub const fn is_center(&self) -> bool {
        self.chunk.is_none()
    }
}

/// Aggregate numbers of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GridStats {
    /// Visible length of the whole input.
    pub input_visible_length: usize,
    /// Number of pieces before normalization to eight.
    pub candidate_count: usize,
}
