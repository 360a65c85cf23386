//! Text splitting strategies for the nine-grid.
//!
//! Three splitters cooperate to keep pieces under a length ceiling:
//!
//! - [`SentenceSplitter`]: cuts after terminal punctuation
//! - [`HardWrapper`]: fixed-size character windows
//! - [`ParagraphSplitter`]: regroups sentences under a ceiling, wrapping what cannot fit
//!
//! [`GridChunker`] drives them and turns raw input into exactly eight pieces.

mod grid;
mod paragraph;
mod sentence;
mod wrap;

pub use grid::{Chunked, GridChunker, SIDE_CELL_COUNT, normalize, split_paragraphs};
pub use paragraph::ParagraphSplitter;
pub use sentence::{SENTENCE_TERMINATORS, SentenceSplitter};
pub use wrap::HardWrapper;
