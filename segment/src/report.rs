//! Grid assembly, Markdown export and status report.

use core::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::chunking::{Chunked, GridChunker, SIDE_CELL_COUNT};
use crate::config::{SegmentConfig, Thresholds};
use crate::dedup::content_hash;
use crate::error::{Result, SegmentError};
use crate::measure::visible_length;
use crate::types::{Cell, Chunk, GridStats};

/// Number of cells in the grid.
pub const GRID_CELL_COUNT: usize = 9;

/// Slot of the synthesized center cell.
pub const CENTER_SLOT: usize = 4;

/// Slots of the eight derived cells, in reading order.
pub const SIDE_SLOTS: [usize; SIDE_CELL_COUNT] = [0, 1, 2, 3, 5, 6, 7, 8];

/// Display label of the center cell.
pub const CENTER_ID: &str = "5 Core";

/// Display title of the center cell.
pub const CENTER_TITLE: &str = "Sweet-length strategy (Chunk over File)";

/// Title used when a chunk has no visible text.
pub const UNTITLED: &str = "Untitled";

const EMPTY_BODY: &str = "(empty)";

/// The result of one segmentation run.
///
/// Always holds nine cells in slot order with the center at [`CENTER_SLOT`]
/// and eight chunks; deserialization rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawGridDocument")]
pub struct GridDocument {
    /// Heading of the exported document.
    pub heading: String,
    /// All nine cells in slot order.
    pub cells: Vec<Cell>,
    /// The eight derived chunks in position order.
    pub chunks: Vec<Chunk>,
    /// Thresholds the run was classified with.
    pub thresholds: Thresholds,
    /// Aggregate numbers of the run.
    pub stats: GridStats,
    /// xxh3 hash of the trimmed input.
    pub input_fingerprint: u64,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename = "GridDocument")]
struct RawGridDocument {
    heading: String,
    cells: Vec<Cell>,
    chunks: Vec<Chunk>,
    thresholds: Thresholds,
    stats: GridStats,
    input_fingerprint: u64,
}

impl TryFrom<RawGridDocument> for GridDocument {
    type Error = SegmentError;

    fn try_from(raw: RawGridDocument) -> Result<Self> {
        check_layout(&raw.cells, &raw.chunks)?;
        Ok(Self {
            heading: raw.heading,
            cells: raw.cells,
            chunks: raw.chunks,
            thresholds: raw.thresholds,
            stats: raw.stats,
            input_fingerprint: raw.input_fingerprint,
        })
    }
}

fn check_layout(cells: &[Cell], chunks: &[Chunk]) -> Result<()> {
    let malformed = |reason| Err(SegmentError::MalformedGrid { reason });

    if cells.len() != GRID_CELL_COUNT {
        return malformed("expected nine cells");
    }
    if chunks.len() != SIDE_CELL_COUNT {
        return malformed("expected eight chunks");
    }
    for (slot, cell) in cells.iter().enumerate() {
        if cell.slot != slot {
            return malformed("cell slots must follow their index");
        }
        if cell.is_center() != (slot == CENTER_SLOT) {
            return malformed("the center cell must sit in slot 4 only");
        }
    }
    Ok(())
}

impl GridDocument {
    /// Returns the center cell.
    #[must_use]
    pub fn center(&self) -> &Cell {
        &self.cells[CENTER_SLOT]
    }

    /// Iterates over the eight derived cells in reading order.
    pub fn side_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_center())
    }

    /// Renders the Markdown export.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let t = &self.thresholds;
        let mut lines = vec![
            format!("# {}", self.heading),
            String::new(),
            format!(
                "> Sweet spot: {}-{} chars; hard limits: {}-{} chars.",
                t.sweet_min(),
                t.sweet_max(),
                t.hard_min(),
                t.hard_max()
            ),
            format!(
                "> Input length: {} chars; chunk count: {}.",
                self.stats.input_visible_length, self.stats.candidate_count
            ),
            String::new(),
        ];

        for cell in &self.cells {
            lines.push(format!("## {} {}", cell.id, cell.title));
            lines.push(String::new());
            if cell.body.is_empty() {
                lines.push(EMPTY_BODY.to_string());
            } else {
                lines.push(cell.body.clone());
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Builds the status report of this run.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            level: StatusLevel::Ok,
            headline: "Split into a nine-grid.".to_string(),
            lines: self
                .chunks
                .iter()
                .map(|chunk| {
                    format!(
                        "Cell {}: {} chars ({})",
                        chunk.position, chunk.visible_length, chunk.classification
                    )
                })
                .collect(),
        }
    }
}

/// Severity of a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// The run produced a grid.
    Ok,
    /// The run was rejected.
    Warn,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("[OK]"),
            Self::Warn => f.write_str("[WARN]"),
        }
    }
}

/// Plain-text status for a status line or terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Overall outcome.
    pub level: StatusLevel,
    /// Summary shown on the leading line.
    pub headline: String,
    /// One line per chunk; empty for rejected runs.
    pub lines: Vec<String>,
}

impl Report {
    /// Builds the warning shown instead of a grid when a run fails.
    #[must_use]
    pub fn rejected(error: &SegmentError) -> Self {
        Self {
            level: StatusLevel::Warn,
            headline: error.to_string(),
            lines: Vec::new(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level, self.headline)?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Assembles [`GridDocument`]s from raw text.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    config: SegmentConfig,
    chunker: GridChunker,
}

impl ReportBuilder {
    /// Creates a builder for the given configuration.
    #[must_use]
    pub fn new(config: SegmentConfig) -> Self {
        let chunker = GridChunker::new(&config);
        Self { config, chunker }
    }

    /// Segments `raw` and lays the result out on the grid.
    ///
    /// # Errors
    /// Returns [`SegmentError::EmptyInput`] when `raw` is blank.
    pub fn build(&self, raw: &str) -> Result<GridDocument> {
        let source = raw.trim();
        let Chunked {
            pieces,
            candidate_count,
        } = self.chunker.chunk(source)?;

        let thresholds = self.config.thresholds;
        let chunks: Vec<Chunk> = pieces
            .into_iter()
            .enumerate()
            .map(|(i, piece)| {
                let visible_length = visible_length(&piece.text);
                Chunk {
                    position: i + 1,
                    classification: thresholds.classify(visible_length),
                    visible_length,
                    text: piece.text,
                    provenance: piece.provenance,
                }
            })
            .collect();

        let stats = GridStats {
            input_visible_length: visible_length(source),
            candidate_count,
        };

        let mut side = chunks.iter().map(|chunk| Cell {
            slot: 0,
            id: chunk.position.to_string(),
            title: format!(
                "{}. {}",
                chunk.position,
                display_title(&chunk.text, self.config.title_width)
            ),
            body: chunk.text.clone(),
            chunk: Some(chunk.position),
        });

        let mut cells = Vec::with_capacity(GRID_CELL_COUNT);
        for slot in 0..GRID_CELL_COUNT {
            let cell = if slot == CENTER_SLOT {
                center_cell(&stats, &thresholds)
            } else {
                // chunker guarantees one chunk per side slot
                let Some(cell) = side.next() else { break };
                cell
            };
            cells.push(Cell { slot, ..cell });
        }

        tracing::debug!(
            input_visible_length = stats.input_visible_length,
            candidate_count,
            "built nine-grid"
        );

        Ok(GridDocument {
            heading: self.config.heading.clone(),
            cells,
            chunks,
            thresholds,
            stats,
            input_fingerprint: content_hash(source),
        })
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(SegmentConfig::default())
    }
}

fn center_cell(stats: &GridStats, t: &Thresholds) -> Cell {
    let body = [
        "Chunk by paragraph so semantic search lands on passages, not whole files.".to_string(),
        format!(
            "This input has about {} chars; it was cut into {} pieces, then arranged into the {} outer cells.",
            stats.input_visible_length, stats.candidate_count, SIDE_CELL_COUNT
        ),
        format!(
            "Suggested range: {}-{} chars; tolerated extremes: {}-{} chars.",
            t.sweet_min(),
            t.sweet_max(),
            t.hard_min(),
            t.hard_max()
        ),
        "Rule: the file is not the retrieval unit; the paragraph is.".to_string(),
    ]
    .join("\n");

    Cell {
        slot: CENTER_SLOT,
        id: CENTER_ID.to_string(),
        title: CENTER_TITLE.to_string(),
        body,
        chunk: None,
    }
}

/// Derives a one-line display title from a chunk body.
///
/// Whitespace runs collapse to single spaces. Titles longer than `width`
/// graphemes are cut and get a trailing `…`.
///
/// ```rust
/// use mandala_segment::display_title;
///
/// assert_eq!(display_title("  two\n\nlines ", 22), "two lines");
/// assert_eq!(display_title("abcdef", 3), "abc…");
/// assert_eq!(display_title(" \n ", 22), "Untitled");
/// ```
#[must_use]
pub fn display_title(body: &str, width: usize) -> String {
    let clean = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if clean.is_empty() {
        return UNTITLED.to_string();
    }

    match clean.grapheme_indices(true).nth(width) {
        Some((cut, _)) => format!("{}…", clean[..cut].trim_end()),
        None => clean,
    }
}
