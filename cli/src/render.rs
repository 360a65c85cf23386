//! Output formats for the CLI.

use mandala_segment::{CENTER_SLOT, GridDocument};

/// Supported renderings of a [`GridDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown section for note-taking apps.
    #[default]
    Markdown,
    /// Status report, one line per chunk.
    Report,
    /// Full document as pretty-printed JSON.
    Json,
    /// 3x3 overview of cell titles.
    Cells,
}

impl OutputFormat {
    /// Parse a format from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "report" | "status" => Some(Self::Report),
            "json" => Some(Self::Json),
            "cells" | "grid" => Some(Self::Cells),
            _ => None,
        }
    }

    /// Renders `doc` in this format.
    ///
    /// # Errors
    /// Fails only if JSON serialization fails.
    pub fn render(self, doc: &GridDocument) -> serde_json::Result<String> {
        Ok(match self {
            Self::Markdown => doc.to_markdown(),
            Self::Report => doc.report().to_string(),
            Self::Json => serde_json::to_string_pretty(doc)?,
            Self::Cells => render_cells(doc),
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Report => write!(f, "report"),
            Self::Json => write!(f, "json"),
            Self::Cells => write!(f, "cells"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("Unknown format: {s} (expected markdown, report, json or cells)")
        })
    }
}

/// Lays cell titles out as three rows of three, center marked with `*`.
fn render_cells(doc: &GridDocument) -> String {
    doc.cells
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.slot == CENTER_SLOT {
                        format!("*{}*", cell.title)
                    } else {
                        cell.title.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
