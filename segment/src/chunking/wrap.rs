//! Hard character-count wrapping.

/// Smallest window the wrapper ever uses.
const MIN_WINDOW: usize = 80;

/// Force-splits text that has no usable sentence boundary.
///
/// Windows are `max(80, floor(ceiling * 0.75))` characters wide, which leaves
/// slack under the ceiling. Line breaks end a window and are never part of
/// one. Words may be cut in half.
///
/// # Example
///
/// ```rust
/// use mandala_segment::chunking::HardWrapper;
///
/// let wrapper = HardWrapper::for_ceiling(200);
/// assert_eq!(wrapper.window(), 150);
/// assert_eq!(wrapper.windows(&"x".repeat(320)).len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardWrapper {
    window: usize,
}

impl HardWrapper {
    /// Creates a wrapper whose window is derived from `ceiling`.
    #[must_use]
    pub const fn for_ceiling(ceiling: usize) -> Self {
        // floor(ceiling * 0.75) without overflowing
        let scaled = ceiling / 4 * 3 + ceiling % 4 * 3 / 4;
        let window = if scaled > MIN_WINDOW { scaled } else { MIN_WINDOW };
        Self { window }
    }

    /// Window size in characters.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Cuts `text` into consecutive trimmed windows, dropping blank ones.
    #[must_use]
    pub fn windows(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();

        for line in text.split(is_line_terminator) {
            let chars: Vec<char> = line.chars().collect();
            for window in chars.chunks(self.window) {
                let piece: String = window.iter().collect();
                let piece = piece.trim();
                if !piece.is_empty() {
                    out.push(piece.to_string());
                }
            }
        }

        out
    }
}

const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
