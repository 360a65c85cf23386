//! Ceiling-bounded paragraph splitting.

use crate::measure::visible_length;
use crate::types::{Piece, Provenance};

use super::{HardWrapper, SentenceSplitter};

/// Splits a paragraph into pieces whose visible length stays under a ceiling.
///
/// Paragraphs that already fit are returned whole. Longer ones are cut into
/// sentences, which are greedily joined back together (separated by a single
/// space) as long as the result fits. A sentence that does not fit on its own
/// is handed to [`HardWrapper`] and each window becomes its own piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphSplitter {
    ceiling: usize,
    wrapper: HardWrapper,
}

impl ParagraphSplitter {
    /// Creates a splitter with the given ceiling in visible characters.
    #[must_use]
    pub const fn new(ceiling: usize) -> Self {
        Self {
            ceiling,
            wrapper: HardWrapper::for_ceiling(ceiling),
        }
    }

    /// Ceiling in visible characters.
    #[must_use]
    pub const fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Splits `paragraph` and records how each piece was produced.
    #[must_use]
    pub fn pieces(&self, paragraph: &str) -> Vec<Piece> {
        let trimmed = paragraph.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        if visible_length(trimmed) <= self.ceiling {
            return vec![Piece::new(trimmed, Provenance::Paragraph)];
        }

        let sentences = SentenceSplitter.sentences(trimmed);
        let mut out = Vec::new();
        let mut buffer = String::new();
        // Visible length of `buffer`; the joining space never counts.
        let mut buffer_len = 0usize;

        for sentence in sentences {
            let sentence_len = visible_length(sentence);

            if buffer.is_empty() && sentence_len <= self.ceiling {
                buffer.push_str(sentence);
                buffer_len = sentence_len;
                continue;
            }
            if !buffer.is_empty() && buffer_len + sentence_len <= self.ceiling {
                buffer.push(' ');
                buffer.push_str(sentence);
                buffer_len += sentence_len;
                continue;
            }

            if !buffer.is_empty() {
                out.push(Piece::new(buffer.trim(), Provenance::Sentences));
                buffer.clear();
                buffer_len = 0;
            }

            if sentence_len > self.ceiling {
                tracing::trace!(
                    sentence_len,
                    ceiling = self.ceiling,
                    window = self.wrapper.window(),
                    "hard wrapping oversize sentence"
                );
                out.extend(
                    self.wrapper
                        .windows(sentence)
                        .into_iter()
                        .map(|window| Piece::new(window, Provenance::HardWrap)),
                );
            } else {
                buffer.push_str(sentence);
                buffer_len = sentence_len;
            }
        }

        if !buffer.is_empty() {
            out.push(Piece::new(buffer.trim(), Provenance::Sentences));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(word: &str, len: usize) -> String {
        format!("{}.", word.repeat(len - 1))
    }

    #[test]
    fn short_paragraph_stays_whole() {
        let splitter = ParagraphSplitter::new(1500);
        let pieces = splitter.pieces("  One. Two. Three.  ");

        assert_eq!(pieces, [Piece::new("One. Two. Three.", Provenance::Paragraph)]);
    }

    #[test]
    fn ceiling_counts_visible_length() {
        // 10 visible characters spread over lots of spaces
        let text = "a b c d e f g h i j";
        let pieces = ParagraphSplitter::new(10).pieces(text);
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn sentences_are_regrouped_under_ceiling() {
        let s = sentence("a", 40);
        let text = [s.as_str(); 5].join(" ");
        let pieces = ParagraphSplitter::new(100).pieces(&text);

        // 40 + 40 fits, a third would make 120
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].text, format!("{s} {s}"));
        assert_eq!(pieces[2].text, s);
        assert!(pieces.iter().all(|p| p.provenance == Provenance::Sentences));
        assert!(pieces.iter().all(|p| visible_length(&p.text) <= 100));
    }

    #[test]
    fn oversize_sentence_is_wrapped_between_buffers() {
        let small = sentence("s", 30);
        let huge = sentence("h", 250);
        let text = format!("{small} {huge} {small}");
        let pieces = ParagraphSplitter::new(100).pieces(&text);

        let kinds: Vec<_> = pieces.iter().map(|p| p.provenance).collect();
        assert_eq!(
            kinds,
            [
                Provenance::Sentences,
                Provenance::HardWrap,
                Provenance::HardWrap,
                Provenance::HardWrap,
                Provenance::HardWrap,
                Provenance::Sentences,
            ]
        );
        assert_eq!(pieces[0].text, small);
        assert_eq!(pieces[1].text.chars().count(), 80);
        assert_eq!(pieces[4].text.chars().count(), 10);
        assert_eq!(pieces[5].text, small);
    }

    #[test]
    fn no_punctuation_falls_back_to_windows() {
        let text = "x".repeat(2000);
        let pieces = ParagraphSplitter::new(1500).pieces(&text);

        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].text.chars().count(), 1125);
        assert_eq!(pieces[1].text.chars().count(), 875);
        assert!(pieces.iter().all(|p| p.provenance == Provenance::HardWrap));
    }

    #[test]
    fn exact_ceiling_fits() {
        let a = sentence("a", 50);
        let b = sentence("b", 50);
        let text = format!("{a} {b} {a}");
        let pieces = ParagraphSplitter::new(100).pieces(&text);

        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].text, format!("{a} {b}"));
    }

    #[test]
    fn blank_paragraph_yields_nothing() {
        assert!(ParagraphSplitter::new(10).pieces(" \n ").is_empty());
    }
}
