//! Sentence splitting on terminal punctuation.

/// Punctuation that ends a sentence when followed by whitespace.
pub const SENTENCE_TERMINATORS: [char; 6] = ['。', '！', '？', '!', '?', '.'];

/// Splits a paragraph into sentence-like units.
///
/// A boundary is any whitespace run that directly follows one of
/// [`SENTENCE_TERMINATORS`]. The punctuation stays with the sentence before it
/// and the whitespace is dropped. Abbreviations and decimals are not special
/// cased.
///
/// # Example
///
/// ```rust
/// use mandala_segment::chunking::SentenceSplitter;
///
/// let units = SentenceSplitter.sentences("First one. Second one!  第三句。 Tail");
/// assert_eq!(units, ["First one.", "Second one!", "第三句。", "Tail"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Returns the trimmed, non-empty sentences of `paragraph` as slices.
    ///
    /// Text without any boundary comes back as a single unit.
    #[must_use]
    pub fn sentences<'a>(&self, paragraph: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut start = 0usize;
        let mut prev: Option<char> = None;
        let mut in_gap = false;

        for (i, c) in paragraph.char_indices() {
            if in_gap {
                if c.is_whitespace() {
                    continue;
                }
                in_gap = false;
                start = i;
            } else if c.is_whitespace() && prev.is_some_and(|p| SENTENCE_TERMINATORS.contains(&p)) {
                push_trimmed(&mut out, &paragraph[start..i]);
                in_gap = true;
            }
            prev = Some(c);
        }

        if !in_gap {
            push_trimmed(&mut out, &paragraph[start..]);
        }

        out
    }
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, unit: &'a str) {
    let unit = unit.trim();
    if !unit.is_empty() {
        out.push(unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_punctuation_single_unit() {
        let units = SentenceSplitter.sentences("  no terminal punctuation here  ");
        assert_eq!(units, ["no terminal punctuation here"]);
    }

    #[test]
    fn punctuation_needs_following_whitespace() {
        let units = SentenceSplitter.sentences("version 1.5 is out.Really");
        assert_eq!(units, ["version 1.5 is out.Really"]);
    }

    #[test]
    fn splits_on_any_whitespace_run() {
        let units = SentenceSplitter.sentences("One.\n\tTwo?   Three");
        assert_eq!(units, ["One.", "Two?", "Three"]);
    }

    #[test]
    fn full_width_terminators() {
        let units = SentenceSplitter.sentences("甲。 乙！ 丙？ 丁");
        assert_eq!(units, ["甲。", "乙！", "丙？", "丁"]);
    }

    #[test]
    fn cjk_without_spaces_stays_whole() {
        let units = SentenceSplitter.sentences("第一句。第二句。");
        assert_eq!(units, ["第一句。第二句。"]);
    }

    #[test]
    fn abbreviations_are_split() {
        let units = SentenceSplitter.sentences("Dr. Smith arrived.");
        assert_eq!(units, ["Dr.", "Smith arrived."]);
    }

    #[test]
    fn trailing_whitespace_after_terminator() {
        let units = SentenceSplitter.sentences("Done. ");
        assert_eq!(units, ["Done."]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(SentenceSplitter.sentences("   ").is_empty());
    }
}
