//! Visible length measurement.

/// Counts the characters of `text` that are not whitespace.
///
/// Whitespace is treated as zero-width, so the count approximates the
/// reading length of mixed CJK/Latin text better than a byte or char count.
///
/// ```rust
/// use mandala_segment::visible_length;
///
/// assert_eq!(visible_length("a b\n c"), 3);
/// assert_eq!(visible_length("甜蜜 長度"), 4);
/// assert_eq!(visible_length(""), 0);
/// ```
#[must_use]
pub fn visible_length(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
