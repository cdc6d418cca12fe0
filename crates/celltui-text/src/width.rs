#![forbid(unsafe_code)]

//! Display-width measurement and grapheme helpers.
//!
//! Width is a per-character sum: combining marks and control characters
//! occupy zero columns, East Asian wide and fullwidth glyphs occupy two,
//! everything else one. Editing operations work on grapheme clusters so a
//! base character and its combining marks are added and removed together.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Terminal column width of a single character.
///
/// Control characters (including `\n` and `\t`) draw nothing and count 0.
#[inline]
#[must_use]
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    text.chars().map(char_width).sum()
}

/// Iterate over the extended grapheme clusters of `text`.
#[inline]
pub fn graphemes(text: &str) -> unicode_segmentation::Graphemes<'_> {
    text.graphemes(true)
}

/// Number of extended grapheme clusters in `text`.
#[inline]
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset where the last grapheme cluster of `text` begins.
///
/// Returns `None` for an empty string. Truncating at this offset removes
/// exactly one user-perceived character, however many bytes or code points
/// it spans.
#[must_use]
pub fn last_grapheme_start(text: &str) -> Option<usize> {
    text.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Longest prefix of `text` whose display width fits in `max_width`.
///
/// Never splits a grapheme cluster; a wide glyph that would straddle the
/// limit is left out entirely.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut current_width = 0;

    for (offset, grapheme) in text.grapheme_indices(true) {
        let grapheme_width = display_width(grapheme);
        if current_width + grapheme_width > max_width {
            return &text[..offset];
        }
        current_width += grapheme_width;
    }

    text
}

/// Split `text` on explicit line breaks, verbatim.
///
/// A trailing `\n` produces a trailing empty line, and an empty string
/// produces one empty line.
#[inline]
pub fn lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}

/// Display width of the widest explicit line, ignoring any wrapping.
#[must_use]
pub fn max_line_width(text: &str) -> usize {
    lines(text).map(display_width).max().unwrap_or(0)
}
