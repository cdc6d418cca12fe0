#![forbid(unsafe_code)]

//! Greedy word wrapping by display width.
//!
//! Text is split on explicit `\n` first; each paragraph is then packed
//! greedily with whitespace-delimited tokens. The output is a lazy
//! iterator of borrowed slices of the source, recomputed on every call.
//!
//! - Whitespace between tokens on the same line is kept as written.
//! - Whitespace at a break point is dropped.
//! - A paragraph's leading indentation is kept when it fits alongside the
//!   first token (see [`WrapOptions::preserve_indent`]).
//! - A token wider than the limit is emitted alone and unbroken.
//! - An empty paragraph yields one empty line.
//!
//! A width of `0` is treated as `1`.
//!
//! # Example
//! ```
//! use celltui_text::wrap::{word_wrap, WrapOptions};
//!
//! let lines: Vec<&str> = word_wrap("Hello world foo bar", 10).collect();
//! assert_eq!(lines, ["Hello", "world foo", "bar"]);
//!
//! let opts = WrapOptions::new(10).preserve_indent(false);
//! let lines: Vec<&str> = opts.wrap("  indented").collect();
//! assert_eq!(lines, ["indented"]);
//! ```

use std::iter::FusedIterator;

use crate::width::display_width;

/// Options for word wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum width in cells. Zero is clamped to one.
    pub width: usize,
    /// Keep leading whitespace on the first line of each paragraph.
    pub preserve_indent: bool,
}

impl WrapOptions {
    /// Create new wrap options with the given width.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            preserve_indent: true,
        }
    }

    /// Set whether to preserve paragraph indentation.
    #[must_use]
    pub fn preserve_indent(mut self, preserve: bool) -> Self {
        self.preserve_indent = preserve;
        self
    }

    /// Wrap `text` with these options.
    pub fn wrap<'a>(&self, text: &'a str) -> WordWrap<'a> {
        WordWrap {
            paragraphs: text.split('\n'),
            pending: None,
            width: self.width.max(1),
            preserve_indent: self.preserve_indent,
        }
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new(80)
    }
}

/// Wrap `text` to `width` columns with default options.
pub fn word_wrap(text: &str, width: usize) -> WordWrap<'_> {
    WrapOptions::new(width).wrap(text)
}

/// Number of lines [`word_wrap`] produces for `(text, width)`.
///
/// Always at least one.
#[must_use]
pub fn height_for_width(text: &str, width: usize) -> usize {
    word_wrap(text, width).count()
}

/// Lazy iterator over wrapped display lines.
///
/// A clone continues from the same position. Call [`word_wrap`] again to
/// start over.
#[derive(Debug, Clone)]
pub struct WordWrap<'a> {
    paragraphs: std::str::Split<'a, char>,
    /// Unconsumed tail of the current paragraph.
    pending: Option<&'a str>,
    width: usize,
    preserve_indent: bool,
}

impl<'a> Iterator for WordWrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (rest, paragraph_start) = match self.pending.take() {
            Some(rest) => (rest, false),
            None => (self.paragraphs.next()?, true),
        };

        let (line, remainder) = take_line(rest, self.width, paragraph_start && self.preserve_indent);
        self.pending = remainder;
        Some(line)
    }
}

impl FusedIterator for WordWrap<'_> {}

/// Byte range `(start, end)` of the next whitespace-delimited token.
fn next_token(text: &str) -> Option<(usize, usize)> {
    let start = text.find(|c: char| !c.is_whitespace())?;
    let end = text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |len| start + len);
    Some((start, end))
}

/// Pack one line from the front of `text`.
///
/// Returns the line and the unconsumed tail, or `None` for the tail once
/// no tokens remain.
fn take_line(text: &str, width: usize, keep_indent: bool) -> (&str, Option<&str>) {
    let Some((word_start, word_end)) = next_token(text) else {
        return ("", None);
    };

    let indent_width = display_width(&text[..word_start]);
    let word_width = display_width(&text[word_start..word_end]);
    let (line_start, mut line_width) = if keep_indent && indent_width + word_width <= width {
        (0, indent_width + word_width)
    } else {
        (word_start, word_width)
    };
    let mut line_end = word_end;

    while let Some((_, next_end)) = next_token(&text[line_end..]) {
        // Measured with the gap before it.
        let added = display_width(&text[line_end..line_end + next_end]);
        if line_width + added > width {
            return (&text[line_start..line_end], Some(&text[line_end..]));
        }
        line_width += added;
        line_end += next_end;
    }

    (&text[line_start..line_end], None)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lines_fit_unless_single_oversized_token(s in "[a-zA-Z 你好\n]{0,120}", width in 0usize..30) {
            let limit = width.max(1);
            for line in word_wrap(&s, width) {
                let w = display_width(line);
                if w > limit {
                    prop_assert!(
                        !line.trim().contains(char::is_whitespace),
                        "line '{}' exceeds width {} but is not a single token", line, limit
                    );
                }
            }
        }

        #[test]
        fn height_equals_line_count(s in "\\PC{0,80}", width in 0usize..40) {
            prop_assert_eq!(height_for_width(&s, width), word_wrap(&s, width).count());
        }

        #[test]
        fn tokens_are_preserved_in_order(s in "[a-z \n]{0,100}", width in 1usize..20) {
            let original: Vec<&str> = s.split_whitespace().collect();
            let wrapped: Vec<&str> = word_wrap(&s, width)
                .flat_map(str::split_whitespace)
                .collect();
            prop_assert_eq!(original, wrapped);
        }

        #[test]
        fn wrap_is_deterministic(s in "\\PC{0,60}", width in 0usize..20) {
            let a: Vec<&str> = word_wrap(&s, width).collect();
            let b: Vec<&str> = word_wrap(&s, width).collect();
            prop_assert_eq!(a, b);
        }
    }
}
