#![forbid(unsafe_code)]

//! Text measurement for celltui.
//!
//! Everything that needs the "length" of user-visible text goes through
//! this crate, because byte or `char` counts under- or over-count
//! multi-byte and double-width characters:
//!
//! - [`display_width`] - terminal columns occupied by a string
//! - [`word_wrap`] - lazy greedy word wrap into display lines
//! - [`height_for_width`] - number of lines `word_wrap` would produce
//!
//! # Example
//! ```
//! use celltui_text::{display_width, height_for_width, word_wrap};
//!
//! assert_eq!(display_width("你好"), 4);
//!
//! let lines: Vec<&str> = word_wrap("hello world", 5).collect();
//! assert_eq!(lines, ["hello", "world"]);
//! assert_eq!(height_for_width("hello world", 5), 2);
//! ```

pub mod width;
pub mod wrap;

pub use width::{
    char_width, display_width, grapheme_count, graphemes, last_grapheme_start, lines,
    max_line_width, truncate_to_width,
};
pub use wrap::{WordWrap, WrapOptions, height_for_width, word_wrap};
