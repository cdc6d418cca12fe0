#![forbid(unsafe_code)]

//! Cell contents.
//!
//! A wide glyph occupies a head cell holding the grapheme followed by
//! `width - 1` [`CellContent::Continuation`] cells.

use celltui_text::display_width;

/// Interned brush name, local to one [`Buffer`](crate::Buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrushId(pub(crate) u16);

impl BrushId {
    /// Raw index into the owning buffer's name table.
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Nothing drawn; renders as a blank.
    #[default]
    Empty,
    /// A single-`char` grapheme.
    Char(char),
    /// A multi-`char` grapheme cluster (base plus combining marks, ZWJ sequences).
    Cluster(Box<str>),
    /// Trailing half of a wide glyph to the left.
    Continuation,
}

impl CellContent {
    /// Build content for one grapheme cluster.
    pub fn from_grapheme(grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (None, _) => CellContent::Empty,
            (Some(c), None) => CellContent::Char(c),
            _ => CellContent::Cluster(grapheme.into()),
        }
    }

    /// Columns this content spans, counting its head cell.
    ///
    /// Empty cells and continuations report 1 and 0 respectively.
    pub fn width(&self) -> usize {
        match self {
            CellContent::Empty => 1,
            CellContent::Char(c) => celltui_text::char_width(*c),
            CellContent::Cluster(s) => display_width(s),
            CellContent::Continuation => 0,
        }
    }

    /// Single character, if this is [`CellContent::Char`].
    pub fn as_char(&self) -> Option<char> {
        match self {
            CellContent::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// One terminal cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Displayed content.
    pub content: CellContent,
    /// Brush active when the cell was last written, if any.
    pub brush: Option<BrushId>,
}

impl Cell {
    /// A blank cell painted with `brush`.
    pub const fn blank(brush: Option<BrushId>) -> Self {
        Self {
            content: CellContent::Empty,
            brush,
        }
    }

    /// A cell holding a single character.
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            brush: None,
        }
    }

    /// Set the brush (builder).
    #[must_use]
    pub fn with_brush(mut self, brush: Option<BrushId>) -> Self {
        self.brush = brush;
        self
    }

    /// Whether this cell is the tail of a wide glyph.
    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.content == CellContent::Continuation
    }

    /// Whether nothing is drawn in this cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content == CellContent::Empty
    }
}
