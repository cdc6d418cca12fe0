#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Every wide head is followed by its continuation cells; writing over
//!    either half of a wide glyph blanks the other half

use celltui_core::geometry::Rect;

use crate::cell::{BrushId, Cell, CellContent};

/// A 2D grid of terminal cells plus the brush names they reference.
///
/// ```
/// use celltui_render::{Buffer, Cell};
///
/// let mut buffer = Buffer::new(4, 1);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.row_text(0), "Hi  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    brushes: Vec<String>,
}

impl Buffer {
    /// Create a blank buffer. Zero dimensions yield a buffer with no cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            brushes: Vec::new(),
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Intern a brush name, returning its id in this buffer.
    pub fn intern_brush(&mut self, name: &str) -> BrushId {
        if let Some(pos) = self.brushes.iter().position(|b| b == name) {
            return BrushId(pos as u16);
        }
        self.brushes.push(name.to_owned());
        BrushId((self.brushes.len() - 1) as u16)
    }

    /// Name of an interned brush.
    pub fn brush_name(&self, id: BrushId) -> Option<&str> {
        self.brushes.get(id.0 as usize).map(String::as_str)
    }

    /// Brush name of the cell at (x, y), if the cell exists and is brushed.
    pub fn brush_at(&self, x: u16, y: u16) -> Option<&str> {
        let id = self.get(x, y)?.brush?;
        self.brush_name(id)
    }

    /// Set the cell at (x, y).
    ///
    /// Out-of-bounds writes are ignored. Wide content writes its
    /// continuation cells too, and is written atomically: if the glyph does
    /// not fit before the right edge, nothing is written.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let width = cell.content.width();
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if width > 1 && x as usize + width > self.width as usize {
            return;
        }

        let span = width.max(1);
        for offset in 0..span {
            self.clear_overlap(x + offset as u16, y);
        }

        let brush = cell.brush;
        self.cells[idx] = cell;
        for offset in 1..span {
            self.cells[idx + offset] = Cell {
                content: CellContent::Continuation,
                brush,
            };
        }
    }

    /// Blank whatever wide glyph currently covers (x, y), both halves.
    fn clear_overlap(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else {
            return;
        };

        let head_x = if self.cells[idx].is_continuation() {
            let mut back = x;
            while back > 0 {
                back -= 1;
                match self.get(back, y) {
                    Some(cell) if cell.is_continuation() => continue,
                    _ => break,
                }
            }
            back
        } else {
            x
        };

        let Some(head_idx) = self.index(head_x, y) else {
            return;
        };
        let head_width = self.cells[head_idx].content.width();
        if head_width <= 1 && head_x == x {
            return;
        }

        let brush = self.cells[head_idx].brush;
        let end = (head_x as usize + head_width.max(1)).min(self.width as usize);
        for cx in head_x as usize..end {
            let i = y as usize * self.width as usize + cx;
            self.cells[i] = Cell::blank(brush);
        }
        // Stray continuations after a clipped head.
        let mut cx = end;
        while cx < self.width as usize {
            let i = y as usize * self.width as usize + cx;
            if !self.cells[i].is_continuation() {
                break;
            }
            self.cells[i] = Cell::blank(brush);
            cx += 1;
        }
    }

    /// Fill every cell of `rect` (clipped to the buffer) with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: &Cell) {
        let clipped = rect.intersection(&self.bounds());
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell.clone());
            }
        }
    }

    /// Reset every cell to blank. Interned brush names are kept.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells of row `y`, or an empty slice when out of bounds.
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Row `y` as text: blanks become spaces, continuations contribute nothing.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::with_capacity(self.width as usize);
        for cell in self.row_cells(y) {
            match &cell.content {
                CellContent::Empty => out.push(' '),
                CellContent::Char(c) => out.push(*c),
                CellContent::Cluster(s) => out.push_str(s),
                CellContent::Continuation => {}
            }
        }
        out
    }

    /// Whole buffer as text, one line per row with trailing blanks trimmed.
    pub fn to_plain_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
