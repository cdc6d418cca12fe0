#![forbid(unsafe_code)]

//! Frame = Buffer + cursor for a render pass.
//!
//! ```
//! use celltui_core::geometry::Rect;
//! use celltui_render::{Frame, Painter};
//!
//! let mut frame = Frame::new(10, 2);
//! let mut painter = frame.painter(Rect::new(2, 1, 4, 1));
//! painter.draw_text(0, 0, "clipped text");
//! drop(painter);
//! assert_eq!(frame.buffer.to_plain_text(), "\n  clip");
//! ```

use celltui_core::geometry::{Rect, Size};
use celltui_text::{display_width, graphemes};
use smallvec::SmallVec;

use crate::buffer::Buffer;
use crate::cell::{BrushId, Cell, CellContent};
use crate::painter::Painter;

/// A render target: cell grid plus the hardware cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The cell grid.
    pub buffer: Buffer,
    /// Absolute cursor position, if a widget placed one this pass.
    pub cursor_position: Option<(u16, u16)>,
}

impl Frame {
    /// Create a blank frame.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor_position: None,
        }
    }

    /// Frame dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.buffer.width(), self.buffer.height())
    }

    /// Set or hide the cursor.
    #[inline]
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor_position = position;
    }

    /// Blank the buffer and hide the cursor for a fresh pass.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = None;
    }

    /// A painter whose origin is `area`'s top-left corner and whose drawing
    /// is clipped to `area` (and to the frame).
    pub fn painter(&mut self, area: Rect) -> FramePainter<'_> {
        let clip = area.intersection(&self.buffer.bounds());
        FramePainter {
            frame: self,
            area,
            clip,
            brushes: SmallVec::new(),
        }
    }
}

/// [`Painter`] over a region of a [`Frame`].
#[derive(Debug)]
pub struct FramePainter<'a> {
    frame: &'a mut Frame,
    area: Rect,
    clip: Rect,
    brushes: SmallVec<[BrushId; 4]>,
}

impl FramePainter<'_> {
    #[inline]
    fn active_brush(&self) -> Option<BrushId> {
        self.brushes.last().copied()
    }

    /// Widget-local to absolute, or `None` when outside the clip region.
    fn to_absolute(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        let ax = self.area.x.checked_add(x)?;
        let ay = self.area.y.checked_add(y)?;
        self.clip.contains(ax, ay).then_some((ax, ay))
    }
}

impl Painter for FramePainter<'_> {
    fn size(&self) -> Size {
        self.area.size()
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) {
        let rect = Rect::new(
            self.area.x.saturating_add(x),
            self.area.y.saturating_add(y),
            width,
            height,
        )
        .intersection(&self.clip);
        let cell = Cell::blank(self.active_brush());
        self.frame.buffer.fill(rect, &cell);
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        let Some((start_x, ay)) = self.to_absolute(x, y) else {
            return;
        };
        let max_x = self.clip.right() as usize;
        let brush = self.active_brush();
        let mut col = start_x as usize;

        for grapheme in graphemes(text) {
            let w = display_width(grapheme);
            if w == 0 {
                continue;
            }
            if col + w > max_x {
                break;
            }
            let cell = Cell {
                content: CellContent::from_grapheme(grapheme),
                brush,
            };
            self.frame.buffer.set(col as u16, ay, cell);
            col += w;
        }
    }

    fn draw_cursor(&mut self, x: u16, y: u16) {
        if let Some(position) = self.to_absolute(x, y) {
            self.frame.set_cursor(Some(position));
        }
    }

    fn push_brush(&mut self, name: &str) {
        let id = self.frame.buffer.intern_brush(name);
        self.brushes.push(id);
    }

    fn pop_brush(&mut self) {
        self.brushes.pop();
    }
}
