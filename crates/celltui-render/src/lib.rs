#![forbid(unsafe_code)]

//! Drawing surfaces for celltui widgets.
//!
//! Widgets never talk to a terminal. They draw through the [`Painter`]
//! trait, which offers exactly three primitives (fill, text, cursor) plus a
//! scoped named brush. Brush names are opaque here; turning `"entry.focused"`
//! into colors is the job of whatever theme consumes the finished surface.
//!
//! [`Frame`] and [`FramePainter`] are a headless implementation: a cell
//! grid that records content, wide-glyph continuations and the brush name
//! active when each cell was written. Event loops flush it to a terminal;
//! tests read it back as plain text.
//!
//! ```
//! use celltui_core::geometry::Rect;
//! use celltui_render::{Frame, Painter};
//!
//! let mut frame = Frame::new(8, 1);
//! {
//!     let mut painter = frame.painter(Rect::from_size(8, 1));
//!     let painter: &mut dyn Painter = &mut painter;
//!     painter.with_styled_brush("entry", |p| {
//!         p.fill_rect(0, 0, 8, 1);
//!         p.draw_text(0, 0, "hi");
//!         p.draw_cursor(2, 0);
//!     });
//! }
//! assert_eq!(frame.buffer.row_text(0), "hi      ");
//! assert_eq!(frame.cursor_position, Some((2, 0)));
//! ```

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod painter;

pub use buffer::Buffer;
pub use cell::{BrushId, Cell, CellContent};
pub use frame::{Frame, FramePainter};
pub use painter::Painter;
