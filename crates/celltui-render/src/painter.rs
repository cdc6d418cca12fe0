#![forbid(unsafe_code)]

//! The drawing surface widgets render onto.

use celltui_core::geometry::Size;

/// A drawing surface scoped to one widget.
///
/// Coordinates are widget-local and zero-based with the origin at the top
/// left. Implementations clip everything to [`Painter::size`]; widgets are
/// free to draw past the edge and rely on that.
///
/// Brushes are named visual styles resolved outside the widget core.
/// Prefer [`with_styled_brush`](trait.Painter.html#method.with_styled_brush)
/// over pairing [`push_brush`](Painter::push_brush) and
/// [`pop_brush`](Painter::pop_brush) by hand.
pub trait Painter {
    /// Size of the drawable area.
    fn size(&self) -> Size;

    /// Fill a rectangle with the active brush, blanking its content.
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16);

    /// Draw `text` starting at (x, y). Text is not wrapped; whatever does
    /// not fit is clipped.
    fn draw_text(&mut self, x: u16, y: u16, text: &str);

    /// Place the cursor at (x, y).
    fn draw_cursor(&mut self, x: u16, y: u16);

    /// Make `name` the active brush until the matching [`pop_brush`](Painter::pop_brush).
    fn push_brush(&mut self, name: &str);

    /// Restore the brush active before the last [`push_brush`](Painter::push_brush).
    fn pop_brush(&mut self);
}

impl dyn Painter + '_ {
    /// Run `f` with `name` as the active brush.
    pub fn with_styled_brush<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_brush(name);
        let out = f(self);
        self.pop_brush();
        out
    }
}
