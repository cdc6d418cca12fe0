#![forbid(unsafe_code)]

//! Core widgets for celltui.
//!
//! Every widget takes part in the same size negotiation:
//!
//! 1. A layout asks for [`Widget::size_hint`] and [`Widget::min_size`].
//! 2. It offers space through [`Widget::resize`]; the widget resolves each
//!    axis against its [`SizePolicies`] and remembers the result.
//! 3. It draws the widget onto a [`Painter`] scoped to [`Widget::size`].
//!
//! Input reaches widgets one [`Event`] at a time through
//! [`Widget::on_event`], always from the thread that owns the widget.

pub mod entry;
pub mod label;

pub use entry::Entry;
pub use label::Label;

use celltui_core::event::Event;
use celltui_core::geometry::{Rect, Size};
use celltui_layout::{SizePolicies, SizePolicy};
use celltui_render::{Frame, Painter};

/// The capability set every visual component implements.
///
/// The trait is object safe; layouts hold children as `Box<dyn Widget>`.
pub trait Widget {
    /// Preferred size absent any constraint from the parent.
    fn size_hint(&self) -> Size;

    /// Size the widget never shrinks below, whatever its policy.
    fn min_size(&self) -> Size;

    /// Current horizontal and vertical policies.
    fn size_policy(&self) -> SizePolicies;

    /// Replace both policies. Takes effect at the next [`resize`](Widget::resize).
    fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy);

    /// Accept the space offered by the parent.
    ///
    /// Afterwards [`size`](Widget::size) is the hint on `Minimum` axes and
    /// the offer on `Expanding` axes. Calling twice with the same offer is
    /// the same as calling once.
    fn resize(&mut self, offered: Size);

    /// Size resolved by the last [`resize`](Widget::resize).
    fn size(&self) -> Size;

    /// Draw onto a surface whose origin is the widget's top-left corner.
    fn draw(&self, painter: &mut dyn Painter);

    /// Handle an input event. Returns `true` if the widget acted on it.
    fn on_event(&mut self, event: &Event) -> bool;
}

/// Draw `widget` into `frame` with its top-left corner at (x, y), clipped
/// to the widget's resolved size.
pub fn draw_at(widget: &dyn Widget, frame: &mut Frame, x: u16, y: u16) {
    let size = widget.size();
    let mut painter = frame.painter(Rect::new(x, y, size.width, size.height));
    widget.draw(&mut painter);
}

/// Draw `widget` into a fresh frame exactly its resolved size.
pub fn render_to_frame(widget: &dyn Widget) -> Frame {
    let size = widget.size();
    let mut frame = Frame::new(size.width, size.height);
    draw_at(widget, &mut frame, 0, 0);
    frame
}

/// Convert a measured cell count to a `u16` extent, saturating.
#[inline]
pub(crate) fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
