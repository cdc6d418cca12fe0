#![forbid(unsafe_code)]

//! Read-only text display.

use celltui_core::event::Event;
use celltui_core::geometry::Size;
use celltui_layout::{SizePolicies, SizePolicy};
use celltui_render::Painter;
use celltui_text::{height_for_width, lines, max_line_width, word_wrap};

use crate::{Widget, cells};

/// Static text, optionally word-wrapped to its resolved width.
///
/// Until the first [`resize`](Widget::resize) a label has no size of its
/// own and sizes itself from its content: as wide as its widest line and as
/// tall as that many lines wrap to. After a resize the width is fixed and
/// the height follows the text wrapped to that width.
///
/// ```
/// use celltui_core::geometry::Size;
/// use celltui_widgets::{Label, Widget};
///
/// let label = Label::new("hello world").with_word_wrap(true);
/// assert_eq!(label.size_hint(), Size::new(11, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
    word_wrap: bool,
    size: Option<Size>,
    policies: SizePolicies,
}

impl Label {
    /// Create an unwrapped label with no resolved size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            word_wrap: false,
            size: None,
            policies: SizePolicies::MINIMUM,
        }
    }

    /// Set word wrapping (builder).
    #[must_use]
    pub fn with_word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    /// Set the size policies (builder).
    #[must_use]
    pub fn with_size_policy(mut self, horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        self.policies = SizePolicies::new(horizontal, vertical);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. The resolved size is kept until the next resize.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, wrap: bool) {
        self.word_wrap = wrap;
    }

    /// Size from the last resize, or `None` if never laid out.
    pub fn resolved_size(&self) -> Option<Size> {
        self.size
    }

    fn wrap_width(&self) -> usize {
        match self.size {
            Some(size) => usize::from(size.width),
            None => max_line_width(&self.text),
        }
    }
}

impl Widget for Label {
    fn size_hint(&self) -> Size {
        let width = self.wrap_width();
        Size::new(cells(width), cells(height_for_width(&self.text, width)))
    }

    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn size_policy(&self) -> SizePolicies {
        self.policies
    }

    fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.policies = SizePolicies::new(horizontal, vertical);
    }

    fn resize(&mut self, offered: Size) {
        let width = self
            .policies
            .horizontal
            .resolve(self.size_hint().width, offered.width);
        // Height is hinted from the width just resolved, not the old one.
        let height_hint = cells(height_for_width(&self.text, usize::from(width)));
        let height = self.policies.vertical.resolve(height_hint, offered.height);
        self.size = Some(Size::new(width, height));
        celltui_core::debug!(
            widget = "Label",
            offered_width = offered.width,
            offered_height = offered.height,
            width,
            height,
            "resize"
        );
    }

    fn size(&self) -> Size {
        self.size.unwrap_or_default()
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let _span = celltui_core::debug_span!(
            "widget_draw",
            widget = "Label",
            wrap = self.word_wrap
        )
        .entered();

        let rows = usize::from(painter.size().height);
        if self.word_wrap {
            for (row, line) in word_wrap(&self.text, self.wrap_width()).take(rows).enumerate() {
                painter.draw_text(0, cells(row), line);
            }
        } else {
            for (row, line) in lines(&self.text).take(rows).enumerate() {
                painter.draw_text(0, cells(row), line);
            }
        }
    }

    fn on_event(&mut self, _event: &Event) -> bool {
        false
    }
}
