#![forbid(unsafe_code)]

//! Single-line text entry.
//!
//! An [`Entry`] edits its text only while focused. Typing appends at the
//! end, Backspace removes the last grapheme cluster, and Enter submits.
//! There is no cursor movement or selection; the cursor always sits just
//! past the last glyph.
//!
//! ```
//! use celltui_core::event::{Event, KeyCode, KeyEvent};
//! use celltui_widgets::{Entry, Widget};
//!
//! let mut entry = Entry::new();
//! entry.set_focused(true);
//! entry.on_event(&Event::Key(KeyEvent::new(KeyCode::Char('h'))));
//! entry.on_event(&Event::Key(KeyEvent::new(KeyCode::Char('i'))));
//! assert_eq!(entry.text(), "hi");
//! ```

use std::borrow::Cow;
use std::fmt;

use celltui_core::event::{Event, KeyCode, KeyEvent};
use celltui_core::geometry::Size;
use celltui_layout::{SizePolicies, SizePolicy};
use celltui_render::Painter;
use celltui_text::{display_width, last_grapheme_start};

use crate::{Widget, cells};

/// Hint used by [`Entry::new`].
pub const DEFAULT_HINT: Size = Size::new(10, 1);

/// Style name used by [`Entry::new`].
pub const DEFAULT_STYLE: &str = "entry";

const FOCUSED_SUFFIX: &str = ".focused";

type Callback = Box<dyn FnMut(&Entry)>;

/// A single-line text input widget.
pub struct Entry {
    text: String,
    focused: bool,
    hint: Size,
    size: Size,
    policies: SizePolicies,
    style_name: Cow<'static, str>,
    on_change: Option<Callback>,
    on_submit: Option<Callback>,
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("text", &self.text)
            .field("focused", &self.focused)
            .field("hint", &self.hint)
            .field("size", &self.size)
            .field("policies", &self.policies)
            .field("style_name", &self.style_name)
            .field("on_change", &self.on_change.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

impl Entry {
    /// Create an empty, unfocused entry with a 10x1 hint.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            focused: false,
            hint: DEFAULT_HINT,
            size: Size::ZERO,
            policies: SizePolicies::MINIMUM,
            style_name: Cow::Borrowed(DEFAULT_STYLE),
            on_change: None,
            on_submit: None,
        }
    }

    /// Set the initial text (builder).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the preferred width in cells (builder). Height stays one row.
    #[must_use]
    pub fn with_hint_width(mut self, width: u16) -> Self {
        self.hint.width = width;
        self
    }

    /// Set the base style name (builder). Focus appends `".focused"`.
    #[must_use]
    pub fn with_style_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.style_name = name.into();
        self
    }

    /// Set the size policies (builder).
    #[must_use]
    pub fn with_size_policy(mut self, horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        self.policies = SizePolicies::new(horizontal, vertical);
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Does not fire `on_change`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the entry accepts input.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give or take focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Register the callback fired after every edit, replacing any previous one.
    pub fn on_changed(&mut self, callback: impl FnMut(&Entry) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Register the callback fired on Enter, replacing any previous one.
    pub fn on_submit(&mut self, callback: impl FnMut(&Entry) + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    /// The brush name `draw` paints with: the base style, plus `".focused"`
    /// while focused.
    pub fn style_name(&self) -> Cow<'_, str> {
        if self.focused {
            Cow::Owned(format!("{}{FOCUSED_SUFFIX}", self.style_name))
        } else {
            Cow::Borrowed(&self.style_name)
        }
    }

    /// Column where the cursor is drawn.
    fn cursor_x(&self) -> u16 {
        cells(display_width(&self.text))
    }

    fn insert_char(&mut self, c: char) {
        self.text.push(c);
        self.notify_change();
    }

    /// Remove the last grapheme cluster. Returns `false` when empty.
    fn delete_char_back(&mut self) -> bool {
        let Some(start) = last_grapheme_start(&self.text) else {
            return false;
        };
        self.text.truncate(start);
        self.notify_change();
        true
    }

    fn notify_change(&mut self) {
        // The slot is empty while the callback runs; it only sees `&Entry`
        // so it cannot register a replacement.
        if let Some(mut callback) = self.on_change.take() {
            callback(self);
            self.on_change = Some(callback);
        }
    }

    fn notify_submit(&mut self) {
        if let Some(mut callback) = self.on_submit.take() {
            callback(self);
            self.on_submit = Some(callback);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.notify_submit();
                true
            }
            KeyCode::Backspace => self.delete_char_back(),
            _ => match key.plain_char() {
                Some(c) if !c.is_control() => {
                    self.insert_char(c);
                    true
                }
                _ => false,
            },
        }
    }
}

impl Widget for Entry {
    fn size_hint(&self) -> Size {
        self.hint
    }

    fn min_size(&self) -> Size {
        self.hint
    }

    fn size_policy(&self) -> SizePolicies {
        self.policies
    }

    fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.policies = SizePolicies::new(horizontal, vertical);
    }

    fn resize(&mut self, offered: Size) {
        self.size = self.policies.resolve(self.hint, offered);
        celltui_core::debug!(
            widget = "Entry",
            offered_width = offered.width,
            offered_height = offered.height,
            width = self.size.width,
            height = self.size.height,
            "resize"
        );
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let _span = celltui_core::debug_span!(
            "widget_draw",
            widget = "Entry",
            width = self.size.width,
            focused = self.focused
        )
        .entered();

        let width = self.size.width;
        let style = self.style_name();
        painter.with_styled_brush(&style, |p| {
            p.fill_rect(0, 0, width, 1);
            p.draw_text(0, 0, &self.text);
            if self.focused {
                p.draw_cursor(self.cursor_x(), 0);
            }
        });
    }

    fn on_event(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }
        let Event::Key(key) = event else {
            return false;
        };
        if !key.is_press() {
            return false;
        }
        let consumed = self.handle_key(key);
        if consumed {
            celltui_core::trace!(widget = "Entry", code = ?key.code, len = self.text.len(), "key consumed");
        }
        consumed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use celltui_core::event::{KeyEventKind, Modifiers};
    use celltui_core::geometry::Rect;
    use celltui_render::Frame;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    fn ch(c: char) -> Event {
        key(KeyCode::Char(c))
    }

    fn focused() -> Entry {
        let mut entry = Entry::new();
        entry.set_focused(true);
        entry
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(&Entry) + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, move |_: &Entry| c.set(c.get() + 1))
    }

    #[test]
    fn test_new_entry_defaults() {
        let entry = Entry::new();
        assert_eq!(entry.text(), "");
        assert!(!entry.is_focused());
        assert_eq!(entry.size_hint(), Size::new(10, 1));
        assert_eq!(entry.min_size(), entry.size_hint());
        assert_eq!(entry.size(), Size::ZERO);
        assert_eq!(entry.size_policy(), SizePolicies::MINIMUM);
    }

    #[test]
    fn test_builders() {
        let entry = Entry::new()
            .with_text("abc")
            .with_hint_width(24)
            .with_style_name("search")
            .with_size_policy(SizePolicy::Expanding, SizePolicy::Minimum);
        assert_eq!(entry.text(), "abc");
        assert_eq!(entry.size_hint(), Size::new(24, 1));
        assert_eq!(entry.style_name(), "search");
        assert_eq!(entry.size_policy().horizontal, SizePolicy::Expanding);
    }

    #[test]
    fn test_type_then_backspace() {
        let mut entry = focused();
        let (changes, on_change) = counter();
        let (submits, on_submit) = counter();
        entry.on_changed(on_change);
        entry.on_submit(on_submit);

        assert!(entry.on_event(&ch('a')));
        assert!(entry.on_event(&ch('b')));
        assert!(entry.on_event(&key(KeyCode::Backspace)));

        assert_eq!(entry.text(), "a");
        assert_eq!(changes.get(), 3);
        assert_eq!(submits.get(), 0);
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let mut entry = Entry::new();
        let (changes, on_change) = counter();
        entry.on_changed(on_change);

        assert!(!entry.on_event(&ch('x')));
        assert!(!entry.on_event(&key(KeyCode::Enter)));
        assert_eq!(entry.text(), "");
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn test_space_appends() {
        let mut entry = focused().with_text("a");
        assert!(entry.on_event(&ch(' ')));
        assert_eq!(entry.text(), "a ");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut entry = focused();
        let (changes, on_change) = counter();
        entry.on_changed(on_change);

        assert!(!entry.on_event(&key(KeyCode::Backspace)));
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut entry = focused().with_text("ok\u{1F44D}\u{1F3FD}");
        entry.on_event(&key(KeyCode::Backspace));
        assert_eq!(entry.text(), "ok");

        let mut entry = focused().with_text("cafe\u{0301}");
        entry.on_event(&key(KeyCode::Backspace));
        assert_eq!(entry.text(), "caf");
    }

    #[test]
    fn test_enter_submits_without_editing() {
        let mut entry = focused().with_text("query");
        let (changes, on_change) = counter();
        let seen = Rc::new(std::cell::RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        entry.on_changed(on_change);
        entry.on_submit(move |e| *sink.borrow_mut() = e.text().to_owned());

        assert!(entry.on_event(&key(KeyCode::Enter)));
        assert_eq!(entry.text(), "query");
        assert_eq!(*seen.borrow(), "query");
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn test_callback_sees_mutated_text() {
        let mut entry = focused().with_text("a");
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        entry.on_changed(move |e| sink.borrow_mut().push(e.text().to_owned()));

        entry.on_event(&ch('b'));
        entry.on_event(&key(KeyCode::Backspace));
        assert_eq!(*seen.borrow(), vec!["ab".to_owned(), "a".to_owned()]);
    }

    #[test]
    fn test_control_keys_are_ignored() {
        let mut entry = focused().with_text("x");
        for code in [
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Tab,
            KeyCode::Escape,
            KeyCode::F(1),
            KeyCode::Delete,
        ] {
            assert!(!entry.on_event(&key(code)), "{code:?} was consumed");
        }
        assert_eq!(entry.text(), "x");
    }

    #[test]
    fn test_chords_are_ignored() {
        let mut entry = focused();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a')).with_modifiers(Modifiers::CTRL);
        let alt_b = KeyEvent::new(KeyCode::Char('b')).with_modifiers(Modifiers::ALT);
        assert!(!entry.on_event(&Event::Key(ctrl_a)));
        assert!(!entry.on_event(&Event::Key(alt_b)));
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_shift_char_is_plain() {
        let mut entry = focused();
        let upper = KeyEvent::new(KeyCode::Char('A')).with_modifiers(Modifiers::SHIFT);
        assert!(entry.on_event(&Event::Key(upper)));
        assert_eq!(entry.text(), "A");
    }

    #[test]
    fn test_release_is_ignored_repeat_is_not() {
        let mut entry = focused();
        let release = KeyEvent::new(KeyCode::Char('a')).with_kind(KeyEventKind::Release);
        let repeat = KeyEvent::new(KeyCode::Char('a')).with_kind(KeyEventKind::Repeat);
        assert!(!entry.on_event(&Event::Key(release)));
        assert!(entry.on_event(&Event::Key(repeat)));
        assert_eq!(entry.text(), "a");
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let mut entry = focused();
        assert!(!entry.on_event(&Event::Paste("pasted".into())));
        assert!(!entry.on_event(&Event::Resize { width: 80, height: 24 }));
        assert!(!entry.on_event(&Event::Focus(false)));
        assert!(!entry.on_event(&Event::Tick));
        assert_eq!(entry.text(), "");
        assert!(entry.is_focused());
    }

    #[test]
    fn test_set_text_does_not_notify() {
        let mut entry = focused();
        let (changes, on_change) = counter();
        entry.on_changed(on_change);
        entry.set_text("replaced");
        assert_eq!(entry.text(), "replaced");
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn test_resize_minimum_keeps_hint() {
        let mut entry = Entry::new();
        entry.resize(Size::new(80, 24));
        assert_eq!(entry.size(), entry.size_hint());
        entry.resize(Size::new(3, 0));
        assert_eq!(entry.size(), entry.size_hint());
    }

    #[test]
    fn test_resize_expanding_takes_offer() {
        let mut entry = Entry::new();
        entry.set_size_policy(SizePolicy::Expanding, SizePolicy::Expanding);
        entry.resize(Size::new(80, 24));
        assert_eq!(entry.size(), Size::new(80, 24));
    }

    #[test]
    fn test_style_name_tracks_focus() {
        let mut entry = Entry::new();
        assert_eq!(entry.style_name(), "entry");
        entry.set_focused(true);
        assert_eq!(entry.style_name(), "entry.focused");
    }

    #[test]
    fn test_draw_unfocused() {
        let mut entry = Entry::new().with_text("hi");
        entry.resize(Size::new(0, 0));

        let mut frame = Frame::new(12, 1);
        entry.draw(&mut frame.painter(Rect::from_size(10, 1)));

        assert_eq!(frame.buffer.row_text(0).trim_end(), "hi");
        assert_eq!(frame.buffer.brush_at(0, 0), Some("entry"));
        assert_eq!(frame.buffer.brush_at(9, 0), Some("entry"));
        assert_eq!(frame.buffer.brush_at(10, 0), None);
        assert_eq!(frame.cursor_position, None);
    }

    #[test]
    fn test_draw_focused_places_cursor_after_text() {
        let mut entry = focused().with_text("a\u{4E2D}");
        entry.resize(Size::ZERO);

        let mut frame = Frame::new(10, 1);
        entry.draw(&mut frame.painter(Rect::from_size(10, 1)));

        assert_eq!(frame.buffer.brush_at(5, 0), Some("entry.focused"));
        assert_eq!(frame.cursor_position, Some((3, 0)));
    }

    #[test]
    fn test_cursor_past_edge_is_not_drawn() {
        let mut entry = focused().with_text("0123456789");
        entry.resize(Size::ZERO);

        let mut frame = Frame::new(10, 1);
        entry.draw(&mut frame.painter(Rect::from_size(10, 1)));

        assert_eq!(frame.buffer.row_text(0), "0123456789");
        assert_eq!(frame.cursor_position, None);
    }
}
