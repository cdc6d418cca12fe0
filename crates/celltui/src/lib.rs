#![forbid(unsafe_code)]

//! celltui public facade crate.
//!
//! Re-exports the widget core from the internal crates, a small prelude,
//! and a headless snapshot helper for tests and tooling.
//!
//! ```
//! use celltui::prelude::*;
//!
//! let mut label = Label::new("hello world").with_word_wrap(true);
//! label.set_size_policy(SizePolicy::Expanding, SizePolicy::Minimum);
//! label.resize(Size::new(5, 0));
//!
//! let mut out = Vec::new();
//! celltui::write_snapshot(&label, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "hello\nworld\n");
//! ```

use std::fmt;
use std::io::Write;

// --- Core re-exports -------------------------------------------------------

pub use celltui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use celltui_core::geometry::{Rect, Size};

// --- Layout, render, widget re-exports ------------------------------------

pub use celltui_layout::{SizePolicies, SizePolicy};
pub use celltui_render::{Buffer, Frame, FramePainter, Painter};
pub use celltui_text::{WrapOptions, display_width, height_for_width, word_wrap};
pub use celltui_widgets::{Entry, Label, Widget, draw_at, render_to_frame};

#[cfg(feature = "tracing-json")]
pub use celltui_core::logging::init_json_subscriber;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for celltui.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing output.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for celltui APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Snapshots ------------------------------------------------------------

/// Render `widget` at its resolved size and return the plain text, one
/// line per row with trailing blanks trimmed.
pub fn snapshot(widget: &dyn Widget) -> String {
    render_to_frame(widget).buffer.to_plain_text()
}

/// Write [`snapshot`] to `out`, newline-terminated.
///
/// A widget that has not been resized has zero size and writes a lone
/// newline.
pub fn write_snapshot<W: Write + ?Sized>(widget: &dyn Widget, out: &mut W) -> Result<()> {
    let text = snapshot(widget);
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Entry, Error, Event, Frame, KeyCode, KeyEvent, Label, Modifiers, Painter, Rect, Result,
        Size, SizePolicies, SizePolicy, Widget,
    };

    pub use crate::{core, layout, render, text, widgets};
}

pub use celltui_core as core;
pub use celltui_layout as layout;
pub use celltui_render as render;
pub use celltui_text as text;
pub use celltui_widgets as widgets;
