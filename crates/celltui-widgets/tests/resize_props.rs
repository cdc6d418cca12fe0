#![forbid(unsafe_code)]

//! Property tests for size negotiation.

use celltui_core::geometry::Size;
use celltui_layout::SizePolicy;
use celltui_widgets::{Entry, Label, Widget};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = SizePolicy> {
    prop_oneof![Just(SizePolicy::Minimum), Just(SizePolicy::Expanding)]
}

fn offer() -> impl Strategy<Value = Size> {
    (0u16..200, 0u16..60).prop_map(|(w, h)| Size::new(w, h))
}

fn widgets(text: &str, wrap: bool) -> Vec<Box<dyn Widget>> {
    vec![
        Box::new(Entry::new().with_text(text)),
        Box::new(Label::new(text).with_word_wrap(wrap)),
    ]
}

proptest! {
    #[test]
    fn minimum_entry_reports_hint(hint in 0u16..100, offered in offer()) {
        let mut entry = Entry::new().with_hint_width(hint);
        entry.resize(offered);
        prop_assert_eq!(entry.size(), entry.size_hint());
        prop_assert_eq!(entry.size(), Size::new(hint, 1));
    }

    #[test]
    fn expanding_takes_the_offer(text in "[a-z ]{0,40}", wrap in any::<bool>(), offered in offer()) {
        for mut w in widgets(&text, wrap) {
            w.set_size_policy(SizePolicy::Expanding, SizePolicy::Expanding);
            w.resize(offered);
            prop_assert_eq!(w.size(), offered);
        }
    }

    #[test]
    fn resize_is_idempotent(
        text in "[a-z \n]{0,60}",
        wrap in any::<bool>(),
        h in policy(),
        v in policy(),
        offered in offer(),
    ) {
        for mut w in widgets(&text, wrap) {
            w.set_size_policy(h, v);
            w.resize(offered);
            let first = w.size();
            w.resize(offered);
            prop_assert_eq!(w.size(), first);
        }
    }

    #[test]
    fn label_height_tracks_wrapped_width(text in "[a-z ]{1,60}", width in 1u16..30) {
        let mut label = Label::new(text.as_str()).with_word_wrap(true);
        label.set_size_policy(SizePolicy::Expanding, SizePolicy::Minimum);
        label.resize(Size::new(width, 0));
        let expected = celltui_text::height_for_width(&text, usize::from(width));
        prop_assert_eq!(usize::from(label.size().height), expected);
        prop_assert_eq!(label.size_hint(), label.size());
    }
}
