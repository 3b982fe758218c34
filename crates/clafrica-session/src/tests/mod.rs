
use std::sync::Arc;

use clafrica_core::table::ReplacementTable;

use super::{EditEvent, FieldSession};

pub(super) fn make_test_table() -> Arc<ReplacementTable> {
    let raw = [
        ("a~", "ã"),
        ("az", "ɑ"),
        ("az%", "ɑ́"),
        ("az?", "ɑ̀"),
        ("ez", "ɛ"),
        ("e%", "é"),
        ("n?", "ǹ"),
    ];
    Arc::new(ReplacementTable::from_entries(
        raw.map(|(k, v)| (k.to_string(), v.to_string())),
    ))
}

/// Simulate a widget: feed `input` one keystroke at a time. Spaces go
/// through the commit path like the real wiring does; an unconsumed space
/// falls back to the widget's default insertion, after which the content
/// change fires as usual.
pub(super) fn type_text(session: &FieldSession, input: &str) -> (String, usize) {
    let mut text = String::new();
    let mut caret = 0usize;
    for ch in input.chars() {
        if ch == ' ' {
            let resp = session.handle_event(&EditEvent::space_key(text.clone(), Some(caret)));
            match resp.edit {
                Some(edit) => {
                    assert!(resp.consumed, "a space commit must consume the keypress");
                    text = edit.text;
                    caret = edit.caret;
                    continue;
                }
                None => insert_char(&mut text, &mut caret, ch),
            }
        } else {
            insert_char(&mut text, &mut caret, ch);
        }
        let resp = session.handle_event(&EditEvent::content_changed(text.clone(), Some(caret)));
        if let Some(edit) = resp.edit {
            assert!(!resp.consumed, "content changes have nothing to suppress");
            text = edit.text;
            caret = edit.caret;
        }
    }
    (text, caret)
}

fn insert_char(text: &mut String, caret: &mut usize, ch: char) {
    let byte = text
        .char_indices()
        .nth(*caret)
        .map(|(b, _)| b)
        .unwrap_or(text.len());
    text.insert(byte, ch);
    *caret += 1;
}
