use std::sync::Arc;

use clafrica_core::engine::match_token;
use clafrica_core::table::ReplacementTable;
use clafrica_session::{EditEvent, FieldSession};

/// Commit-mode conversion of one line: every token is final, whitespace is
/// carried through untouched.
pub fn convert_line(table: &ReplacementTable, line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut token = String::new();
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !token.is_empty() {
                out.push_str(&match_token(table, &token, false));
                token.clear();
            }
            out.push(ch);
        } else {
            token.push(ch);
        }
    }
    if !token.is_empty() {
        out.push_str(&match_token(table, &token, false));
    }
    out
}

pub fn convert(table: &ReplacementTable, lines: &[String]) {
    for line in lines {
        println!("{}", convert_line(table, line));
    }
}

/// Replay `text` as a live typing session, printing the field after every
/// keystroke. Spaces go through the commit path like the widget wiring
/// does; an unconsumed space falls back to plain insertion.
pub fn replay(table: ReplacementTable, text: &str) {
    let session = FieldSession::new(Arc::new(table));
    if session.is_inert() {
        eprintln!("(empty map: transliteration inactive)");
    }

    let mut field = String::new();
    let mut caret = 0usize;
    for ch in text.chars() {
        let committed = ch == ' '
            && match session
                .handle_event(&EditEvent::space_key(field.clone(), Some(caret)))
                .edit
            {
                Some(edit) => {
                    field = edit.text;
                    caret = edit.caret;
                    true
                }
                None => false,
            };

        if !committed {
            insert_char(&mut field, &mut caret, ch);
            if let Some(edit) = session
                .handle_event(&EditEvent::content_changed(field.clone(), Some(caret)))
                .edit
            {
                field = edit.text;
                caret = edit.caret;
            }
        }

        println!("{:>6}  {}", format!("{ch:?}"), with_caret(&field, caret));
    }
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

fn with_caret(field: &str, caret: usize) -> String {
    let byte = field
        .char_indices()
        .nth(caret)
        .map(|(b, _)| b)
        .unwrap_or(field.len());
    format!("{}|{}", &field[..byte], &field[byte..])
}
