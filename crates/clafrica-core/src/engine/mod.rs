//! The two splice entry points and their result contract.
//!
//! Both are pure functions of `(table, text, caret)`: no I/O, no shared
//! state, bounded work per call. The caller owns writing the returned text
//! and caret back into the widget, and suppressing the widget's default
//! handling of a space keypress that produced a commit.

mod matcher;

pub use matcher::match_token;

use tracing::{debug, debug_span};

use crate::table::ReplacementTable;
use crate::text::{char_len, split_at_char, trailing_token};

/// A rewrite produced by one of the entry points.
///
/// `caret` is a character offset into `text`, placed just after the spliced
/// replacement so following keystrokes append after it, never inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub text: String,
    pub caret: usize,
}

/// What a space-triggered commit does with the space keypress it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceHandling {
    /// Append the space to the replacement; the caller suppresses the
    /// widget's own insertion.
    #[default]
    Insert,
    /// Commit the replacement only; the caller decides what happens to the
    /// space itself (end-of-field commits, custom boundary keys).
    Omit,
}

/// Word-boundary commit, fired when the keypress that produced the edit was
/// the space character.
///
/// The token left of the caret is matched with the ambiguity guard off: a
/// space is an unambiguous word boundary, so a code matching at the token
/// end is final. Returns `None` when nothing changed.
pub fn apply_on_space(
    table: &ReplacementTable,
    text: &str,
    caret: usize,
    space: SpaceHandling,
) -> Option<EditResult> {
    let _span = debug_span!("apply_on_space", caret).entered();

    let caret = caret.min(char_len(text));
    let (before, after) = split_at_char(text, caret);
    let token = trailing_token(before);
    if token.is_empty() {
        return None;
    }

    let replacement = match_token(table, token, false);
    if replacement == token {
        return None;
    }
    debug!(token, replacement = %replacement, "space commit");

    let stem = &before[..before.len() - token.len()];
    let mut new_before = String::with_capacity(stem.len() + replacement.len() + 1);
    new_before.push_str(stem);
    new_before.push_str(&replacement);
    if space == SpaceHandling::Insert {
        new_before.push(' ');
    }

    let caret = char_len(&new_before);
    Some(EditResult {
        text: new_before + after,
        caret,
    })
}

/// Streaming rewrite, fired on every content change that is not itself a
/// space commit.
///
/// The ambiguity guard is on: a chunk that is still a strict prefix of a
/// longer code is never collapsed mid-word, otherwise each keystroke would
/// re-trigger the shorter replacement and the longer code could never be
/// typed. Returns `None` when nothing changed.
pub fn apply_on_change(table: &ReplacementTable, text: &str, caret: usize) -> Option<EditResult> {
    let _span = debug_span!("apply_on_change", caret).entered();

    let caret = caret.min(char_len(text));
    let (left, right) = split_at_char(text, caret);
    let token = trailing_token(left);
    if token.is_empty() {
        return None;
    }

    let replacement = match_token(table, token, true);
    if replacement == token {
        return None;
    }
    debug!(token, replacement = %replacement, "streaming rewrite");

    let stem = &left[..left.len() - token.len()];
    let new_left = format!("{stem}{replacement}");
    let caret = char_len(&new_left);
    Some(EditResult {
        text: new_left + right,
        caret,
    })
}
