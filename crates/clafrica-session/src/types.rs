use clafrica_core::engine::EditResult;

/// Which activation fired for an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    /// The keypress that produced the edit was the space key.
    SpaceKey,
    /// The field content changed for any other reason (insertion,
    /// deletion, paste).
    ContentChanged,
}

/// One edit event from a wired text widget.
#[derive(Debug, Clone)]
pub struct EditEvent {
    /// Full field content at the time of the event.
    pub text: String,
    /// Caret as a character offset. `None` when the widget cannot report
    /// one; resolves to end-of-text. Out-of-range offsets clamp.
    pub caret: Option<usize>,
    pub trigger: EditTrigger,
}

impl EditEvent {
    pub fn space_key(text: impl Into<String>, caret: Option<usize>) -> Self {
        Self {
            text: text.into(),
            caret,
            trigger: EditTrigger::SpaceKey,
        }
    }

    pub fn content_changed(text: impl Into<String>, caret: Option<usize>) -> Self {
        Self {
            text: text.into(),
            caret,
            trigger: EditTrigger::ContentChanged,
        }
    }
}

/// What the caller should do after handing the session an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the widget's default handling of the triggering keypress.
    /// Only ever true for a space commit that produced an edit: the engine
    /// injected the space itself, so the widget must not insert it again.
    pub consumed: bool,
    /// Rewrite to write back into the widget; `None` leaves it untouched.
    pub edit: Option<EditResult>,
}

impl EventResponse {
    pub(crate) fn pass() -> Self {
        Self {
            consumed: false,
            edit: None,
        }
    }

    pub(crate) fn rewrite(consumed: bool, edit: EditResult) -> Self {
        Self {
            consumed,
            edit: Some(edit),
        }
    }
}
