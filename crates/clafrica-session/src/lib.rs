//! Per-surface adapter between text-input widgets and the transliteration
//! core.
//!
//! One `FieldSession` per UI surface; any number of sessions share one
//! `ReplacementTable` behind an `Arc`. The session holds the user-facing
//! enable toggle and the space-commit behavior; everything else delegates
//! to the pure entry points in `clafrica-core`.

mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use clafrica_core::engine::{apply_on_change, apply_on_space};
use clafrica_core::table::ReplacementTable;

pub use clafrica_core::engine::{EditResult, SpaceHandling};
pub use types::{EditEvent, EditTrigger, EventResponse};

/// Stateful wrapper for one text surface.
///
/// The table is read-only after construction, so sessions across threads
/// or widgets can share one reference without coordination. Hot reload is
/// a rebuild plus [`swap_table`](Self::swap_table).
pub struct FieldSession {
    table: Arc<ReplacementTable>,
    enabled: bool,
    space: SpaceHandling,
}

impl FieldSession {
    pub fn new(table: Arc<ReplacementTable>) -> Self {
        Self {
            table,
            enabled: true,
            space: SpaceHandling::Insert,
        }
    }

    /// User-facing toggle. A disabled session passes every event through.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while the table is empty (load pending or failed). Events
    /// still flow, each one a pass-through; the caller owns surfacing the
    /// degraded state to the user.
    pub fn is_inert(&self) -> bool {
        self.table.is_empty()
    }

    /// Swap in a freshly built table. Sessions sharing the old reference
    /// keep it until they swap too.
    pub fn swap_table(&mut self, table: Arc<ReplacementTable>) {
        debug!(entries = table.len(), "table swapped");
        self.table = table;
    }

    pub fn set_space_handling(&mut self, space: SpaceHandling) {
        self.space = space;
    }

    pub fn table(&self) -> &Arc<ReplacementTable> {
        &self.table
    }

    /// Process one edit event from the wired widget.
    pub fn handle_event(&self, event: &EditEvent) -> EventResponse {
        if !self.enabled {
            return EventResponse::pass();
        }

        let caret = event
            .caret
            .unwrap_or_else(|| event.text.chars().count());

        match event.trigger {
            EditTrigger::SpaceKey => {
                match apply_on_space(&self.table, &event.text, caret, self.space) {
                    Some(edit) => EventResponse::rewrite(true, edit),
                    None => EventResponse::pass(),
                }
            }
            EditTrigger::ContentChanged => {
                match apply_on_change(&self.table, &event.text, caret) {
                    // Content is already in the widget; nothing to suppress.
                    Some(edit) => EventResponse::rewrite(false, edit),
                    None => EventResponse::pass(),
                }
            }
        }
    }
}
