// maskfmt-core/src/live_edit/field.rs
//! The contract between the live-edit controller and the host text field.

/// A text field the controller can observe and rewrite.
///
/// Positions are char indices.
pub trait EditableText {
    /// The current content of the field.
    fn text(&self) -> &str;

    /// Replaces the whole content.
    ///
    /// Hosts are expected to raise their usual change notifications for this
    /// replacement, synchronously or not; the controller recognizes them as
    /// its own edit.
    fn replace_all(&mut self, text: &str);

    /// Moves the caret.
    fn set_cursor(&mut self, position: usize);
}

/// Describes one change of a field: `removed` chars starting at `start`
/// were replaced by `inserted` chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeRange {
    pub start: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl ChangeRange {
    pub fn new(start: usize, removed: usize, inserted: usize) -> Self {
        Self {
            start,
            removed,
            inserted,
        }
    }
}

/// Work the host must run after the current update has completed, once the
/// field's layout and selection have settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "deferred actions must be scheduled by the host"]
pub enum DeferredAction {
    /// Place the caret at `position`.
    MoveCursor { position: usize },
}

impl DeferredAction {
    /// Runs the action against `field`.
    pub fn run(self, field: &mut dyn EditableText) {
        match self {
            DeferredAction::MoveCursor { position } => field.set_cursor(position),
        }
    }
}
