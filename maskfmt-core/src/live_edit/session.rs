// maskfmt-core/src/live_edit/session.rs
//! Per-field edit session holding the re-entrancy guard.

use std::cell::Cell;

/// State of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// Waiting for the next change made by the user.
    #[default]
    Idle,
    /// The controller is rewriting the field; notifications are its own.
    ApplyingSelfEdit,
}

/// One session per observed field. It is never shared between fields.
#[derive(Debug, Default)]
pub struct EditSession {
    state: Cell<EditState>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state.get()
    }

    pub fn is_idle(&self) -> bool {
        self.state.get() == EditState::Idle
    }

    /// Runs `edit` in [`EditState::ApplyingSelfEdit`].
    ///
    /// The state is entered before `edit` starts and goes back to
    /// [`EditState::Idle`] only after it returns (or unwinds).
    pub fn apply_self_edit<R>(&self, edit: impl FnOnce() -> R) -> R {
        self.state.set(EditState::ApplyingSelfEdit);
        let _reset = ResetToIdle(&self.state);
        edit()
    }
}

struct ResetToIdle<'a>(&'a Cell<EditState>);

impl Drop for ResetToIdle<'_> {
    fn drop(&mut self) {
        self.0.set(EditState::Idle);
    }
}
