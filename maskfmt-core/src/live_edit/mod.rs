// maskfmt-core/src/live_edit/mod.rs
//! Live formatting of a text field while the user types.
//!
//! [`LiveEditController`] observes the change notifications of one field
//! (`before` → `during` → `after`), and on every *after* notification that
//! was caused by the user it extracts the clean value, formats it again and
//! writes the result back. Its own write raises notifications too; those are
//! recognized through the session's [`EditState`] and ignored, so formatting
//! never recurses.
//!
//! The controller is single-threaded and meant to be driven from the host's
//! event loop. All notification methods take `&self` so a host may call back
//! into the controller from inside [`EditableText::replace_all`].

pub mod buffer;
pub mod field;
pub mod filter;
pub mod session;

use log::{debug, trace, warn};
use std::cell::RefCell;
use std::sync::Arc;

use crate::config::MaskSpec;
use crate::diagnostics::loggable;
use crate::formatter::Formatter;

pub use buffer::TextBuffer;
pub use field::{ChangeRange, DeferredAction, EditableText};
pub use filter::filter_inserted;
pub use session::{EditSession, EditState};

#[derive(Debug)]
pub struct LiveEditController {
    formatter: Arc<Formatter>,
    session: RefCell<Option<EditSession>>,
    formatted: RefCell<String>,
}

impl LiveEditController {
    /// Creates a detached controller. A formatter shared with other
    /// controllers must not be mutated while they are attached.
    pub fn new(formatter: impl Into<Arc<Formatter>>) -> Self {
        Self {
            formatter: formatter.into(),
            session: RefCell::new(None),
            formatted: RefCell::new(String::new()),
        }
    }

    /// A controller for `mask` with an inferred placeholder.
    pub fn for_mask(mask: impl Into<String>) -> Self {
        Self::new(Formatter::for_mask(mask))
    }

    pub fn for_mask_with_symbol(mask: impl Into<String>, symbol: char) -> Self {
        Self::new(Formatter::new(MaskSpec::new().mask(mask).symbol(symbol)))
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Starts observing `field` and formats its current content, which shows
    /// a mandatory prefix straight away on an empty field.
    pub fn attach(&self, field: &mut dyn EditableText) -> Option<DeferredAction> {
        match self.session.try_borrow_mut() {
            Ok(mut session) => *session = Some(EditSession::new()),
            Err(_) => {
                warn!(target: "maskfmt_core::live_edit", "attach() called during a notification; ignored");
                return None;
            }
        }
        debug!(target: "maskfmt_core::live_edit", "Attached to field");
        self.after_text_changed(field)
    }

    /// Stops observing. Notifications received afterwards are ignored.
    pub fn detach(&self) {
        match self.session.try_borrow_mut() {
            Ok(mut session) => *session = None,
            Err(_) => warn!(target: "maskfmt_core::live_edit", "detach() called during a notification; ignored"),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// The session state, `None` while detached.
    pub fn state(&self) -> Option<EditState> {
        self.session.borrow().as_ref().map(EditSession::state)
    }

    /// The text the controller last wrote (or accepted) as formatted.
    pub fn formatted_value(&self) -> String {
        self.formatted.borrow().clone()
    }

    /// The clean value behind [`LiveEditController::formatted_value`].
    pub fn clean_value(&self) -> String {
        self.formatter.clear(&self.formatted.borrow())
    }

    /// Notification before the field changes. Only traced.
    pub fn before_text_changed(&self, old: &str, range: ChangeRange) {
        if self.is_idle() {
            trace!(target: "maskfmt_core::live_edit", "before change {:?} of {}", range, loggable(old));
        }
    }

    /// Notification while the field changes. Only traced.
    pub fn on_text_changed(&self, new: &str, range: ChangeRange) {
        if self.is_idle() {
            trace!(target: "maskfmt_core::live_edit", "during change {:?} into {}", range, loggable(new));
        }
    }

    /// Notification after the field changed; this is where formatting happens.
    ///
    /// Returns the cursor move the host must schedule once the current update
    /// has completed, if any.
    pub fn after_text_changed(&self, field: &mut dyn EditableText) -> Option<DeferredAction> {
        let session_ref = self.session.borrow();
        let Some(session) = session_ref.as_ref() else {
            trace!(target: "maskfmt_core::live_edit", "Not attached; notification ignored");
            return None;
        };
        if !session.is_idle() {
            trace!(target: "maskfmt_core::live_edit", "Self-triggered notification suppressed");
            return None;
        }
        self.reformat(session, field)
    }

    /// Filters a user insertion. Only active while attached and idle, so
    /// literal mask characters written by the controller are never rejected.
    pub fn filter_input<'a>(&self, inserted: &'a str) -> &'a str {
        if self.is_idle() {
            filter_inserted(inserted)
        } else {
            inserted
        }
    }

    /// Attached and not applying its own edit.
    fn is_idle(&self) -> bool {
        self.session
            .borrow()
            .as_ref()
            .is_some_and(EditSession::is_idle)
    }

    fn reformat(&self, session: &EditSession, field: &mut dyn EditableText) -> Option<DeferredAction> {
        let current = field.text().to_string();
        let clean = self.formatter.clear(&current);
        let spec = self.formatter.spec();

        let formatted = session.apply_self_edit(|| {
            let mut formatted = self.formatter.format(&clean);
            if formatted.is_empty() {
                if let Some(prefix) = spec.necessary_prefix() {
                    formatted = prefix.to_string();
                }
            }
            if formatted != current {
                field.replace_all(&formatted);
            }
            formatted
        });
        debug!(
            target: "maskfmt_core::live_edit",
            "Reformatted {} as {}",
            loggable(&current),
            loggable(&formatted)
        );
        *self.formatted.borrow_mut() = formatted;

        let prefix = spec.necessary_prefix()?;
        if field.text() == prefix {
            Some(DeferredAction::MoveCursor {
                position: prefix.chars().count(),
            })
        } else {
            None
        }
    }
}
