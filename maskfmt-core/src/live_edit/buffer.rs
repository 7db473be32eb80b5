// maskfmt-core/src/live_edit/buffer.rs
//! An in-memory text field.
//!
//! [`TextBuffer`] plays the host role for headless use (the `type` command of
//! the CLI, tests): it applies keystrokes, raises the three change
//! notifications synchronously, including for the controller's own
//! rewrites, and runs deferred actions once an update has completed.

use std::collections::VecDeque;
use std::rc::Rc;

use super::field::{ChangeRange, DeferredAction, EditableText};
use super::LiveEditController;

#[derive(Debug, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
    controller: Option<Rc<LiveEditController>>,
    deferred: VecDeque<DeferredAction>,
}

impl TextBuffer {
    /// A plain buffer without formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer observed by `controller`. The controller is attached right
    /// away, so a mandatory prefix is already in place.
    pub fn with_controller(controller: Rc<LiveEditController>) -> Self {
        let mut buffer = Self {
            controller: Some(Rc::clone(&controller)),
            ..Self::default()
        };
        if let Some(action) = controller.attach(&mut buffer) {
            buffer.deferred.push_back(action);
        }
        buffer.run_deferred();
        buffer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn controller(&self) -> Option<&LiveEditController> {
        self.controller.as_deref()
    }

    /// Inserts user input at the caret.
    pub fn insert(&mut self, typed: &str) {
        let inserted = match &self.controller {
            Some(controller) => controller.filter_input(typed),
            None => typed,
        }
        .to_string();
        if inserted.is_empty() {
            return;
        }
        self.splice(self.cursor, 0, &inserted);
        self.run_deferred();
    }

    /// Types `keys` one character at a time.
    pub fn type_str(&mut self, keys: &str) {
        let mut key = [0u8; 4];
        for ch in keys.chars() {
            self.insert(ch.encode_utf8(&mut key));
        }
    }

    /// Deletes the character before the caret.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.splice(self.cursor - 1, 1, "");
        self.run_deferred();
    }

    /// Runs the actions queued during the last update, in order.
    pub fn run_deferred(&mut self) {
        while let Some(action) = self.deferred.pop_front() {
            action.run(self);
        }
    }

    fn splice(&mut self, start: usize, removed: usize, inserted: &str) {
        let range = ChangeRange::new(start, removed, inserted.chars().count());
        let controller = self.controller.clone();

        if let Some(controller) = &controller {
            controller.before_text_changed(&self.text, range);
        }
        let begin = byte_offset(&self.text, start);
        let end = byte_offset(&self.text, start + removed);
        self.text.replace_range(begin..end, inserted);
        self.cursor = start + range.inserted;

        if let Some(controller) = &controller {
            controller.on_text_changed(&self.text, range);
            if let Some(action) = controller.after_text_changed(self) {
                self.deferred.push_back(action);
            }
        }
    }
}

impl EditableText for TextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace_all(&mut self, text: &str) {
        let text = match &self.controller {
            Some(controller) => controller.filter_input(text),
            None => text,
        }
        .to_string();
        let removed = self.text.chars().count();
        self.splice(0, removed, &text);
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.text.chars().count());
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(index, _)| index)
}
