// maskfmt-core/tests/live_edit_integration_tests.rs
use std::cell::RefCell;
use std::rc::Rc;

use maskfmt_core::{
    load_preset_by_name, ChangeRange, DeferredAction, EditState, EditableText, Formatter,
    LiveEditController, MaskSpec, TextBuffer,
};
use test_log::test; // For integrating with `env_logger` in tests

/// A host whose change events are delivered through a shared controller,
/// recording the session state seen by every nested notification.
struct RecordingField {
    text: String,
    cursor: usize,
    controller: Rc<LiveEditController>,
    seen_states: Rc<RefCell<Vec<Option<EditState>>>>,
}

impl EditableText for RecordingField {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace_all(&mut self, text: &str) {
        let range = ChangeRange::new(0, self.text.chars().count(), text.chars().count());
        let controller = Rc::clone(&self.controller);
        controller.before_text_changed(&self.text, range);
        self.text = text.to_string();
        self.cursor = range.inserted;
        controller.on_text_changed(&self.text, range);
        self.seen_states.borrow_mut().push(controller.state());
        let nested = controller.after_text_changed(self);
        assert_eq!(nested, None);
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position;
    }
}

#[test]
fn test_self_triggered_notifications_are_ignored() {
    let controller = Rc::new(LiveEditController::for_mask("### ###"));
    let seen_states = Rc::new(RefCell::new(Vec::new()));
    let mut field = RecordingField {
        text: String::new(),
        cursor: 0,
        controller: Rc::clone(&controller),
        seen_states: Rc::clone(&seen_states),
    };
    assert_eq!(controller.attach(&mut field), None);

    field.text = "123456".to_string();
    assert_eq!(controller.after_text_changed(&mut field), None);

    assert_eq!(field.text, "123 456");
    assert_eq!(field.cursor, 7);
    assert_eq!(*seen_states.borrow(), vec![Some(EditState::ApplyingSelfEdit)]);
    assert_eq!(controller.state(), Some(EditState::Idle));
}

#[test]
fn test_typing_a_phone_number_end_to_end() {
    let controller = Rc::new(LiveEditController::new(Formatter::new(
        load_preset_by_name("phone-ru").unwrap(),
    )));
    let mut buffer = TextBuffer::with_controller(Rc::clone(&controller));
    assert_eq!(buffer.text(), "+7 ");

    buffer.type_str("9307920000");
    assert_eq!(buffer.text(), "+7 (930) 792-00-00");
    assert_eq!(controller.formatted_value(), "+7 (930) 792-00-00");
    assert_eq!(controller.clean_value(), "9307920000");
}

#[test]
fn test_extra_keys_are_dropped_once_full() {
    let controller = Rc::new(LiveEditController::for_mask("##-##"));
    let mut buffer = TextBuffer::with_controller(Rc::clone(&controller));
    buffer.type_str("123456");
    assert_eq!(buffer.text(), "12-34");
}

#[test]
fn test_erasing_everything_restores_mandatory_prefix() {
    let controller = Rc::new(LiveEditController::new(Formatter::new(
        load_preset_by_name("phone-ru").unwrap(),
    )));
    let mut buffer = TextBuffer::with_controller(Rc::clone(&controller));
    buffer.type_str("930792");
    for _ in 0..20 {
        buffer.backspace();
    }
    assert_eq!(buffer.text(), "+7 ");
    assert_eq!(buffer.cursor(), 3);
    assert_eq!(controller.clean_value(), "");
}

#[test]
fn test_optional_prefix_disappears_when_empty() {
    let controller = Rc::new(LiveEditController::new(Formatter::new(
        MaskSpec::new()
            .mask("(###)")
            .mask_prefix("+1 ")
            .use_mask_prefix_necessarily(false),
    )));
    let mut buffer = TextBuffer::with_controller(Rc::clone(&controller));
    assert_eq!(buffer.text(), "");

    buffer.type_str("2");
    assert_eq!(buffer.text(), "+1 (2");
    buffer.backspace();
    buffer.backspace();
    buffer.backspace();
    assert_eq!(controller.clean_value(), "");
}

#[test]
fn test_deferred_action_moves_cursor_after_prefix() {
    let controller = LiveEditController::new(Formatter::new(load_preset_by_name("phone-ru").unwrap()));
    let mut field = TextBuffer::new();
    let action = controller.attach(&mut field);
    assert_eq!(action, Some(DeferredAction::MoveCursor { position: 3 }));
    assert_eq!(field.text(), "+7 ");
}

#[test]
fn test_explicit_symbol_controller() {
    let controller = Rc::new(LiveEditController::for_mask_with_symbol("xx-xx", 'x'));
    let mut buffer = TextBuffer::with_controller(Rc::clone(&controller));
    buffer.type_str("ab12");
    assert_eq!(buffer.text(), "ab-12");
    assert_eq!(controller.formatter().placeholder().unwrap(), 'x');
}
