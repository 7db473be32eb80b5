// maskfmt-core/src/live_edit/filter.rs
//! Keystroke filter for masked fields.

use crate::compiler::is_letter_or_digit;

/// Drops the last inserted character when it is not a letter or digit.
///
/// Hosts call this for each insertion made by the user; one keystroke
/// inserts one character, so only the last one is checked. Pasted text keeps
/// its inner punctuation, which formatting removes anyway.
pub fn filter_inserted(inserted: &str) -> &str {
    match inserted.char_indices().next_back() {
        Some((index, ch)) if !is_letter_or_digit(ch) => &inserted[..index],
        _ => inserted,
    }
}
