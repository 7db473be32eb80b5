// maskfmt-core/src/lib.rs
//! # maskfmt Core Library
//!
//! `maskfmt-core` formats free-form input (phone numbers, card numbers,
//! document ids) into a fixed mask such as `(###) ###-##-##`, recovers the
//! clean value from formatted text, and keeps a text field formatted while
//! the user types.
//!
//! The library does no I/O. Formatting and clearing never fail: edge cases
//! degrade to returning the input unchanged.
//!
//! ## Modules
//!
//! * `config`: Defines [`MaskSpec`], the builder-style mask description.
//! * `compiler`: Placeholder inference and compilation of the extraction regex, with caching.
//! * `formatter`: The [`Formatter`] with `format`, `clear` and `clear_static`.
//! * `engine`: Defines the [`ExtractionEngine`] trait and [`ExtractionMode`].
//! * `engines`: Concrete extraction engines (regex and positional).
//! * `live_edit`: The [`LiveEditController`] state machine and an in-memory [`TextBuffer`] host.
//! * `presets`: Named, ready-made mask specs.
//! * `headless`: One-shot wrappers that report invalid masks as errors.
//! * `diagnostics`: Redaction of user values in log output.
//!
//! ## Usage Example
//!
//! ```rust
//! use maskfmt_core::{Formatter, MaskSpec};
//!
//! let formatter = Formatter::new(
//!     MaskSpec::new()
//!         .mask("(###) ###-##-##")
//!         .mask_prefix("+7 ")
//!         .ignore_input_prefixes(["+7", "7"]),
//! );
//!
//! let formatted = formatter.format("79307920000");
//! assert_eq!(formatted, "+7 (930) 792-00-00");
//! assert_eq!(formatter.clear(&formatted), "9307920000");
//! ```
//!
//! ## Error Handling
//!
//! Programmer-facing operations return [`MaskError`]; the headless wrappers
//! return `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod formatter;
pub mod headless;
pub mod live_edit;
pub mod presets;

/// Re-exports the mask description and its limits.
pub use config::{MaskSpec, DEFAULT_PLACEHOLDER, MAX_MASK_LENGTH};

/// Re-exports the compiled form of a mask.
pub use compiler::{CompiledMask, MaskKey};

pub use errors::MaskError;

pub use formatter::Formatter;

/// Re-exports the extraction strategy seam and its implementations.
pub use engine::{ExtractionEngine, ExtractionMode};
pub use engines::positional_engine::PositionalExtractor;
pub use engines::regex_engine::RegexExtractor;

/// Re-exports the live-edit types.
pub use live_edit::{
    ChangeRange, DeferredAction, EditState, EditableText, LiveEditController, TextBuffer,
};

pub use presets::{list_presets, load_preset_by_name};

pub use headless::{headless_clear_string, headless_format_string};

pub use diagnostics::redact_sensitive;
