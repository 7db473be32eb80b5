//! errors.rs - Custom error types for the maskfmt-core library.
//!
//! Only programmer-facing operations surface these errors. Formatting and
//! clearing of user input never fail; they degrade to returning the input.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `maskfmt-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaskError {
    #[error("Failed to compile extraction pattern for mask '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Mask length ({0}) exceeds maximum allowed ({1})")]
    PatternLengthExceeded(usize, usize),

    #[error("No mask has been configured")]
    MissingMask,

    #[error("Unknown mask preset '{0}'")]
    UnknownPreset(String),
}
