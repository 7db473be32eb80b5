//! Configuration management for `maskfmt-core`.
//!
//! This module defines [`MaskSpec`], the description of a mask: the pattern,
//! the placeholder character, an optional mandatory prefix, raw-input prefixes
//! to ignore, and the strictness flag. A spec is plain data; compiled state
//! derived from it lives in the [`crate::compiler`] cache.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::compiler::MaskKey;

/// Placeholder used when none is configured and the mask has no characters
/// to infer one from.
pub const DEFAULT_PLACEHOLDER: char = '#';

/// Maximum allowed length (in chars) of a mask pattern.
pub const MAX_MASK_LENGTH: usize = 500;

/// Immutable-after-build description of a mask.
///
/// All setters consume and return the spec so they can be chained:
///
/// ```rust
/// use maskfmt_core::MaskSpec;
///
/// let spec = MaskSpec::new()
///     .mask("(###) ###-##-##")
///     .mask_prefix("+7 ")
///     .ignore_input_prefixes(["+7", "7", "8"]);
/// assert_eq!(spec.pattern(), Some("(###) ###-##-##"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskSpec {
    pattern: Option<String>,
    placeholder: Option<char>,
    prefix: Option<String>,
    prefix_necessary: bool,
    ignored_prefixes: Vec<String>,
    strict: bool,
}

impl Default for MaskSpec {
    fn default() -> Self {
        Self {
            pattern: None,
            placeholder: None,
            prefix: None,
            prefix_necessary: true,
            ignored_prefixes: Vec::new(),
            strict: true,
        }
    }
}

impl MaskSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the given string as format mask.
    pub fn mask(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets a literal prefix that every formatted result starts with.
    pub fn mask_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Whether the prefix is mandatory in live editing (the user cannot delete it).
    pub fn use_mask_prefix_necessarily(mut self, necessary: bool) -> Self {
        self.prefix_necessary = necessary;
        self
    }

    /// Raw-input prefixes stripped before slot filling, e.g. a country code
    /// already implied by the mask. Checked in the given order; only the first
    /// match is removed.
    pub fn ignore_input_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the placeholder character explicitly.
    /// Without it the most frequent character of the mask is used.
    pub fn symbol(mut self, placeholder: char) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// In non-strict mode inputs longer than the number of slots are returned as is.
    pub fn strict_mask(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn placeholder(&self) -> Option<char> {
        self.placeholder
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn is_prefix_necessary(&self) -> bool {
        self.prefix_necessary
    }

    pub fn ignored_prefixes(&self) -> &[String] {
        &self.ignored_prefixes
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// True when no pattern is set or the pattern is empty.
    pub fn is_empty_mask(&self) -> bool {
        self.pattern.as_deref().map_or(true, str::is_empty)
    }

    /// The prefix, if it is configured, non-empty and mandatory.
    pub fn necessary_prefix(&self) -> Option<&str> {
        match self.prefix.as_deref() {
            Some(prefix) if self.prefix_necessary && !prefix.is_empty() => Some(prefix),
            _ => None,
        }
    }

    /// Key identifying the compiled form of this spec.
    pub fn cache_key(&self) -> MaskKey {
        MaskKey {
            pattern: self.pattern.clone().unwrap_or_default(),
            placeholder: self.placeholder,
        }
    }

    pub(crate) fn set_pattern(&mut self, pattern: Option<String>) {
        self.pattern = pattern;
    }

    pub(crate) fn set_placeholder(&mut self, placeholder: Option<char>) {
        self.placeholder = placeholder;
    }

    pub(crate) fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }

    pub(crate) fn set_prefix_necessary(&mut self, necessary: bool) {
        self.prefix_necessary = necessary;
    }

    pub(crate) fn set_ignored_prefixes(&mut self, prefixes: Vec<String>) {
        self.ignored_prefixes = prefixes;
    }

    pub(crate) fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }
}
