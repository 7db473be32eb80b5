// maskfmt-core/src/formatter.rs
//! Formatting into a mask and recovering the clean value from it.
//!
//! [`Formatter`] owns a [`MaskSpec`] and a cache slot for its compiled form.
//! All operations take `&self`; compilation happens lazily on first use and
//! the cache is invalidated by every mutator that touches the pattern or the
//! placeholder. A formatter that is never mutated may be shared read-only
//! between several fields (it is `Send + Sync`).
//!
//! None of the string operations fail. Edge cases degrade to returning the
//! input unchanged:
//! * no mask or an empty mask,
//! * empty input,
//! * input that does not have the mask's shape (`clear`),
//! * input longer than the slot count in non-strict mode (`format`).
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::sync::Arc;

use crate::compiler::{is_letter_or_digit, CompiledMask, MaskCache};
use crate::config::MaskSpec;
use crate::diagnostics::loggable;
use crate::engine::ExtractionMode;
use crate::errors::MaskError;

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    spec: MaskSpec,
    cache: MaskCache,
}

impl From<MaskSpec> for Formatter {
    fn from(spec: MaskSpec) -> Self {
        Self::new(spec)
    }
}

impl Formatter {
    pub fn new(spec: MaskSpec) -> Self {
        Self {
            spec,
            cache: MaskCache::new(),
        }
    }

    /// Shorthand for a formatter over `pattern` with an inferred placeholder.
    pub fn for_mask(pattern: impl Into<String>) -> Self {
        Self::new(MaskSpec::new().mask(pattern))
    }

    pub fn spec(&self) -> &MaskSpec {
        &self.spec
    }

    /// The configured mask pattern.
    pub fn mask(&self) -> Option<&str> {
        self.spec.pattern()
    }

    /// The resolved placeholder: the configured one, or the most frequent
    /// character of the mask.
    pub fn placeholder(&self) -> Result<char, MaskError> {
        Ok(self.extraction_pattern()?.placeholder)
    }

    /// Number of placeholder positions in the mask.
    pub fn available_slot_count(&self) -> Result<usize, MaskError> {
        Ok(self.extraction_pattern()?.slot_count)
    }

    /// The compiled form of the current spec, compiling it if needed.
    ///
    /// Fails with [`MaskError::MissingMask`] when no mask was ever set.
    pub fn extraction_pattern(&self) -> Result<Arc<CompiledMask>, MaskError> {
        if self.spec.pattern().is_none() {
            return Err(MaskError::MissingMask);
        }
        self.cache.get_or_compile(&self.spec.cache_key())
    }

    pub fn set_mask(&mut self, pattern: impl Into<String>) {
        self.spec.set_pattern(Some(pattern.into()));
        self.cache.invalidate();
    }

    /// Sets or unsets the explicit placeholder.
    pub fn set_symbol(&mut self, placeholder: Option<char>) {
        self.spec.set_placeholder(placeholder);
        self.cache.invalidate();
    }

    pub fn set_mask_prefix(&mut self, prefix: Option<String>) {
        self.spec.set_prefix(prefix);
    }

    pub fn set_prefix_necessary(&mut self, necessary: bool) {
        self.spec.set_prefix_necessary(necessary);
    }

    pub fn set_ignored_input_prefixes(&mut self, prefixes: Vec<String>) {
        self.spec.set_ignored_prefixes(prefixes);
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.spec.set_strict(strict);
    }

    /// Formats `source` into the mask's shape.
    ///
    /// Characters other than letters and digits are dropped before slot
    /// filling. The output stops at the first slot that has no input left,
    /// except that a purely literal tail is appended once every slot is filled.
    pub fn format(&self, source: &str) -> String {
        if self.spec.is_empty_mask() || source.is_empty() {
            return source.to_string();
        }
        let Some(mask) = self.usable_mask() else {
            return source.to_string();
        };

        if !self.spec.is_strict() && source.chars().count() > mask.slot_count {
            debug!(
                "Input {} exceeds {} slots in non-strict mode; left unformatted",
                loggable(source),
                mask.slot_count
            );
            return source.to_string();
        }

        let source = self.strip_ignored_prefix(source);
        let typed: Vec<char> = source.chars().filter(|ch| is_letter_or_digit(*ch)).collect();

        let mut formatted = String::with_capacity(mask.key.pattern.len() + typed.len());
        let mut next = 0usize;
        for (index, &mask_ch) in mask.chars.iter().enumerate() {
            if next >= typed.len() {
                if !mask.has_slot_from(index) {
                    formatted.extend(&mask.chars[index..]);
                }
                break;
            }
            if mask_ch == mask.placeholder {
                formatted.push(typed[next]);
                next += 1;
            } else {
                formatted.push(mask_ch);
            }
        }

        if let Some(prefix) = self.spec.prefix() {
            if !formatted.starts_with(prefix) && !mask.key.pattern.starts_with(prefix) {
                formatted.insert_str(0, prefix);
            }
        }

        debug!("Formatted {} into {}", loggable(source), loggable(&formatted));
        formatted
    }

    /// Recovers the clean value with the extraction pattern.
    ///
    /// Safe for partially typed text and used by live editing. Masks where a
    /// run of slots is directly followed by a literal letter or digit (such
    /// as `####z`) are not supported: the literal is read as part of the
    /// slot run. Use [`Formatter::clear_static`] for those on static text.
    pub fn clear(&self, source: &str) -> String {
        self.clear_with(source, ExtractionMode::Pattern)
    }

    /// Recovers the clean value by position.
    ///
    /// Only valid for fully formatted static text; misaligned or truncated
    /// input silently yields a wrong value. Never use it for live editing.
    pub fn clear_static(&self, source: &str) -> String {
        self.clear_with(source, ExtractionMode::Positional)
    }

    /// Strips the prefix and extracts the clean value with `mode`.
    /// Text that does not have the mask's shape is returned without its prefix.
    pub fn clear_with(&self, source: &str, mode: ExtractionMode) -> String {
        if self.spec.is_empty_mask() || source.is_empty() {
            return source.to_string();
        }
        let Some(mask) = self.usable_mask() else {
            return source.to_string();
        };

        let stripped = self.strip_mask_prefix(source);
        let engine = mode.engine();
        match engine.extract(&mask, stripped) {
            Some(clean) => clean,
            None => {
                debug!(
                    "Input {} does not fit mask '{}' ({} engine); returned as is",
                    loggable(stripped),
                    mask.key.pattern,
                    engine.name()
                );
                stripped.to_string()
            }
        }
    }

    fn usable_mask(&self) -> Option<Arc<CompiledMask>> {
        match self.extraction_pattern() {
            Ok(mask) => Some(mask),
            Err(e) => {
                warn!("Mask is unusable, input is passed through: {}", e);
                None
            }
        }
    }

    fn strip_ignored_prefix<'a>(&self, source: &'a str) -> &'a str {
        self.spec
            .ignored_prefixes()
            .iter()
            .find_map(|prefix| source.strip_prefix(prefix.as_str()))
            .unwrap_or(source)
    }

    fn strip_mask_prefix<'a>(&self, source: &'a str) -> &'a str {
        let Some(prefix) = self.spec.prefix() else {
            return source;
        };
        if source.len() < prefix.len() && prefix.starts_with(source) {
            return "";
        }
        source.strip_prefix(prefix).unwrap_or(source)
    }
}
