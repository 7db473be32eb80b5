//! compiler.rs - Placeholder inference and compilation of extraction patterns.
//!
//! A mask is compiled once per distinct `(pattern, placeholder)` pair into a
//! [`CompiledMask`]: the resolved placeholder, the number of slots, and an
//! anchored regular expression used to recover the clean value from text in
//! the mask's shape. Compiled masks are immutable and shared through a global
//! cache; each formatter additionally keeps a [`MaskCache`] slot that is
//! invalidated whenever its pattern or placeholder changes.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::{DEFAULT_PLACEHOLDER, MAX_MASK_LENGTH};
use crate::errors::MaskError;

/// Capturing group matching one run of slots: letters and decimal digits,
/// possibly none.
const SLOT_GROUP: &str = r"([\p{L}\p{Nd}]*)";

const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Number of compiled masks kept in the global cache before it is reset.
const MAX_CACHED_MASKS: usize = 256;

/// Identifies the compiled form of a mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaskKey {
    pub pattern: String,
    /// The explicitly configured placeholder, `None` when it must be inferred.
    pub placeholder: Option<char>,
}

/// A mask ready for formatting and extraction.
#[derive(Debug)]
pub struct CompiledMask {
    /// The key this mask was compiled from.
    pub key: MaskKey,
    /// The pattern as chars, indexed by position.
    pub chars: Vec<char>,
    /// The resolved placeholder character.
    pub placeholder: char,
    /// How many placeholder positions the pattern has.
    pub slot_count: usize,
    /// Anchored extraction pattern; one capturing group per run of slots.
    pub regex: Regex,
}

impl CompiledMask {
    pub fn is_slot(&self, index: usize) -> bool {
        self.chars.get(index) == Some(&self.placeholder)
    }

    /// True if any position at or after `from` is a slot.
    pub fn has_slot_from(&self, from: usize) -> bool {
        self.chars
            .get(from..)
            .is_some_and(|tail| tail.contains(&self.placeholder))
    }
}

/// True for letters (`L*`) and decimal digits (`Nd`), the only characters
/// that may fill a slot. Other numerals such as `½` or `①` are rejected.
pub fn is_letter_or_digit(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric();
    }
    LETTER_OR_DIGIT
        .as_ref()
        .is_some_and(|class| class.is_match(ch.encode_utf8(&mut [0u8; 4])))
}

/// Picks the most frequent character of `pattern` as the placeholder and
/// returns it with its number of occurrences.
///
/// Ties go to the character seen first. An empty pattern yields
/// [`DEFAULT_PLACEHOLDER`] with zero slots.
pub fn infer_placeholder(pattern: &str) -> (char, usize) {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for ch in pattern.chars() {
        match counts.iter_mut().find(|(seen, _)| *seen == ch) {
            Some((_, count)) => *count += 1,
            None => counts.push((ch, 1)),
        }
    }

    let mut best = (DEFAULT_PLACEHOLDER, 0usize);
    for (ch, count) in counts {
        if count > best.1 {
            best = (ch, count);
        }
    }
    best
}

/// Resolves the placeholder for `key`, inferring it when not set explicitly.
pub fn resolve_placeholder(key: &MaskKey) -> (char, usize) {
    match key.placeholder {
        Some(placeholder) => {
            let slots = key.pattern.chars().filter(|ch| *ch == placeholder).count();
            (placeholder, slots)
        }
        None => infer_placeholder(&key.pattern),
    }
}

/// Builds the textual extraction pattern for `pattern`.
///
/// Every literal char becomes `[c]*` so a partially typed input missing some
/// literals still matches; every run of placeholders becomes one capturing
/// group of letters and digits.
pub fn build_extraction_source(pattern: &str, placeholder: char) -> String {
    let mut source = String::with_capacity(pattern.len() * 4 + 2);
    source.push('^');
    let mut in_slot_run = false;
    for ch in pattern.chars() {
        if ch == placeholder {
            in_slot_run = true;
            continue;
        }
        if in_slot_run {
            source.push_str(SLOT_GROUP);
            in_slot_run = false;
        }
        source.push('[');
        source.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4])));
        source.push_str("]*");
    }
    if in_slot_run {
        source.push_str(SLOT_GROUP);
    }
    source.push('$');
    source
}

/// Compiles `key` into a [`CompiledMask`]. This is the low-level function
/// that performs the actual regex compilation.
pub fn compile_mask(key: &MaskKey) -> Result<CompiledMask, MaskError> {
    let chars: Vec<char> = key.pattern.chars().collect();
    if chars.len() > MAX_MASK_LENGTH {
        return Err(MaskError::PatternLengthExceeded(chars.len(), MAX_MASK_LENGTH));
    }

    let (placeholder, slot_count) = resolve_placeholder(key);
    let source = build_extraction_source(&key.pattern, placeholder);
    debug!(
        target: "maskfmt_core::compiler",
        "Compiling mask '{}' (placeholder '{}', {} slots) into '{}'",
        key.pattern, placeholder, slot_count, source
    );

    let regex = RegexBuilder::new(&source)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| MaskError::PatternCompilation(key.pattern.clone(), e))?;

    Ok(CompiledMask {
        key: key.clone(),
        chars,
        placeholder,
        slot_count,
        regex,
    })
}

lazy_static! {
    static ref LETTER_OR_DIGIT: Option<Regex> = Regex::new(r"^[\p{L}\p{Nd}]$").ok();

    /// Process-wide cache of compiled masks, keyed by pattern and placeholder.
    /// Entries are immutable once inserted.
    static ref COMPILED_MASK_CACHE: RwLock<HashMap<MaskKey, Arc<CompiledMask>>> = RwLock::new(HashMap::new());
}

/// Gets a compiled mask from the global cache or compiles it if not found.
pub fn get_or_compile_mask(key: &MaskKey) -> Result<Arc<CompiledMask>, MaskError> {
    {
        let cache = COMPILED_MASK_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(compiled) = cache.get(key) {
            debug!(target: "maskfmt_core::compiler", "Serving mask '{}' from cache", key.pattern);
            return Ok(Arc::clone(compiled));
        }
    }

    let compiled = Arc::new(compile_mask(key)?);

    let mut cache = COMPILED_MASK_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if cache.len() >= MAX_CACHED_MASKS {
        warn!(
            target: "maskfmt_core::compiler",
            "Compiled mask cache reached {} entries; resetting it",
            cache.len()
        );
        cache.clear();
    }
    cache.insert(key.clone(), Arc::clone(&compiled));
    Ok(compiled)
}

/// A single-entry cache owned by one formatter.
///
/// The entry is only served while its key equals the requested key, and it
/// is dropped explicitly by [`MaskCache::invalidate`] on every mutation of
/// the owning formatter's pattern or placeholder.
#[derive(Debug, Default)]
pub struct MaskCache {
    slot: RwLock<Option<Arc<CompiledMask>>>,
}

impl MaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, key: &MaskKey) -> Result<Arc<CompiledMask>, MaskError> {
        {
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(compiled) = slot.as_ref().filter(|c| c.key == *key) {
                return Ok(Arc::clone(compiled));
            }
        }

        let compiled = get_or_compile_mask(key)?;
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn invalidate(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Clone for MaskCache {
    fn clone(&self) -> Self {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner).clone();
        Self {
            slot: RwLock::new(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(pattern: &str, placeholder: Option<char>) -> MaskKey {
        MaskKey {
            pattern: pattern.to_string(),
            placeholder,
        }
    }

    #[test]
    fn test_infer_most_frequent_char() {
        assert_eq!(infer_placeholder("+7 (###) ###-##-##"), ('#', 10));
        assert_eq!(infer_placeholder("XX.XX.XXXX"), ('X', 8));
    }

    #[test]
    fn test_infer_ties_prefer_first_seen() {
        assert_eq!(infer_placeholder("ab"), ('a', 1));
        assert_eq!(infer_placeholder("--##"), ('-', 2));
        assert_eq!(infer_placeholder("##--"), ('#', 2));
    }

    #[test]
    fn test_infer_empty_pattern_uses_default() {
        assert_eq!(infer_placeholder(""), (DEFAULT_PLACEHOLDER, 0));
    }

    #[test]
    fn test_explicit_placeholder_counts_its_slots() {
        assert_eq!(resolve_placeholder(&key("__-__-____", Some('_'))), ('_', 8));
        assert_eq!(resolve_placeholder(&key("__-__", Some('#'))), ('#', 0));
    }

    #[test]
    fn test_extraction_source_groups_runs() {
        assert_eq!(
            build_extraction_source("### ###", '#'),
            r"^([\p{L}\p{Nd}]*)[ ]*([\p{L}\p{Nd}]*)$"
        );
        assert_eq!(build_extraction_source("", '#'), "^$");
    }

    #[test]
    fn test_extraction_source_escapes_meta_characters() {
        let compiled = compile_mask(&key("[##]^-\\##", None)).unwrap();
        let caps = compiled.regex.captures("[12]^-\\34").unwrap();
        assert_eq!(&caps[1], "12");
        assert_eq!(&caps[2], "34");
    }

    #[test]
    fn test_compiled_regex_tolerates_missing_literals() {
        let compiled = compile_mask(&key("(###) ###-##-##", None)).unwrap();
        let caps = compiled.regex.captures("(930").unwrap();
        assert_eq!(&caps[1], "930");
        assert_eq!(&caps[2], "");
        assert!(compiled.regex.is_match("(930) 792-00-00"));
        assert!(!compiled.regex.is_match("930/792"));
    }

    #[test]
    fn test_slot_queries() {
        let compiled = compile_mask(&key("## -", None)).unwrap();
        assert!(compiled.is_slot(0));
        assert!(!compiled.is_slot(2));
        assert!(!compiled.is_slot(10));
        assert!(compiled.has_slot_from(1));
        assert!(!compiled.has_slot_from(2));
        assert!(!compiled.has_slot_from(9));
    }

    #[test]
    fn test_mask_length_limit() {
        let long = "#".repeat(MAX_MASK_LENGTH + 1);
        let err = compile_mask(&key(&long, None)).unwrap_err();
        assert!(matches!(err, MaskError::PatternLengthExceeded(n, MAX_MASK_LENGTH) if n == MAX_MASK_LENGTH + 1));
    }

    #[test]
    fn test_global_cache_shares_compiled_masks() {
        let k = key("##/##/####", None);
        let a = get_or_compile_mask(&k).unwrap();
        let b = get_or_compile_mask(&k).unwrap();
        assert_eq!(a.key, b.key);
        assert_eq!(a.slot_count, 8);
    }

    #[test]
    fn test_mask_cache_serves_only_matching_key() {
        let cache = MaskCache::new();
        let first = key("## ##", None);
        let a = cache.get_or_compile(&first).unwrap();
        let b = cache.get_or_compile(&first).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let second = key("## ##", Some(' '));
        let compiled = cache.get_or_compile(&second).unwrap();
        assert_eq!(compiled.placeholder, ' ');
        assert_eq!(compiled.key, second);

        cache.invalidate();
        assert_eq!(cache.get_or_compile(&first).unwrap().key, first);
    }

    #[test]
    fn test_letter_or_digit_classes() {
        for ch in ['a', 'Z', '7', 'ж', 'Ω', '٣', '中'] {
            assert!(is_letter_or_digit(ch), "{ch}");
        }
        for ch in ['-', ' ', '½', '²', '①', 'Ⅻ', '\u{0345}'] {
            assert!(!is_letter_or_digit(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_slot_group_rejects_other_numerals() {
        let compiled = compile_mask(&key("## ##", None)).unwrap();
        assert!(compiled.regex.is_match("Ж9 a"));
        assert!(!compiled.regex.is_match("½9"));
    }
}
