// maskfmt-core/src/engines/positional_engine.rs
//! An `ExtractionEngine` that walks the mask and the text position by
//! position and keeps the characters sitting on slots.
//!
//! The two strings must be aligned, so this is only correct for fully
//! formatted static text. It still requires the text to match the extraction
//! pattern first and reports a mismatch otherwise.
//! License: MIT OR APACHE 2.0

use crate::compiler::CompiledMask;
use crate::engine::ExtractionEngine;

#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalExtractor;

impl ExtractionEngine for PositionalExtractor {
    fn extract(&self, mask: &CompiledMask, source: &str) -> Option<String> {
        if !mask.regex.is_match(source) {
            return None;
        }
        let clean = source
            .chars()
            .zip(mask.chars.iter())
            .filter(|(_, slot)| **slot == mask.placeholder)
            .map(|(ch, _)| ch)
            .collect();
        Some(clean)
    }

    fn name(&self) -> &'static str {
        "positional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{compile_mask, MaskKey};

    fn compiled(pattern: &str) -> CompiledMask {
        compile_mask(&MaskKey {
            pattern: pattern.to_string(),
            placeholder: None,
        })
        .unwrap()
    }

    #[test]
    fn test_extracts_aligned_text() {
        let mask = compiled("### ### ###");
        assert_eq!(
            PositionalExtractor.extract(&mask, "123 456 789"),
            Some("123456789".to_string())
        );
    }

    #[test]
    fn test_stops_at_shorter_string() {
        let mask = compiled("### ### ###");
        assert_eq!(PositionalExtractor.extract(&mask, "123 45"), Some("12345".to_string()));
    }

    #[test]
    fn test_handles_letter_after_slot_run() {
        // The pattern strategy cannot tell the trailing literal from a slot here.
        let mask = compiled("####z");
        assert_eq!(PositionalExtractor.extract(&mask, "1234z"), Some("1234".to_string()));
    }

    #[test]
    fn test_misaligned_input_gives_wrong_but_silent_result() {
        let mask = compiled("##-##");
        assert_eq!(PositionalExtractor.extract(&mask, "1234"), Some("124".to_string()));
    }
}
