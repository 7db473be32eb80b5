// maskfmt-core/src/engines/regex_engine.rs
//! An `ExtractionEngine` that matches text against the compiled extraction
//! pattern and joins the captured slot runs.
//! License: MIT OR APACHE 2.0

use crate::compiler::CompiledMask;
use crate::engine::ExtractionEngine;

#[derive(Debug, Clone, Copy, Default)]
pub struct RegexExtractor;

impl ExtractionEngine for RegexExtractor {
    fn extract(&self, mask: &CompiledMask, source: &str) -> Option<String> {
        let caps = mask.regex.captures(source)?;
        let mut clean = String::with_capacity(source.len());
        for group in caps.iter().skip(1).flatten() {
            clean.push_str(group.as_str());
        }
        Some(clean)
    }

    fn name(&self) -> &'static str {
        "pattern"
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
    fn test_extracts_all_runs_in_order() {
        let mask = compiled("(###) ###-##-##");
        assert_eq!(
            RegexExtractor.extract(&mask, "(930) 792-00-00"),
            Some("9307920000".to_string())
        );
    }

    #[test]
    fn test_extracts_from_partial_input() {
        let mask = compiled("(###) ###-##-##");
        assert_eq!(RegexExtractor.extract(&mask, "(930) 7"), Some("9307".to_string()));
        assert_eq!(RegexExtractor.extract(&mask, "("), Some(String::new()));
    }

    #[test]
    fn test_rejects_foreign_shape() {
        let mask = compiled("### ###");
        assert_eq!(RegexExtractor.extract(&mask, "12_34"), None);
    }
}
