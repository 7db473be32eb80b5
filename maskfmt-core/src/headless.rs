// maskfmt-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use of the formatter (no live editing).
//!
//! Unlike the [`Formatter`] methods, which pass input through when the mask
//! is unusable, these functions report a missing or invalid mask as an error.

use anyhow::{Context, Result};

use crate::config::MaskSpec;
use crate::engine::ExtractionMode;
use crate::formatter::Formatter;

/// Builds a formatter for `spec` and compiles its mask up front.
fn checked_formatter(spec: MaskSpec) -> Result<Formatter> {
    let formatter = Formatter::new(spec);
    formatter
        .extraction_pattern()
        .with_context(|| format!("Invalid mask {:?}", formatter.mask().unwrap_or_default()))?;
    Ok(formatter)
}

/// Formats `content` into the mask described by `spec`.
///
/// # Arguments
///
/// * `spec` - The mask description.
/// * `content` - Raw input; non letter/digit characters are ignored.
pub fn headless_format_string(spec: MaskSpec, content: &str) -> Result<String> {
    let formatter = checked_formatter(spec)?;
    Ok(formatter.format(content))
}

/// Recovers the clean value of `content` with the given extraction mode.
pub fn headless_clear_string(spec: MaskSpec, content: &str, mode: ExtractionMode) -> Result<String> {
    let formatter = checked_formatter(spec)?;
    Ok(formatter.clear_with(content, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_MASK_LENGTH;
    use crate::errors::MaskError;

    #[test]
    fn test_headless_format_string() -> Result<()> {
        let spec = MaskSpec::new().mask("#### #### #### ####");
        let formatted = headless_format_string(spec, "4276123456789012")?;
        assert_eq!(formatted, "4276 1234 5678 9012");
        Ok(())
    }

    #[test]
    fn test_headless_clear_string_modes() -> Result<()> {
        let spec = MaskSpec::new().mask("(###) ###-##-##").mask_prefix("+7 ");
        let text = "+7 (930) 792-00-00";
        assert_eq!(headless_clear_string(spec.clone(), text, ExtractionMode::Pattern)?, "9307920000");
        assert_eq!(headless_clear_string(spec, text, ExtractionMode::Positional)?, "9307920000");
        Ok(())
    }

    #[test]
    fn test_headless_reports_missing_mask() {
        let err = headless_format_string(MaskSpec::new(), "123").unwrap_err();
        assert!(matches!(err.downcast_ref::<MaskError>(), Some(MaskError::MissingMask)));
    }

    #[test]
    fn test_headless_reports_oversized_mask() {
        let spec = MaskSpec::new().mask("#".repeat(MAX_MASK_LENGTH + 1));
        let err = headless_clear_string(spec, "1", ExtractionMode::Pattern).unwrap_err();
        assert!(err.to_string().starts_with("Invalid mask"));
        assert!(matches!(
            err.downcast_ref::<MaskError>(),
            Some(MaskError::PatternLengthExceeded(_, _))
        ));
    }
}
