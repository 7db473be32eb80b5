// maskfmt-core/src/diagnostics.rs
//! Helpers for logging user-typed values.
//!
//! Values passing through a mask are usually personal data (phone numbers,
//! card numbers, document ids). Debug logs show them redacted unless
//! `MASKFMT_ALLOW_DEBUG_PII=true` is set in the environment.

use lazy_static::lazy_static;

lazy_static! {
    /// Initialized once to determine if raw values are allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("MASKFMT_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// Returns `value` as it may appear in a log line.
pub fn loggable(value: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        value.to_string()
    } else {
        redact_sensitive(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("930"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("9307920000"), "[REDACTED: 10 chars]".to_string());
    }
}
