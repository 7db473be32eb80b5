// maskfmt-core/src/engine.rs
//! Defines the `ExtractionEngine` trait used to recover clean values.
//!
//! Two strategies exist. The pattern strategy matches text against the
//! compiled extraction regex and is safe for partially typed input. The
//! positional strategy walks mask and text side by side and is only correct
//! for fully formatted text. The formatter picks one per operation.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;

use crate::compiler::CompiledMask;
use crate::engines::positional_engine::PositionalExtractor;
use crate::engines::regex_engine::RegexExtractor;

/// A strategy for extracting the clean value from text in a mask's shape.
pub trait ExtractionEngine: Send + Sync {
    /// Extracts the characters typed into slots.
    ///
    /// Returns `None` when `source` does not have the shape of `mask`; the
    /// caller decides how to degrade.
    ///
    /// # Arguments
    /// * `mask` - The compiled mask, with its prefix already removed from `source`.
    /// * `source` - Formatted or partially formatted text.
    fn extract(&self, mask: &CompiledMask, source: &str) -> Option<String>;

    /// A short name for logs.
    fn name(&self) -> &'static str;
}

/// Selects an extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Regex based, tolerant of partial input. Used by live editing.
    #[default]
    Pattern,
    /// Position based, for static fully formatted strings only.
    Positional,
}

static PATTERN_ENGINE: RegexExtractor = RegexExtractor;
static POSITIONAL_ENGINE: PositionalExtractor = PositionalExtractor;

impl ExtractionMode {
    pub fn engine(self) -> &'static dyn ExtractionEngine {
        match self {
            ExtractionMode::Pattern => &PATTERN_ENGINE,
            ExtractionMode::Positional => &POSITIONAL_ENGINE,
        }
    }
}
