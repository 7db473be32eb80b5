// maskfmt/src/commands/mod.rs
//! Implementations of the CLI subcommands.

pub mod clear;
pub mod format;
pub mod presets;
pub mod type_cmd;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, BufRead};

use maskfmt_core::{Formatter, MaskSpec};

use crate::ui::output_format::print_warn_message;

/// Builds a formatter and compiles its mask, so a bad mask fails the
/// command instead of passing every input through.
pub fn build_formatter(spec: MaskSpec) -> Result<Formatter> {
    let formatter = Formatter::new(spec);
    let compiled = formatter
        .extraction_pattern()
        .with_context(|| format!("Invalid mask {:?}", formatter.mask().unwrap_or_default()))?;
    log::debug!(
        "Mask compiled: placeholder '{}', {} slots",
        compiled.placeholder,
        compiled.slot_count
    );
    Ok(formatter)
}

/// The given inputs, or the lines of stdin when there are none.
pub fn collect_inputs(inputs: &[String]) -> Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs.to_vec());
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        let _ = print_warn_message(
            &mut stderr.lock(),
            "Reading values from the terminal, one per line; finish with Ctrl-D.",
            supports_color,
        );
    }
    read_lines(stdin.lock())
}

pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read input lines")
}
