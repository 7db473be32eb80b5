// maskfmt/src/commands/clear.rs
//! The `clear` command.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::io::Write;

use maskfmt_core::{ExtractionMode, Formatter};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ClearRecord {
    pub input: String,
    pub clean: String,
    pub mode: ExtractionMode,
}

pub fn run_clear<W: Write>(
    formatter: &Formatter,
    inputs: &[String],
    mode: ExtractionMode,
    json: bool,
    out: &mut W,
) -> Result<()> {
    info!("Clearing {} value(s) with the {} engine.", inputs.len(), mode.engine().name());
    if mode == ExtractionMode::Positional {
        warn!("Positional extraction is only correct for fully formatted values.");
    }
    let records: Vec<ClearRecord> = inputs
        .iter()
        .map(|input| ClearRecord {
            input: input.clone(),
            clean: formatter.clear_with(input, mode),
            mode,
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &records).context("Failed to write JSON output")?;
        writeln!(out)?;
    } else {
        for record in &records {
            writeln!(out, "{}", record.clean)?;
        }
    }
    Ok(())
}
