// maskfmt/src/commands/format.rs
//! The `format` command.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::io::Write;

use maskfmt_core::Formatter;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FormatRecord {
    pub input: String,
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<String>,
}

/// Options for [`run_format`].
pub struct FormatOptions {
    pub show_clean: bool,
    pub json: bool,
}

pub fn format_inputs(formatter: &Formatter, inputs: &[String], show_clean: bool) -> Vec<FormatRecord> {
    inputs
        .iter()
        .map(|input| {
            let formatted = formatter.format(input);
            // Output of `format` is fully formatted, so positional extraction applies.
            let clean = show_clean.then(|| formatter.clear_static(&formatted));
            FormatRecord {
                input: input.clone(),
                formatted,
                clean,
            }
        })
        .collect()
}

pub fn run_format<W: Write>(
    formatter: &Formatter,
    inputs: &[String],
    opts: &FormatOptions,
    out: &mut W,
) -> Result<()> {
    info!("Formatting {} value(s).", inputs.len());
    let records = format_inputs(formatter, inputs, opts.show_clean);

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &records).context("Failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }
    for record in &records {
        match &record.clean {
            Some(clean) => writeln!(out, "{}\t{}", record.formatted, clean)?,
            None => writeln!(out, "{}", record.formatted)?,
        }
    }
    Ok(())
}
