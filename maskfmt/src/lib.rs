// maskfmt/src/lib.rs
//! # maskfmt CLI Application
//!
//! This crate provides the terminal interface for the maskfmt formatting
//! engine: formatting and clearing values, replaying live typing, and listing
//! the built-in presets.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

use anyhow::Result;
use std::io::{self, Write};

use cli::{Cli, Commands};
use commands::build_formatter;
use maskfmt_core::ExtractionMode;

/// Dispatches the parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Format(cmd) => {
            let formatter = build_formatter(cmd.mask.to_spec()?)?;
            let inputs = commands::collect_inputs(&cmd.inputs)?;
            let opts = commands::format::FormatOptions {
                show_clean: cmd.show_clean,
                json: cmd.json,
            };
            commands::format::run_format(&formatter, &inputs, &opts, out)
        }
        Commands::Clear(cmd) => {
            let formatter = build_formatter(cmd.mask.to_spec()?)?;
            let inputs = commands::collect_inputs(&cmd.inputs)?;
            let mode = if cmd.positional {
                ExtractionMode::Positional
            } else {
                ExtractionMode::Pattern
            };
            commands::clear::run_clear(&formatter, &inputs, mode, cmd.json, out)
        }
        Commands::Type(cmd) => {
            let formatter = build_formatter(cmd.mask.to_spec()?)?;
            let opts = commands::type_cmd::TypeOptions {
                backspace: cmd.backspace,
                steps: cmd.steps,
                json: cmd.json,
            };
            commands::type_cmd::run_type(formatter, &cmd.keys, &opts, out)
        }
        Commands::Presets { json } => commands::presets::run_presets(json, out),
    }
}

/// Runs with stdout as the output stream.
pub fn run_to_stdout(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run(cli, &mut writer)?;
    writer.flush()?;
    Ok(())
}
