// maskfmt/src/main.rs
//! maskfmt entry point.
//!
//! Loads `.env`, initializes logging and dispatches the subcommand.

use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use maskfmt::cli::Cli;
use maskfmt::logger;
use maskfmt::ui::output_format;

fn main() -> ExitCode {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match maskfmt::run_to_stdout(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let stderr = io::stderr();
            let supports_color = stderr.is_terminal();
            let _ = output_format::print_error_message(&mut stderr.lock(), &format!("{:#}", e), supports_color);
            ExitCode::FAILURE
        }
    }
}
