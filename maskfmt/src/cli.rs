// maskfmt/src/cli.rs
//! This file defines the command-line interface (CLI) for the maskfmt application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;

use maskfmt_core::{load_preset_by_name, MaskError, MaskSpec};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "maskfmt",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Format text into input masks and recover clean values",
    long_about = "maskfmt formats free-form input such as phone or card numbers into a fixed mask like '(###) ###-##-##', recovers the clean value from formatted text, and can replay keystrokes against a live-formatted field to show what a user would see while typing.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `maskfmt` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Formats each input into the mask.
    #[command(about = "Formats each input (or each stdin line) into the mask.")]
    Format(FormatCommand),

    /// Recovers the clean value from formatted text.
    #[command(about = "Recovers the clean value from formatted text (arguments or stdin lines).")]
    Clear(ClearCommand),

    /// Replays keystrokes against a live-formatted field.
    #[command(about = "Types keys into a live-formatted field and prints the result.")]
    Type(TypeCommand),

    /// Lists the built-in mask presets.
    #[command(about = "Lists the built-in mask presets.")]
    Presets {
        /// Print presets as JSON.
        #[arg(long, help = "Print the preset list as JSON.")]
        json: bool,
    },
}

/// Options describing the mask, shared by every command that formats.
#[derive(Args, Debug, Clone, Default)]
pub struct MaskArgs {
    /// The mask pattern.
    #[arg(long, short = 'm', env = "MASKFMT_MASK", value_name = "PATTERN", help = "Mask pattern, e.g. '(###) ###-##-##'.")]
    pub mask: Option<String>,

    /// Start from a built-in preset.
    #[arg(long, short = 'p', value_name = "NAME", help = "Start from a built-in preset (see `maskfmt presets`).")]
    pub preset: Option<String>,

    /// Literal prefix of every formatted value.
    #[arg(long, env = "MASKFMT_PREFIX", value_name = "PREFIX", help = "Literal prefix every formatted value starts with.")]
    pub prefix: Option<String>,

    /// Allow the user to delete the prefix while typing.
    #[arg(long = "prefix-optional", help = "Let the prefix be deleted in live editing.")]
    pub prefix_optional: bool,

    /// Raw-input prefixes to strip before formatting.
    #[arg(long = "ignore-prefix", value_name = "PREFIX", value_delimiter = ',', help = "Raw-input prefixes to strip before formatting (repeatable, comma-separated).")]
    pub ignore_prefix: Vec<String>,

    /// Explicit placeholder character.
    #[arg(long, short = 's', value_name = "CHAR", help = "Placeholder character (inferred from the mask by default).")]
    pub symbol: Option<char>,

    /// Leave inputs longer than the mask unformatted.
    #[arg(long = "non-strict", help = "Leave inputs longer than the mask's slots unformatted.")]
    pub non_strict: bool,
}

impl MaskArgs {
    /// Builds the mask description: the preset, if any, with the individual
    /// flags applied on top of it.
    pub fn to_spec(&self) -> Result<MaskSpec> {
        let mut spec = match &self.preset {
            Some(name) => load_preset_by_name(name).context("Failed to load preset")?,
            None => MaskSpec::new(),
        };

        if let Some(mask) = &self.mask {
            spec = spec.mask(mask.as_str());
        }
        if let Some(prefix) = &self.prefix {
            spec = spec.mask_prefix(prefix.as_str());
        }
        if self.prefix_optional {
            spec = spec.use_mask_prefix_necessarily(false);
        }
        if !self.ignore_prefix.is_empty() {
            spec = spec.ignore_input_prefixes(self.ignore_prefix.iter().map(String::as_str));
        }
        if let Some(symbol) = self.symbol {
            spec = spec.symbol(symbol);
        }
        if self.non_strict {
            spec = spec.strict_mask(false);
        }

        if spec.pattern().is_none() {
            return Err(MaskError::MissingMask)
                .context("Use --mask or --preset to choose a mask");
        }
        debug!("Using mask spec {:?}", spec);
        Ok(spec)
    }
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatCommand {
    #[command(flatten)]
    pub mask: MaskArgs,

    /// Values to format (reads stdin lines if none are given).
    #[arg(value_name = "INPUT", help = "Values to format; stdin lines are used when omitted.")]
    pub inputs: Vec<String>,

    /// Also print the clean value of every formatted result.
    #[arg(long = "show-clean", help = "Also print the clean value recovered from each result.")]
    pub show_clean: bool,

    /// Print results as JSON.
    #[arg(long, help = "Print results as a JSON array.")]
    pub json: bool,
}

/// Arguments for the `clear` command.
#[derive(Parser, Debug)]
pub struct ClearCommand {
    #[command(flatten)]
    pub mask: MaskArgs,

    /// Formatted values to clear (reads stdin lines if none are given).
    #[arg(value_name = "INPUT", help = "Formatted values to clear; stdin lines are used when omitted.")]
    pub inputs: Vec<String>,

    /// Extract by position; valid only for fully formatted values.
    #[arg(long = "static", help = "Extract by position. Only valid for fully formatted values.")]
    pub positional: bool,

    /// Print results as JSON.
    #[arg(long, help = "Print results as a JSON array.")]
    pub json: bool,
}

/// Arguments for the `type` command.
#[derive(Parser, Debug)]
pub struct TypeCommand {
    #[command(flatten)]
    pub mask: MaskArgs,

    /// Keys to type, one keystroke per character.
    #[arg(value_name = "KEYS", help = "Keys to type, one keystroke per character.")]
    pub keys: String,

    /// Press backspace this many times after typing.
    #[arg(long, short = 'b', value_name = "N", default_value_t = 0, help = "Press backspace N times after typing.")]
    pub backspace: usize,

    /// Print the field after every keystroke.
    #[arg(long, help = "Print the field content after every keystroke.")]
    pub steps: bool,

    /// Print the result as JSON.
    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_with_mask_flags() {
        let cli = Cli::try_parse_from([
            "maskfmt",
            "format",
            "--mask",
            "(###) ###-##-##",
            "--prefix",
            "+7 ",
            "--ignore-prefix",
            "+7,7",
            "--ignore-prefix",
            "8",
            "79307920000",
        ])
        .unwrap();
        let Commands::Format(cmd) = cli.command else {
            panic!("expected format command");
        };
        let spec = cmd.mask.to_spec().unwrap();
        assert_eq!(spec.pattern(), Some("(###) ###-##-##"));
        assert_eq!(spec.prefix(), Some("+7 "));
        assert_eq!(spec.ignored_prefixes(), &["+7", "7", "8"]);
        assert_eq!(cmd.inputs, vec!["79307920000".to_string()]);
    }

    #[test]
    fn flags_override_preset() {
        let args = MaskArgs {
            preset: Some("phone-ru".into()),
            prefix: Some("+8 ".into()),
            prefix_optional: true,
            ..Default::default()
        };
        let spec = args.to_spec().unwrap();
        assert_eq!(spec.pattern(), Some("(###) ###-##-##"));
        assert_eq!(spec.prefix(), Some("+8 "));
        assert!(!spec.is_prefix_necessary());
    }

    #[test]
    fn missing_mask_is_an_error() {
        let err = MaskArgs::default().to_spec().unwrap_err();
        assert!(err.to_string().contains("--mask"));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let args = MaskArgs {
            preset: Some("nope".into()),
            ..Default::default()
        };
        assert!(args.to_spec().is_err());
    }
}
