// maskfmt/src/logger.rs
//! Logger setup for the maskfmt binary.
//!
//! Logs go to stderr so formatted values on stdout stay pipeable. `RUST_LOG`
//! is honoured and defaults to `warn`; an explicit level from the command
//! line wins over it.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger. Calling it twice is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
