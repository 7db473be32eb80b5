// maskfmt/src/commands/type_cmd.rs
//! The `type` command: replays keystrokes against a live-formatted buffer.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::io::Write;
use std::rc::Rc;

use maskfmt_core::{Formatter, LiveEditController, TextBuffer};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TypeReport {
    pub text: String,
    pub cursor: usize,
    pub clean: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

/// Options for [`run_type`].
pub struct TypeOptions {
    pub backspace: usize,
    pub steps: bool,
    pub json: bool,
}

/// Types `keys` into a fresh buffer, then presses backspace.
pub fn replay(formatter: Formatter, keys: &str, backspace: usize, record_steps: bool) -> TypeReport {
    let controller = Rc::new(LiveEditController::new(formatter));
    let mut buffer = TextBuffer::with_controller(Rc::clone(&controller));
    let mut steps = Vec::new();

    let mut key = [0u8; 4];
    for ch in keys.chars() {
        buffer.insert(ch.encode_utf8(&mut key));
        if record_steps {
            steps.push(buffer.text().to_string());
        }
    }
    for _ in 0..backspace {
        buffer.backspace();
        if record_steps {
            steps.push(buffer.text().to_string());
        }
    }

    TypeReport {
        text: buffer.text().to_string(),
        cursor: buffer.cursor(),
        clean: controller.clean_value(),
        steps,
    }
}

pub fn run_type<W: Write>(formatter: Formatter, keys: &str, opts: &TypeOptions, out: &mut W) -> Result<()> {
    info!("Replaying {} keystroke(s) and {} backspace(s).", keys.chars().count(), opts.backspace);
    let report = replay(formatter, keys, opts.backspace, opts.steps);

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }
    for step in &report.steps {
        writeln!(out, "{}", step)?;
    }
    if opts.steps {
        writeln!(out, "---")?;
    }
    writeln!(out, "text:   {}", report.text)?;
    writeln!(out, "cursor: {}", report.cursor)?;
    writeln!(out, "clean:  {}", report.clean)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskfmt_core::load_preset_by_name;

    fn phone() -> Formatter {
        Formatter::new(load_preset_by_name("phone-ru").unwrap())
    }

    #[test]
    fn replay_records_each_keystroke() {
        let report = replay(phone(), "93-0", 0, true);
        assert_eq!(report.steps, vec!["+7 (9", "+7 (93", "+7 (93", "+7 (930"]);
        assert_eq!(report.text, "+7 (930");
        assert_eq!(report.clean, "930");
    }

    #[test]
    fn backspace_stops_at_prefix() {
        let report = replay(phone(), "93", 10, false);
        assert_eq!(report.text, "+7 ");
        assert_eq!(report.cursor, 3);
        assert_eq!(report.clean, "");
    }

    #[test]
    fn plain_output() {
        let mut out = Vec::new();
        let opts = TypeOptions { backspace: 0, steps: false, json: false };
        run_type(Formatter::for_mask("## ##"), "1234", &opts, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "text:   12 34\ncursor: 5\nclean:  1234\n"
        );
    }
}
