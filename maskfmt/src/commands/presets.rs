// maskfmt/src/commands/presets.rs
//! The `presets` command.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use maskfmt_core::{list_presets, load_preset_by_name, MaskSpec};

#[derive(Debug, Serialize)]
struct PresetEntry {
    name: &'static str,
    description: &'static str,
    spec: MaskSpec,
}

pub fn run_presets<W: Write>(json: bool, out: &mut W) -> Result<()> {
    let presets = list_presets();

    if json {
        let entries = presets
            .into_iter()
            .map(|(name, description)| {
                Ok(PresetEntry {
                    name,
                    description,
                    spec: load_preset_by_name(name)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        serde_json::to_writer_pretty(&mut *out, &entries).context("Failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }

    let width = presets.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, description) in presets {
        writeln!(out, "{:<width$}  {}", name, description, width = width)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_preset() {
        let mut out = Vec::new();
        run_presets(false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for (name, _) in list_presets() {
            assert!(text.contains(name));
        }
    }

    #[test]
    fn json_includes_specs() {
        let mut out = Vec::new();
        run_presets(true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let card = value
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["name"] == "card")
            .unwrap();
        assert_eq!(card["spec"]["pattern"], "#### #### #### ####");
    }
}
