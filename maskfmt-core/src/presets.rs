// maskfmt-core/src/presets.rs

//! presets.rs - Named, ready-made mask specs.
//!
//! A preset bundles a mask with its prefix settings so common formats can be
//! selected by name (`--preset phone-ru` on the command line). Presets are
//! plain [`MaskSpec`] values; callers may adjust them with the usual builder
//! methods after loading.

use log::debug;
use once_cell::sync::Lazy;

use crate::config::MaskSpec;
use crate::errors::MaskError;

struct Preset {
    name: &'static str,
    description: &'static str,
    build: fn() -> MaskSpec,
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            name: "phone-ru",
            description: "Russian mobile number with a mandatory '+7 ' prefix",
            build: || {
                MaskSpec::new()
                    .mask("(###) ###-##-##")
                    .mask_prefix("+7 ")
                    .ignore_input_prefixes(["7", "7 ", "+7", "+7 "])
            },
        },
        Preset {
            name: "phone-ru-full",
            description: "Russian mobile number with the country code inside the mask",
            build: || {
                MaskSpec::new()
                    .mask("+7 (###) ###-##-##")
                    .ignore_input_prefixes(["+7", "7"])
            },
        },
        Preset {
            name: "card",
            description: "16-digit payment card number in groups of four",
            build: || MaskSpec::new().mask("#### #### #### ####"),
        },
        Preset {
            name: "groups-3",
            description: "Nine characters in groups of three",
            build: || MaskSpec::new().mask("### ### ###"),
        },
    ]
});

/// Loads the preset called `name`.
pub fn load_preset_by_name(name: &str) -> Result<MaskSpec, MaskError> {
    let preset = PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| MaskError::UnknownPreset(name.to_string()))?;
    debug!("Loaded mask preset '{}'.", preset.name);
    Ok((preset.build)())
}

/// Names and descriptions of all presets, in display order.
pub fn list_presets() -> Vec<(&'static str, &'static str)> {
    PRESETS
        .iter()
        .map(|preset| (preset.name, preset.description))
        .collect()
}
