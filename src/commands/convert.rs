//! Implementation of the colors.xml to colorset conversion.

use std::{
    collections::{HashMap, hash_map::Entry},
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use crate::{
    color::{ColorEntry, ColorError},
    colorset::write_colorsets,
    config::Config,
    diagnostics::Diagnostics,
    error::Result,
    palette::{fmt_color_name, fmt_path, fmt_summary},
    paths::display_path,
    resources::{RawColor, read_color_resources},
};

/// A colorset written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenColorset {
    /// Colorset name.
    pub(crate) name: String,
    /// Directory holding the `Contents.json`.
    pub(crate) dir: PathBuf,
}

/// Execute the convert command.
pub fn run(config: &Config) -> Result<()> {
    let use_color = io::stdout().is_terminal();
    let mut diagnostics = Diagnostics::new();
    let written = convert(config.input(), config.output(), &mut diagnostics)?;

    for colorset in &written {
        println!(
            "{}  {}",
            fmt_color_name(&colorset.name, use_color),
            fmt_path(&display_path(&colorset.dir), use_color)
        );
    }

    diagnostics.print_skipped_summary();
    diagnostics.print_warning_summary();

    let summary = format!(
        "Wrote {} colorset(s) to {}",
        written.len(),
        display_path(config.output())
    );
    println!("{}", fmt_summary(&summary, use_color));
    Ok(())
}

/// Parse `input`, decode its colors, and write one colorset per color into `output`.
///
/// Each directory is reported once, in first-definition order, under the
/// name whose contents ended up on disk.
pub(crate) fn convert(
    input: &Path,
    output: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<WrittenColorset>> {
    let raw = read_color_resources(input)?;
    let colors = decode_colors(&raw, diagnostics);
    let dirs = write_colorsets(output, &colors)?;

    let mut written: Vec<WrittenColorset> = Vec::with_capacity(dirs.len());
    let mut positions: HashMap<PathBuf, usize> = HashMap::new();
    for (color, dir) in colors.iter().zip(dirs) {
        let name = color.name().to_string();
        match positions.entry(dir.clone()) {
            Entry::Occupied(slot) => written[*slot.get()].name = name,
            Entry::Vacant(slot) => {
                slot.insert(written.len());
                written.push(WrittenColorset { name, dir });
            }
        }
    }
    Ok(written)
}

/// Decode raw declarations, recording skipped entries and name collisions.
///
/// Values without a leading `#` (such as `@color/` aliases) are dropped
/// without a diagnostic.
fn decode_colors(raw: &[RawColor], diagnostics: &mut Diagnostics) -> Vec<ColorEntry> {
    let mut colors = Vec::with_capacity(raw.len());
    // Keyed by lower-cased name; case-insensitive volumes fold these together.
    let mut seen: HashMap<String, String> = HashMap::new();

    for entry in raw {
        match ColorEntry::try_from_name_and_hex(entry.name(), entry.value()) {
            Ok(color) => {
                warn_on_collision(&mut seen, color.name(), diagnostics);
                colors.push(color);
            }
            Err(ColorError::MissingHash { .. }) => {}
            Err(error) => diagnostics.skip(entry.name(), error.to_string()),
        }
    }

    colors
}

/// Warn when `name` reuses the folder of an earlier color.
fn warn_on_collision(seen: &mut HashMap<String, String>, name: &str, diagnostics: &mut Diagnostics) {
    let Some(previous) = seen.insert(name.to_lowercase(), name.to_string()) else {
        return;
    };

    if previous == name {
        diagnostics.warn(format!(
            "color '{name}' is defined more than once; the last definition wins"
        ));
    } else {
        diagnostics.warn(format!(
            "color '{name}' differs from '{previous}' only by case; they share a folder on case-insensitive file systems"
        ));
    }
}
