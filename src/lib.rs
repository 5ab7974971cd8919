#![warn(missing_docs)]
//! Library support for the colorset-gen CLI.

/// Command-line interface wiring and dispatch.
mod cli;
/// Hex color decoding.
mod color;
/// Asset catalog colorset writing.
mod colorset;
/// Command implementations.
mod commands;
/// Run configuration and validation.
mod config;
/// Common diagnostics and warning aggregation.
mod diagnostics;
/// Error handling for the crate.
mod error;
/// Color palette and styling for CLI output.
mod palette;
/// Path normalization and display utilities.
mod paths;
/// Color resource XML parsing.
mod resources;
/// Test fixtures for conversion runs.
#[cfg(test)]
mod testutil;

pub use crate::{
    color::{ColorEntry, ColorError, first_lower_cased},
    colorset::{render_contents, write_colorset, write_colorsets},
    error::{Error, Result},
    resources::{RawColor, parse_color_resources, read_color_resources},
};

/// Run the CLI, returning a structured error on failure.
pub fn run() -> Result<()> {
    cli::run()
}
