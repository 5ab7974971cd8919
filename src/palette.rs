//! Color palette and styling for CLI output.

use owo_colors::{OwoColorize, Style};

/// Style for colorset names, the primary identifier in output.
pub fn color_name() -> Style {
    Style::new().cyan().bold()
}

/// Style for output paths.
pub fn path() -> Style {
    Style::new().dimmed()
}

/// Style for the closing summary line.
pub fn summary() -> Style {
    Style::new().green()
}

/// Apply a style only when color output is enabled.
fn styled(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Format a colorset name with styling.
pub fn fmt_color_name(name: &str, use_color: bool) -> String {
    styled(name, color_name(), use_color)
}

/// Format a path with styling.
pub fn fmt_path(text: &str, use_color: bool) -> String {
    styled(text, path(), use_color)
}

/// Format the summary line with styling.
pub fn fmt_summary(text: &str, use_color: bool) -> String {
    styled(text, summary(), use_color)
}
