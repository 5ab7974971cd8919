//! Warning aggregation and diagnostic summaries.

/// Details about a skipped color entry.
#[derive(Debug, Clone)]
pub struct SkippedColor {
    /// Resource name as written in the input.
    pub(crate) name: String,
    /// Reason the color was skipped.
    pub(crate) reason: String,
}

/// Aggregates warnings and skipped colors for a conversion run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Collected warning messages.
    warnings: Vec<String>,
    /// Collected skipped color records.
    skipped: Vec<SkippedColor>,
}

impl Diagnostics {
    /// Create a new diagnostics collector.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a warning and print it immediately.
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("Warning: {message}");
        self.warnings.push(message);
    }

    /// Record a skipped color without printing; it shows up in the summary.
    pub(crate) fn skip(&mut self, name: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedColor {
            name: name.to_string(),
            reason: reason.into(),
        });
    }

    /// Skipped colors recorded so far.
    #[cfg(test)]
    pub(crate) fn skipped(&self) -> &[SkippedColor] {
        &self.skipped
    }

    /// Warnings recorded so far.
    #[cfg(test)]
    pub(crate) fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Print a summary for skipped colors if any were recorded.
    pub(crate) fn print_skipped_summary(&self) {
        if self.skipped.is_empty() {
            return;
        }

        eprintln!("Skipped {} color(s):", self.skipped.len());
        for skipped in &self.skipped {
            let name = if skipped.name.is_empty() {
                "<unnamed>"
            } else {
                skipped.name.as_str()
            };
            eprintln!("  - {name}: {}", skipped.reason);
        }
    }

    /// Print a warning summary when warnings were emitted.
    pub(crate) fn print_warning_summary(&self) {
        if self.warnings.is_empty() {
            return;
        }

        eprintln!("Completed with {} warning(s).", self.warnings.len());
    }
}
